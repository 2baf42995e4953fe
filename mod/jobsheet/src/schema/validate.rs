//! Structural validation of a candidate record against a [`RecordSchema`].
//!
//! One pass, all violations collected, deterministic order (rule
//! declaration order), candidate never mutated. The same function runs
//! on the client before submission and on the server before persistence.

use serde_json::Value;

use super::def::{FieldKind, FieldRule, ListRule, RecordSchema};

/// One failed constraint: the dotted path of the offending leaf and a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: &str, message: String) -> Self {
        Self {
            path: path.to_string(),
            message,
        }
    }
}

impl RecordSchema {
    /// Check a candidate record. Returns every violation in rule order;
    /// `Ok(())` when the candidate conforms.
    pub fn validate(&self, candidate: &Value) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        for rule in &self.fields {
            check_field(rule, candidate, &mut violations);
        }
        for rule in &self.lists {
            check_list(rule, candidate, &mut violations);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Walk a dotted path into a JSON value.
fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |v, seg| v.get(seg))
}

fn check_field(rule: &FieldRule, candidate: &Value, out: &mut Vec<Violation>) {
    let found = match lookup(candidate, &rule.path) {
        Some(Value::Null) | None => {
            if rule.required {
                out.push(Violation::new(
                    &rule.path,
                    format!("{} is required", rule.label),
                ));
            }
            return;
        }
        Some(v) => v,
    };

    match rule.kind {
        FieldKind::Str => check_string(rule, found, out),
        FieldKind::Number | FieldKind::Integer => check_number(rule, found, out),
    }
}

fn check_string(rule: &FieldRule, found: &Value, out: &mut Vec<Violation>) {
    let Some(s) = found.as_str() else {
        out.push(Violation::new(
            &rule.path,
            format!("{} must be a string", rule.label),
        ));
        return;
    };

    // An empty (or whitespace-only) string counts as absent: missing
    // for required leaves, unconstrained for optional ones. This also
    // covers the unset ("") fitting-end literal.
    if s.trim().is_empty() {
        if rule.required {
            out.push(Violation::new(
                &rule.path,
                format!("{} is required", rule.label),
            ));
        }
        return;
    }

    if let Some(allowed) = rule.one_of {
        if !allowed.contains(&s) {
            out.push(Violation::new(
                &rule.path,
                format!("{} must be one of {}", rule.label, join_quoted(allowed)),
            ));
        }
    }
}

fn check_number(rule: &FieldRule, found: &Value, out: &mut Vec<Violation>) {
    let Some(n) = found.as_f64() else {
        out.push(Violation::new(
            &rule.path,
            format!("{} must be a number", rule.label),
        ));
        return;
    };

    if rule.kind == FieldKind::Integer && found.as_i64().is_none() {
        out.push(Violation::new(
            &rule.path,
            format!("{} must be a whole number", rule.label),
        ));
        return;
    }

    if let Some(min) = rule.min {
        if n < min {
            out.push(Violation::new(
                &rule.path,
                format!("{} must be at least {}", rule.label, fmt_bound(min)),
            ));
        }
    }
}

fn check_list(rule: &ListRule, candidate: &Value, out: &mut Vec<Violation>) {
    let found = match lookup(candidate, &rule.path) {
        Some(Value::Null) | None => {
            if rule.required {
                out.push(Violation::new(
                    &rule.path,
                    format!("At least one {} must be selected", rule.label),
                ));
            }
            return;
        }
        Some(v) => v,
    };

    let Some(items) = found.as_array() else {
        out.push(Violation::new(
            &rule.path,
            format!("{} must be a list", rule.label),
        ));
        return;
    };

    if items.is_empty() {
        if rule.required {
            out.push(Violation::new(
                &rule.path,
                format!("At least one {} must be selected", rule.label),
            ));
        }
        return;
    }

    // One violation per list regardless of how many items are bad; the
    // UI attaches errors per field, not per item.
    let all_members = items
        .iter()
        .all(|item| item.as_str().is_some_and(|s| rule.one_of.contains(&s)));
    if !all_members {
        out.push(Violation::new(
            &rule.path,
            format!("{} must be one of {}", rule.label, join_quoted(rule.one_of)),
        ));
    }
}

fn join_quoted(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a numeric bound without a trailing ".0" for whole numbers.
fn fmt_bound(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
