//! Declarative record schema.
//!
//! A [`RecordSchema`] is a flat rule table over dotted field paths. It
//! is interpreted by the validator next to it and is the single source
//! of truth for field constraints; the storage layer's indexed/unique
//! columns follow the same description.

/// Allowed `lengthCut`/measurement units.
pub const UNITS: &[&str] = &["mm", "cm", "m", "ft", "in"];

/// Material-of-construction codes.
pub const MATERIALS: &[&str] = &["CS", "SS", "AL", "BR"];

/// Fitting options for end A. The empty literal is the unset dropdown.
pub const FITTING_END_A: &[&str] = &["", "Adaptor A", "Custom"];

/// Fitting options for end B.
pub const FITTING_END_B: &[&str] = &["", "Adaptor B", "Custom"];

/// Pigging stage options.
pub const PIGGING_OPTIONS: &[&str] = &[
    "Before Assembly",
    "After Assembly",
    "Before Testing",
    "After Testing",
    "Final Inspection",
    "Packaging",
];

/// The in-process slots, as (path under inProcessDetails, human label).
/// Skiving splits into two surfaces; every slot holds the same
/// ProcessDetail shape.
const PROCESS_SLOTS: &[(&str, &str)] = &[
    ("hoseCutDetails", "Hose Cut"),
    ("skivingDetails.internal", "Skiving (Internal)"),
    ("skivingDetails.external", "Skiving (External)"),
    ("assemblyDetails", "Assembly"),
    ("mandralsDetails", "Mandrals"),
    ("crimpingDetails", "Crimping"),
    ("weldingDetails", "Welding"),
    ("punchingTaggingDetails", "Punching/Tagging"),
];

/// Expected JSON type of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Number,
    Integer,
}

/// Constraint on a single scalar leaf.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Dotted path from the record root, in wire (camelCase) names.
    pub path: String,

    /// Human label used in violation messages.
    pub label: String,

    pub kind: FieldKind,

    /// Required leaves must be present and non-empty after trimming.
    pub required: bool,

    /// Allowed literals for enum-typed string leaves.
    pub one_of: Option<&'static [&'static str]>,

    /// Inclusive lower bound for numeric leaves.
    pub min: Option<f64>,
}

impl FieldRule {
    fn string(path: &str, label: &str, required: bool) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind: FieldKind::Str,
            required,
            one_of: None,
            min: None,
        }
    }

    fn one_of(path: &str, label: &str, values: &'static [&'static str]) -> Self {
        Self {
            one_of: Some(values),
            ..Self::string(path, label, false)
        }
    }

    fn number_min(path: &str, label: &str, min: f64) -> Self {
        Self {
            kind: FieldKind::Number,
            min: Some(min),
            ..Self::string(path, label, false)
        }
    }
}

/// Constraint on a list leaf whose items are drawn from a fixed set.
#[derive(Debug, Clone)]
pub struct ListRule {
    pub path: String,
    pub label: String,
    pub one_of: &'static [&'static str],

    /// Required lists must contain at least one item.
    pub required: bool,
}

/// The full rule table for one record shape.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: Vec<FieldRule>,
    pub lists: Vec<ListRule>,
}

impl RecordSchema {
    /// Schema of the full inspection report.
    pub fn inspection_report() -> Self {
        let (mut fields, lists) = base_rules();
        push_process_rules(&mut fields);
        Self {
            name: "inspectionReport",
            fields,
            lists,
        }
    }

    /// Schema of the narrower job record: the same sections minus
    /// inProcessDetails.
    pub fn job() -> Self {
        let (fields, lists) = base_rules();
        Self {
            name: "job",
            fields,
            lists,
        }
    }
}

/// Rules shared by both record shapes: orderDetails, jobDetails,
/// remarks, footer. Declaration order is the order violations are
/// reported in.
fn base_rules() -> (Vec<FieldRule>, Vec<ListRule>) {
    let fields = vec![
        FieldRule::string("orderDetails.customer", "Customer", true),
        FieldRule::string("orderDetails.flxTagNo", "FLX Tag No", true),
        FieldRule::string("orderDetails.customerTagNo", "Customer Tag No", false),
        FieldRule::string("orderDetails.deliveryDueDate", "Delivery Due Date", true),
        FieldRule::string("orderDetails.reference", "Reference", false),
        FieldRule::string("jobDetails.hoseType", "Hose Type", true),
        FieldRule::string("jobDetails.hoseId", "Hose ID", true),
        FieldRule::number_min("jobDetails.lengthCut.value", "Length Cut", 0.0),
        FieldRule::one_of("jobDetails.lengthCut.unit", "Length Cut Unit", UNITS),
        FieldRule {
            kind: FieldKind::Integer,
            required: true,
            min: Some(1.0),
            ..FieldRule::string("jobDetails.quantity", "Quantity", true)
        },
        FieldRule::one_of("jobDetails.fittingType.endA", "Fitting End A", FITTING_END_A),
        FieldRule::one_of("jobDetails.fittingType.endB", "Fitting End B", FITTING_END_B),
        FieldRule::string(
            "jobDetails.traceability.hoseBatchNumber",
            "Hose Batch Number",
            true,
        ),
        FieldRule::string(
            "jobDetails.traceability.flexifloBatchNo",
            "Flexiflo Batch No",
            false,
        ),
        FieldRule::string("remarks.text", "Remarks", false),
        FieldRule::string("remarks.weldingRodNumber", "Welding Rod Number", false),
        FieldRule::string("remarks.weldingRodSize", "Welding Rod Size", false),
        FieldRule::string("footer.supervisorSignature", "Supervisor Signature", true),
        FieldRule::string("footer.date", "Date", true),
    ];

    let lists = vec![
        ListRule {
            path: "jobDetails.moc".into(),
            label: "MOC".into(),
            one_of: MATERIALS,
            required: true,
        },
        ListRule {
            path: "remarks.piggingOptions".into(),
            label: "Pigging Option".into(),
            one_of: PIGGING_OPTIONS,
            required: false,
        },
    ];

    (fields, lists)
}

/// ProcessDetail rules for every in-process slot: free-text fields may
/// only be strings, measurements must be non-negative with a known unit.
fn push_process_rules(fields: &mut Vec<FieldRule>) {
    for (slot, label) in PROCESS_SLOTS {
        let at = |leaf: &str| format!("inProcessDetails.{slot}.{leaf}");
        fields.push(FieldRule::string(&at("date"), &format!("{label} Date"), false));
        fields.push(FieldRule::string(
            &at("operatorSign"),
            &format!("{label} Operator Sign"),
            false,
        ));
        fields.push(FieldRule::string(
            &at("machineNumber"),
            &format!("{label} Machine Number"),
            false,
        ));
        fields.push(FieldRule::string(
            &at("additionalNotes"),
            &format!("{label} Notes"),
            false,
        ));
        fields.push(FieldRule::number_min(
            &at("measurements.value"),
            &format!("{label} Measurement"),
            0.0,
        ));
        fields.push(FieldRule::one_of(
            &at("measurements.unit"),
            &format!("{label} Measurement Unit"),
            UNITS,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_schema_is_the_report_schema_without_process_rules() {
        let report = RecordSchema::inspection_report();
        let job = RecordSchema::job();

        assert!(job.fields.len() < report.fields.len());
        assert!(job.fields.iter().all(|f| !f.path.starts_with("inProcessDetails")));
        assert!(report.fields.iter().any(|f| f.path.starts_with("inProcessDetails")));

        // The shared prefix is identical.
        for (a, b) in job.fields.iter().zip(report.fields.iter()) {
            assert_eq!(a.path, b.path);
        }
        assert_eq!(job.lists.len(), report.lists.len());
    }

    #[test]
    fn every_slot_gets_measurement_rules() {
        let report = RecordSchema::inspection_report();
        let count = report
            .fields
            .iter()
            .filter(|f| f.path.ends_with("measurements.value"))
            .count();
        assert_eq!(count, 8);
    }
}
