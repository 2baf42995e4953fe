//! The form session controller.
//!
//! Holds the in-progress record, per-section expansion state, the flat
//! error map and the submission lifecycle. Validation runs locally with
//! the same schema the server enforces, so a draft that passes here
//! only bounces if someone else took the tag number first.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flexerp_core::FieldError;
use jobsheet::model::InspectionReport;
use jobsheet::schema::{RecordSchema, Violation, collect_flat};

/// Top-level record sections, in form order.
pub const SECTIONS: &[&str] = &[
    "orderDetails",
    "jobDetails",
    "inProcessDetails",
    "remarks",
    "footer",
];

#[derive(Error, Debug)]
pub enum FormError {
    #[error("unknown section '{0}' (expected one of orderDetails, jobDetails, inProcessDetails, remarks, footer)")]
    UnknownSection(String),

    #[error("section data must be a JSON object")]
    NotAnObject,

    #[error("section data does not fit the record shape: {0}")]
    Shape(String),

    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

/// How the backend rejected (or failed to receive) a submission.
#[derive(Debug)]
pub enum SubmitError {
    /// 400 with per-field violations, same shape as local validation.
    Validation(Vec<FieldError>),

    /// The server refused with a user-facing message (e.g. a duplicate
    /// tag number).
    Rejected(String),

    /// The request never produced a usable response.
    Transport(String),
}

/// Where a submission ended up.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored; carries the record as the server returned it.
    Saved(InspectionReport),

    /// Field violations, local or server-side; see the error map.
    Invalid,

    /// A submission-level failure; see the notice.
    Failed,
}

/// Transport seam for submissions, so the session is testable without a
/// server.
pub trait SubmitGateway {
    fn create_report(&self, draft: &InspectionReport) -> Result<InspectionReport, SubmitError>;
}

/// One form session: a draft record plus everything the UI needs to
/// render it. Persisted as JSON between CLI invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSession {
    pub draft: InspectionReport,

    /// Flat field key to first error message.
    #[serde(default)]
    pub errors: BTreeMap<String, String>,

    /// Currently expanded sections.
    #[serde(default = "default_expanded")]
    pub expanded: BTreeSet<String>,

    /// Last submission-level message (success or failure).
    #[serde(default)]
    pub notice: String,

    #[serde(skip)]
    in_flight: bool,
}

fn default_expanded() -> BTreeSet<String> {
    BTreeSet::from(["orderDetails".to_string()])
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Fresh session: empty draft, only orderDetails expanded.
    pub fn new() -> Self {
        Self {
            draft: InspectionReport::default(),
            errors: BTreeMap::new(),
            expanded: default_expanded(),
            notice: String::new(),
            in_flight: false,
        }
    }

    /// Merge partial data into one section.
    ///
    /// The merge is shallow: top-level keys of the partial replace the
    /// section's keys wholesale, untouched keys and the other sections
    /// are preserved. Data that does not fit the record shape is
    /// rejected without modifying the draft.
    pub fn update_section(
        &mut self,
        section: &str,
        partial: &serde_json::Value,
    ) -> Result<(), FormError> {
        if !SECTIONS.contains(&section) {
            return Err(FormError::UnknownSection(section.to_string()));
        }
        let patch = partial.as_object().ok_or(FormError::NotAnObject)?;

        let mut draft = serde_json::to_value(&self.draft)
            .map_err(|e| FormError::Shape(e.to_string()))?;
        let target = draft
            .get_mut(section)
            .and_then(|v| v.as_object_mut())
            .ok_or(FormError::NotAnObject)?;
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }

        self.draft =
            serde_json::from_value(draft).map_err(|e| FormError::Shape(e.to_string()))?;
        Ok(())
    }

    /// Flip a section's expansion state. Returns the new state.
    pub fn toggle_section(&mut self, section: &str) -> Result<bool, FormError> {
        if !SECTIONS.contains(&section) {
            return Err(FormError::UnknownSection(section.to_string()));
        }
        if self.expanded.remove(section) {
            Ok(false)
        } else {
            self.expanded.insert(section.to_string());
            Ok(true)
        }
    }

    pub fn is_expanded(&self, section: &str) -> bool {
        self.expanded.contains(section)
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validate and submit the draft.
    ///
    /// Local violations halt before any network call. Server-returned
    /// violations land in the same flat-key error map as local ones.
    /// The draft resets to defaults only on confirmed success.
    pub fn submit<G: SubmitGateway>(&mut self, gateway: &G) -> Result<SubmitOutcome, FormError> {
        if self.in_flight {
            return Err(FormError::SubmissionInFlight);
        }
        self.notice.clear();
        self.errors.clear();

        let candidate = serde_json::to_value(&self.draft)
            .map_err(|e| FormError::Shape(e.to_string()))?;
        if let Err(violations) = RecordSchema::inspection_report().validate(&candidate) {
            self.errors = collect_flat(&violations);
            return Ok(SubmitOutcome::Invalid);
        }

        self.in_flight = true;
        let result = gateway.create_report(&self.draft);
        self.in_flight = false;

        match result {
            Ok(stored) => {
                self.draft = InspectionReport::default();
                self.notice = "Report saved successfully.".into();
                Ok(SubmitOutcome::Saved(stored))
            }
            Err(SubmitError::Validation(errors)) => {
                let violations: Vec<Violation> = errors
                    .into_iter()
                    .map(|e| Violation {
                        path: e.field,
                        message: e.message,
                    })
                    .collect();
                self.errors = collect_flat(&violations);
                Ok(SubmitOutcome::Invalid)
            }
            Err(SubmitError::Rejected(message)) => {
                self.notice = message;
                Ok(SubmitOutcome::Failed)
            }
            Err(SubmitError::Transport(_)) => {
                self.notice = "Failed to save report. Please try again.".into();
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Throw the draft away; keeps the expansion state.
    pub fn reset(&mut self) {
        self.draft = InspectionReport::default();
        self.errors.clear();
        self.notice.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Scripted gateway: pops the next canned response per call.
    struct FakeGateway {
        responses: RefCell<Vec<Result<InspectionReport, SubmitError>>>,
        calls: Cell<usize>,
    }

    impl FakeGateway {
        fn with(response: Result<InspectionReport, SubmitError>) -> Self {
            Self {
                responses: RefCell::new(vec![response]),
                calls: Cell::new(0),
            }
        }

        fn unreachable() -> Self {
            Self {
                responses: RefCell::new(Vec::new()),
                calls: Cell::new(0),
            }
        }
    }

    impl SubmitGateway for FakeGateway {
        fn create_report(
            &self,
            _draft: &InspectionReport,
        ) -> Result<InspectionReport, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.responses
                .borrow_mut()
                .pop()
                .expect("gateway was not supposed to be called")
        }
    }

    fn filled_session() -> FormSession {
        let mut session = FormSession::new();
        session
            .update_section(
                "orderDetails",
                &serde_json::json!({
                    "customer": "Acme Refinery",
                    "flxTagNo": "FLX-1042",
                    "deliveryDueDate": "2025-03-01",
                }),
            )
            .unwrap();
        session
            .update_section(
                "jobDetails",
                &serde_json::json!({
                    "hoseType": "PTFE Smoothbore",
                    "hoseId": "H-106",
                    "quantity": 4,
                    "moc": ["SS"],
                    "traceability": {"hoseBatchNumber": "HB-2025-08"},
                }),
            )
            .unwrap();
        session
            .update_section(
                "footer",
                &serde_json::json!({
                    "supervisorSignature": "S. Rao",
                    "date": "2025-02-12",
                }),
            )
            .unwrap();
        session
    }

    fn stored(tag: &str) -> InspectionReport {
        let mut r = InspectionReport::default();
        r.id = "abc123".into();
        r.order_details.flx_tag_no = tag.into();
        r.created_at = Some("2025-02-12T10:00:00+00:00".into());
        r.updated_at = r.created_at.clone();
        r
    }

    #[test]
    fn new_session_expands_only_order_details() {
        let session = FormSession::new();
        assert!(session.is_expanded("orderDetails"));
        for section in ["jobDetails", "inProcessDetails", "remarks", "footer"] {
            assert!(!session.is_expanded(section));
        }
    }

    #[test]
    fn update_section_merges_shallowly() {
        let mut session = FormSession::new();
        session
            .update_section("orderDetails", &serde_json::json!({"customer": "Acme"}))
            .unwrap();
        session
            .update_section("orderDetails", &serde_json::json!({"flxTagNo": "FLX-1"}))
            .unwrap();

        // The second patch did not clobber the first.
        assert_eq!(session.draft.order_details.customer, "Acme");
        assert_eq!(session.draft.order_details.flx_tag_no, "FLX-1");
        // Other sections untouched.
        assert_eq!(session.draft.job_details.quantity, 0);
    }

    #[test]
    fn shallow_merge_replaces_nested_objects_wholesale() {
        let mut session = FormSession::new();
        session
            .update_section(
                "jobDetails",
                &serde_json::json!({"traceability": {"hoseBatchNumber": "HB-1", "flexifloBatchNo": "FF-9"}}),
            )
            .unwrap();
        session
            .update_section(
                "jobDetails",
                &serde_json::json!({"traceability": {"hoseBatchNumber": "HB-2"}}),
            )
            .unwrap();

        assert_eq!(
            session.draft.job_details.traceability.hose_batch_number,
            "HB-2"
        );
        // Top-level keys replace wholesale: the sibling leaf is gone.
        assert_eq!(session.draft.job_details.traceability.flexiflo_batch_no, "");
    }

    #[test]
    fn bad_section_or_shape_is_rejected_without_change() {
        let mut session = FormSession::new();
        assert!(matches!(
            session.update_section("nope", &serde_json::json!({})),
            Err(FormError::UnknownSection(_))
        ));
        assert!(matches!(
            session.update_section("orderDetails", &serde_json::json!("text")),
            Err(FormError::NotAnObject)
        ));

        let before = session.draft.clone();
        let err = session.update_section(
            "jobDetails",
            &serde_json::json!({"quantity": "four"}),
        );
        assert!(matches!(err, Err(FormError::Shape(_))));
        assert_eq!(session.draft, before);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut session = FormSession::new();
        assert!(session.toggle_section("footer").unwrap());
        assert!(session.is_expanded("footer"));
        assert!(!session.toggle_section("footer").unwrap());
        assert!(!session.is_expanded("footer"));
        assert!(session.toggle_section("bogus").is_err());
    }

    #[test]
    fn submit_halts_on_local_violations_without_calling_the_gateway() {
        let mut session = FormSession::new();
        let gateway = FakeGateway::unreachable();

        let outcome = session.submit(&gateway).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert_eq!(gateway.calls.get(), 0);

        assert_eq!(session.errors["customer"], "Customer is required");
        assert_eq!(session.errors["quantity"], "Quantity must be at least 1");
        assert_eq!(
            session.errors["moc"],
            "At least one MOC must be selected"
        );
    }

    #[test]
    fn successful_submit_resets_the_draft() {
        let mut session = filled_session();
        let gateway = FakeGateway::with(Ok(stored("FLX-1042")));

        let outcome = session.submit(&gateway).unwrap();
        match outcome {
            SubmitOutcome::Saved(record) => assert_eq!(record.id, "abc123"),
            other => panic!("expected Saved, got {other:?}"),
        }
        assert_eq!(gateway.calls.get(), 1);
        assert_eq!(session.draft, InspectionReport::default());
        assert!(session.errors.is_empty());
        assert_eq!(session.notice, "Report saved successfully.");
        assert!(!session.in_flight());
    }

    #[test]
    fn server_violations_reconcile_to_the_same_flat_keys() {
        let mut session = filled_session();
        let gateway = FakeGateway::with(Err(SubmitError::Validation(vec![
            FieldError::new("jobDetails.quantity", "Quantity must be at least 1"),
            FieldError::new("somewhere.new", "Strange field"),
        ])));

        let outcome = session.submit(&gateway).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert_eq!(session.errors["quantity"], "Quantity must be at least 1");
        // Unknown paths fall through as-is instead of being dropped.
        assert_eq!(session.errors["somewhere.new"], "Strange field");
        // The draft survives for correction.
        assert_eq!(session.draft.order_details.customer, "Acme Refinery");
    }

    #[test]
    fn conflict_sets_a_notice_and_keeps_the_draft() {
        let mut session = filled_session();
        let gateway =
            FakeGateway::with(Err(SubmitError::Rejected("Duplicate entry found".into())));

        let outcome = session.submit(&gateway).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Failed));
        assert_eq!(session.notice, "Duplicate entry found");
        assert!(session.errors.is_empty());
        assert_eq!(session.draft.order_details.flx_tag_no, "FLX-1042");
    }

    #[test]
    fn transport_failure_sets_the_generic_notice() {
        let mut session = filled_session();
        let gateway =
            FakeGateway::with(Err(SubmitError::Transport("connection refused".into())));

        let outcome = session.submit(&gateway).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Failed));
        assert_eq!(session.notice, "Failed to save report. Please try again.");
    }

    #[test]
    fn submit_while_in_flight_is_rejected() {
        let mut session = filled_session();
        session.in_flight = true;

        let gateway = FakeGateway::unreachable();
        let err = session.submit(&gateway).unwrap_err();
        assert!(matches!(err, FormError::SubmissionInFlight));
        assert_eq!(gateway.calls.get(), 0);
    }

    #[test]
    fn session_json_roundtrip_preserves_draft_and_expansion() {
        let mut session = filled_session();
        session.toggle_section("footer").unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let back: FormSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.draft, session.draft);
        assert!(back.is_expanded("footer"));
        assert!(!back.in_flight());
    }
}
