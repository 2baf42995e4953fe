use flexerp_core::{ListParams, ListResult, ServiceError, new_id, now_rfc3339};
use flexerp_sql::Value;

use crate::model::Job;
use crate::schema::RecordSchema;
use super::JobsheetService;

impl JobsheetService {
    /// Create a job from a raw JSON body, validated against the
    /// narrower job schema.
    ///
    /// There is deliberately no update operation: what an update should
    /// mean for a stored job (full replace vs patch, which fields stay
    /// frozen) has never been defined.
    pub fn create_job(&self, body: serde_json::Value) -> Result<Job, ServiceError> {
        Self::check_body(&RecordSchema::job(), &body)?;

        let mut record: Job = serde_json::from_value(body)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        record.id = new_id();
        let now = now_rfc3339();
        record.created_at = Some(now.clone());
        record.updated_at = Some(now.clone());

        self.insert_record("jobs", &record.id, &record, &[
            ("customer", Value::Text(record.order_details.customer.clone())),
            ("flx_tag_no", Value::Text(record.order_details.flx_tag_no.clone())),
            ("hose_type", Value::Text(record.job_details.hose_type.clone())),
            ("created_at", Value::Text(now.clone())),
            ("updated_at", Value::Text(now)),
        ])?;

        tracing::info!(id = %record.id, tag = %record.order_details.flx_tag_no, "job created");
        Ok(record)
    }

    pub fn get_job(&self, id: &str) -> Result<Job, ServiceError> {
        self.get_record("jobs", "job", id)
    }

    pub fn list_jobs(&self, params: &ListParams) -> Result<ListResult<Job>, ServiceError> {
        let limit = params.limit.min(500);
        self.list_records("jobs", limit, params.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_service;

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "orderDetails": {
                "customer": "Acme Refinery",
                "flxTagNo": "FLX-2001",
                "deliveryDueDate": "2025-04-01",
            },
            "jobDetails": {
                "hoseType": "Convoluted",
                "hoseId": "H-201",
                "quantity": 1,
                "moc": ["CS", "AL"],
                "traceability": {"hoseBatchNumber": "HB-2025-11"},
            },
            "footer": {
                "supervisorSignature": "S. Rao",
                "date": "2025-02-14",
            },
        })
    }

    #[test]
    fn create_get_list_roundtrip() {
        let svc = test_service();
        let job = svc.create_job(valid_body()).unwrap();
        assert!(!job.id.is_empty());
        assert_eq!(job.created_at, job.updated_at);

        let fetched = svc.get_job(&job.id).unwrap();
        assert_eq!(fetched, job);

        let listed = svc.list_jobs(&ListParams::default()).unwrap();
        assert_eq!(listed.total, 1);
    }

    #[test]
    fn job_body_is_not_checked_against_process_rules() {
        let svc = test_service();
        let mut body = valid_body();
        // A job carries no in-process section; stray data there is not
        // constrained (and not deserialized either).
        body["inProcessDetails"] = serde_json::json!({"weldingDetails": {"date": 7}});
        assert!(svc.create_job(body).is_ok());
    }

    #[test]
    fn missing_required_field_is_a_validation_failure() {
        let svc = test_service();
        let mut body = valid_body();
        body["orderDetails"]
            .as_object_mut()
            .unwrap()
            .remove("customer");

        let err = svc.create_job(body).unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors[0].field, "orderDetails.customer");
                assert_eq!(errors[0].message, "Customer is required");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_job_tag_is_a_conflict() {
        let svc = test_service();
        svc.create_job(valid_body()).unwrap();
        let err = svc.create_job(valid_body()).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
