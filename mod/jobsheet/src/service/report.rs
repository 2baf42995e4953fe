use flexerp_core::{ListParams, ListResult, ServiceError, new_id, now_rfc3339};
use flexerp_sql::Value;

use crate::model::InspectionReport;
use crate::schema::RecordSchema;
use super::JobsheetService;

impl JobsheetService {
    /// Create an inspection report from a raw JSON body.
    ///
    /// The body is validated against the report schema before it is
    /// deserialized; id and both timestamps are assigned here, equal on
    /// creation.
    pub fn create_report(
        &self,
        body: serde_json::Value,
    ) -> Result<InspectionReport, ServiceError> {
        Self::check_body(&RecordSchema::inspection_report(), &body)?;

        let mut record: InspectionReport = serde_json::from_value(body)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        record.id = new_id();
        let now = now_rfc3339();
        record.created_at = Some(now.clone());
        record.updated_at = Some(now.clone());

        self.insert_record("inspection_reports", &record.id, &record, &[
            ("customer", Value::Text(record.order_details.customer.clone())),
            ("flx_tag_no", Value::Text(record.order_details.flx_tag_no.clone())),
            ("hose_type", Value::Text(record.job_details.hose_type.clone())),
            ("created_at", Value::Text(now.clone())),
            ("updated_at", Value::Text(now)),
        ])?;

        tracing::info!(id = %record.id, tag = %record.order_details.flx_tag_no, "inspection report created");
        Ok(record)
    }

    pub fn get_report(&self, id: &str) -> Result<InspectionReport, ServiceError> {
        self.get_record("inspection_reports", "report", id)
    }

    pub fn list_reports(
        &self,
        params: &ListParams,
    ) -> Result<ListResult<InspectionReport>, ServiceError> {
        let limit = params.limit.min(500);
        self.list_records("inspection_reports", limit, params.offset)
    }
}
