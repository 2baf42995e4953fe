use serde::{Deserialize, Serialize};

use super::report::{Footer, JobDetails, OrderDetails, Remarks};

/// Job is the narrower record variant: the order/job/remarks/footer
/// sections without the in-process inspection data. Used where a job is
/// registered before any shop-floor step has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub order_details: OrderDetails,

    #[serde(default)]
    pub job_details: JobDetails,

    #[serde(default)]
    pub remarks: Remarks,

    #[serde(default)]
    pub footer: Footer,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_json_roundtrip() {
        let j = Job {
            id: "j001".into(),
            order_details: OrderDetails {
                customer: "Acme Refinery".into(),
                flx_tag_no: "FLX-2001".into(),
                delivery_due_date: "2025-04-01".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let json = serde_json::to_string(&j).unwrap();
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(j, back);
    }

    #[test]
    fn job_has_no_in_process_section() {
        let json = serde_json::to_value(Job::default()).unwrap();
        assert!(json.get("inProcessDetails").is_none());
    }
}
