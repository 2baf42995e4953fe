//! Blocking HTTP gateway to a flexerpd instance.

use serde::Deserialize;

use flexerp_core::FieldError;
use jobsheet::model::InspectionReport;

use crate::form::{SubmitError, SubmitGateway};

/// Response envelope shared by success and failure bodies.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    errors: Option<Vec<FieldError>>,

    #[serde(default)]
    data: Option<T>,
}

pub struct HttpGateway {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpGateway {
    pub fn new(server: &str) -> Self {
        Self {
            base_url: server.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl SubmitGateway for HttpGateway {
    fn create_report(&self, draft: &InspectionReport) -> Result<InspectionReport, SubmitError> {
        let url = format!("{}/api/inspection-report", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = resp.status();
        let body: Envelope<InspectionReport> = resp
            .json()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if status == reqwest::StatusCode::CREATED {
            return body
                .data
                .ok_or_else(|| SubmitError::Transport("missing data in 201 response".into()));
        }

        if status == reqwest::StatusCode::BAD_REQUEST {
            if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
                return Err(SubmitError::Validation(errors));
            }
        }

        Err(SubmitError::Rejected(
            body.message
                .unwrap_or_else(|| format!("server returned {}", status)),
        ))
    }
}
