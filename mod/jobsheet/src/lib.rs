pub mod api;
pub mod model;
pub mod schema;
pub mod service;

use std::sync::Arc;

use axum::Router;
use flexerp_core::Module;

use service::JobsheetService;

/// Jobsheet module: job-sheet / in-process inspection records.
pub struct JobsheetModule {
    service: Arc<JobsheetService>,
}

impl JobsheetModule {
    pub fn new(service: JobsheetService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for JobsheetModule {
    fn name(&self) -> &str {
        "jobsheet"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
