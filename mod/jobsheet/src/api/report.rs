use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};

use flexerp_core::ListParams;

use crate::model::InspectionReport;
use super::{ApiData, ApiError, AppState, require_body};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inspection-report", post(create_report).get(list_reports))
        .route("/inspection-report/{id}", get(get_report))
}

async fn create_report(
    State(svc): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<ApiData<InspectionReport>>), ApiError> {
    require_body(&body)?;
    let record = svc.create_report(body)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiData::created("Report successfully added.", record)),
    ))
}

async fn list_reports(
    State(svc): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiData<Vec<InspectionReport>>>, ApiError> {
    let result = svc.list_reports(&params)?;
    Ok(Json(ApiData::ok(result.items)))
}

async fn get_report(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiData<InspectionReport>>, ApiError> {
    let record = svc.get_report(&id)?;
    Ok(Json(ApiData::ok(record)))
}
