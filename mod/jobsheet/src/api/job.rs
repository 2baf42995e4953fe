use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};

use flexerp_core::ListParams;

use crate::model::Job;
use super::{ApiData, ApiError, AppState, require_body};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/job", post(create_job).get(list_jobs))
        .route("/job/{id}", get(get_job))
}

async fn create_job(
    State(svc): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<ApiData<Job>>), ApiError> {
    require_body(&body)?;
    let record = svc.create_job(body)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiData::created("Job successfully added.", record)),
    ))
}

async fn list_jobs(
    State(svc): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiData<Vec<Job>>>, ApiError> {
    let result = svc.list_jobs(&params)?;
    Ok(Json(ApiData::ok(result.items)))
}

async fn get_job(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiData<Job>>, ApiError> {
    let record = svc.get_job(&id)?;
    Ok(Json(ApiData::ok(record)))
}
