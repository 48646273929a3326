use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::race_result::UpsertRaceResultRequest, models::RaceResult};
use validator::Validate;

use crate::cache::StandingsCache;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rounds/{id}/results",
    params(
        ("id" = String, Path, description = "Round id")
    ),
    responses(
        (status = 200, description = "Results of the round, race by race", body = Vec<RaceResult>),
        (status = 404, description = "Round not found")
    ),
    tag = "results"
)]
pub async fn list_results(
    State(db): State<Database>,
    Path(round_id): Path<String>,
) -> Result<Response, WebError> {
    let results = services::list_results(db.pool(), &round_id).await?;

    Ok(Json(results).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = UpsertRaceResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result recorded", body = RaceResult),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Round not found")
    ),
    tag = "results"
)]
pub async fn upsert_result(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Json(req): Json<UpsertRaceResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_group()?;

    let result = services::upsert_result(db.pool(), &cache, &req).await?;

    Ok(Json(result).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = String, Path, description = "Result id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Result deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_result(db.pool(), &cache, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
