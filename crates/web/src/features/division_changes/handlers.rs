use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{division_change::CreateDivisionChangeRequest, standings::DivisionTimelineEntry},
    models::DivisionChange,
};
use validator::Validate;

use crate::cache::StandingsCache;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons/{id}/division-changes",
    params(
        ("id" = String, Path, description = "Season id")
    ),
    responses(
        (status = 200, description = "Division changes of the season", body = Vec<DivisionChange>),
        (status = 404, description = "Season not found")
    ),
    tag = "divisions"
)]
pub async fn list_division_changes(
    State(db): State<Database>,
    Path(season_id): Path<String>,
) -> Result<Response, WebError> {
    let changes = services::list_division_changes(db.pool(), &season_id).await?;

    Ok(Json(changes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/seasons/{id}/drivers/{driver_id}/divisions",
    params(
        ("id" = String, Path, description = "Season id"),
        ("driver_id" = String, Path, description = "Driver id")
    ),
    responses(
        (status = 200, description = "Division at every round", body = Vec<DivisionTimelineEntry>),
        (status = 404, description = "Season or driver not found")
    ),
    tag = "divisions"
)]
pub async fn get_driver_divisions(
    State(db): State<Database>,
    Path((season_id, driver_id)): Path<(String, String)>,
) -> Result<Response, WebError> {
    let timeline = services::driver_divisions(db.pool(), &season_id, &driver_id).await?;

    Ok(Json(timeline).into_response())
}

#[utoipa::path(
    post,
    path = "/api/division-changes",
    request_body = CreateDivisionChangeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Division change recorded", body = DivisionChange),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Season or driver does not exist")
    ),
    tag = "divisions"
)]
pub async fn create_division_change(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Json(req): Json<CreateDivisionChangeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_divisions()?;

    let change = services::create_division_change(db.pool(), &cache, &req).await?;

    Ok((StatusCode::CREATED, Json(change)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/division-changes/{id}",
    params(
        ("id" = String, Path, description = "Division change id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Division change deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Division change not found")
    ),
    tag = "divisions"
)]
pub async fn delete_division_change(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_division_change(db.pool(), &cache, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
