use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::saved_point::UpsertSavedPointRequest,
    models::{PointKey, SavedPoint},
};
use validator::Validate;

use crate::cache::StandingsCache;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons/{id}/saved-points",
    params(
        ("id" = String, Path, description = "Season id")
    ),
    responses(
        (status = 200, description = "Saved points of the season", body = Vec<SavedPoint>),
        (status = 404, description = "Season not found")
    ),
    tag = "points"
)]
pub async fn list_saved_points(
    State(db): State<Database>,
    Path(season_id): Path<String>,
) -> Result<Response, WebError> {
    let saved = services::list_saved_points(db.pool(), &season_id).await?;

    Ok(Json(saved).into_response())
}

#[utoipa::path(
    put,
    path = "/api/saved-points",
    request_body = UpsertSavedPointRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Points saved", body = SavedPoint),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Round not found")
    ),
    tag = "points"
)]
pub async fn save_points(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Json(req): Json<UpsertSavedPointRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_points()?;

    let saved = services::save_points(db.pool(), &cache, &req).await?;

    Ok(Json(saved).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/saved-points",
    params(PointKey),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Saved points removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No saved points for this entry")
    ),
    tag = "points"
)]
pub async fn delete_saved_points(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Query(key): Query<PointKey>,
) -> Result<Response, WebError> {
    services::delete_saved_points(db.pool(), &cache, &key.normalized()).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
