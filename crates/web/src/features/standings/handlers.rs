use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::standings::{DriverPoints, PreviewStandingsRequest, StandingsFilter, StandingsReport},
};
use validator::Validate;

use crate::cache::StandingsCache;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons/{id}/standings",
    params(
        ("id" = String, Path, description = "Season id"),
        StandingsFilter
    ),
    responses(
        (status = 200, description = "Ranked points, season totals and standings", body = StandingsReport),
        (status = 400, description = "Invalid filter"),
        (status = 404, description = "Season not found")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Path(season_id): Path<String>,
    Query(filter): Query<StandingsFilter>,
) -> Result<Response, WebError> {
    let report = services::season_standings(db.pool(), &cache, &season_id, filter).await?;

    Ok(Json(report.as_ref()).into_response())
}

#[utoipa::path(
    post,
    path = "/api/seasons/{id}/standings/preview",
    params(
        ("id" = String, Path, description = "Season id")
    ),
    request_body = PreviewStandingsRequest,
    responses(
        (status = 200, description = "Standings with the pending edits applied", body = StandingsReport),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Season not found")
    ),
    tag = "standings"
)]
pub async fn preview_standings(
    State(db): State<Database>,
    Path(season_id): Path<String>,
    Json(req): Json<PreviewStandingsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let report = services::preview_standings(db.pool(), &season_id, req).await?;

    Ok(Json(report).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rounds/{id}/points",
    params(
        ("id" = String, Path, description = "Round id")
    ),
    responses(
        (status = 200, description = "Calculated points of every race entry of the round", body = Vec<DriverPoints>),
        (status = 404, description = "Round not found")
    ),
    tag = "standings"
)]
pub async fn get_round_points(
    State(db): State<Database>,
    Path(round_id): Path<String>,
) -> Result<Response, WebError> {
    let points = services::round_points(db.pool(), &round_id).await?;

    Ok(Json(points).into_response())
}
