use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::season::CreateSeasonRequest, models::Season};
use validator::Validate;

use crate::cache::StandingsCache;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons",
    responses(
        (status = 200, description = "List all seasons", body = Vec<Season>)
    ),
    tag = "seasons"
)]
pub async fn list_seasons(State(db): State<Database>) -> Result<Response, WebError> {
    let seasons = services::list_seasons(db.pool()).await?;

    Ok(Json(seasons).into_response())
}

#[utoipa::path(
    get,
    path = "/api/seasons/{id}",
    params(
        ("id" = String, Path, description = "Season id")
    ),
    responses(
        (status = 200, description = "Season found", body = Season),
        (status = 404, description = "Season not found")
    ),
    tag = "seasons"
)]
pub async fn get_season(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let season = services::get_season(db.pool(), &id).await?;

    Ok(Json(season).into_response())
}

#[utoipa::path(
    post,
    path = "/api/seasons",
    request_body = CreateSeasonRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Season created", body = Season),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "seasons"
)]
pub async fn create_season(
    State(db): State<Database>,
    Json(req): Json<CreateSeasonRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_dates()?;

    let season = services::create_season(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(season)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/seasons/{id}",
    params(
        ("id" = String, Path, description = "Season id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Season deleted with its rounds and results"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Season not found")
    ),
    tag = "seasons"
)]
pub async fn delete_season(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_season(db.pool(), &cache, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
