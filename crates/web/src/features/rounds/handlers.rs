use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::round::{CreateRoundRequest, RoundResponse, UpdateRoundRequest},
};
use validator::Validate;

use crate::cache::StandingsCache;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons/{id}/rounds",
    params(
        ("id" = String, Path, description = "Season id")
    ),
    responses(
        (status = 200, description = "Rounds of the season in round order", body = Vec<RoundResponse>),
        (status = 404, description = "Season not found")
    ),
    tag = "rounds"
)]
pub async fn list_rounds(
    State(db): State<Database>,
    Path(season_id): Path<String>,
) -> Result<Response, WebError> {
    let rounds = services::list_rounds(db.pool(), &season_id).await?;

    let response: Vec<RoundResponse> = rounds.into_iter().map(RoundResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rounds/{id}",
    params(
        ("id" = String, Path, description = "Round id")
    ),
    responses(
        (status = 200, description = "Round found", body = RoundResponse),
        (status = 404, description = "Round not found")
    ),
    tag = "rounds"
)]
pub async fn get_round(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let round = services::get_round(db.pool(), &id).await?;

    Ok(Json(RoundResponse::from(round)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/rounds",
    request_body = CreateRoundRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Round created", body = RoundResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Round number already used or season missing")
    ),
    tag = "rounds"
)]
pub async fn create_round(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Json(req): Json<CreateRoundRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let round = services::create_round(db.pool(), &cache, &req).await?;

    Ok((StatusCode::CREATED, Json(RoundResponse::from(round))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/rounds/{id}",
    params(
        ("id" = String, Path, description = "Round id")
    ),
    request_body = UpdateRoundRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Round updated", body = RoundResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Round not found"),
        (status = 409, description = "Round number already used")
    ),
    tag = "rounds"
)]
pub async fn update_round(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Path(id): Path<String>,
    Json(update_req): Json<UpdateRoundRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_round(db.pool(), &cache, &id, &update_req).await?;

    Ok(Json(RoundResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/rounds/{id}",
    params(
        ("id" = String, Path, description = "Round id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Round deleted with its results and saved points"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Round not found")
    ),
    tag = "rounds"
)]
pub async fn delete_round(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_round(db.pool(), &cache, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
