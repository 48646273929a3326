use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::driver::{CreateDriverRequest, UpdateDriverRequest},
    models::Driver,
};
use validator::Validate;

use crate::cache::StandingsCache;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/drivers",
    responses(
        (status = 200, description = "List all drivers", body = Vec<Driver>)
    ),
    tag = "drivers"
)]
pub async fn list_drivers(State(db): State<Database>) -> Result<Response, WebError> {
    let drivers = services::list_drivers(db.pool()).await?;

    Ok(Json(drivers).into_response())
}

#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    params(
        ("id" = String, Path, description = "Driver id")
    ),
    responses(
        (status = 200, description = "Driver found", body = Driver),
        (status = 404, description = "Driver not found")
    ),
    tag = "drivers"
)]
pub async fn get_driver(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let driver = services::get_driver(db.pool(), &id).await?;

    Ok(Json(driver).into_response())
}

#[utoipa::path(
    post,
    path = "/api/drivers",
    request_body = CreateDriverRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Driver created", body = Driver),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "drivers"
)]
pub async fn create_driver(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Json(req): Json<CreateDriverRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let driver = services::create_driver(db.pool(), &cache, &req).await?;

    Ok((StatusCode::CREATED, Json(driver)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/drivers/{id}",
    params(
        ("id" = String, Path, description = "Driver id")
    ),
    request_body = UpdateDriverRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Driver updated", body = Driver),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Driver not found")
    ),
    tag = "drivers"
)]
pub async fn update_driver(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Path(id): Path<String>,
    Json(update_req): Json<UpdateDriverRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_driver(db.pool(), &cache, &id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/drivers/{id}",
    params(
        ("id" = String, Path, description = "Driver id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Driver deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Driver not found")
    ),
    tag = "drivers"
)]
pub async fn delete_driver(
    State(db): State<Database>,
    State(cache): State<Arc<StandingsCache>>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_driver(db.pool(), &cache, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
