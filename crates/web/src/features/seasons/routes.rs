use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{create_season, delete_season, get_season, list_seasons};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/seasons", post(create_season))
        .route("/seasons/:id", delete(delete_season))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/seasons", get(list_seasons))
        .route("/seasons/:id", get(get_season))
        .merge(protected)
}
