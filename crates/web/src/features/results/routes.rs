use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{delete_result, list_results, upsert_result};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/results", post(upsert_result))
        .route("/results/:id", delete(delete_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/rounds/:id/results", get(list_results))
        .merge(protected)
}
