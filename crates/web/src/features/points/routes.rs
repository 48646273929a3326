use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{delete_saved_points, list_saved_points, save_points};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/saved-points", put(save_points).delete(delete_saved_points))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/seasons/:id/saved-points", get(list_saved_points))
        .merge(protected)
}
