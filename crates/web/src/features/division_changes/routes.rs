use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{
    create_division_change, delete_division_change, get_driver_divisions, list_division_changes,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/division-changes", post(create_division_change))
        .route("/division-changes/:id", delete(delete_division_change))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/seasons/:id/division-changes", get(list_division_changes))
        .route(
            "/seasons/:id/drivers/:driver_id/divisions",
            get(get_driver_divisions),
        )
        .merge(protected)
}
