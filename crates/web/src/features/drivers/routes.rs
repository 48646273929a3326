use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{create_driver, delete_driver, get_driver, list_drivers, update_driver};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/drivers", post(create_driver))
        .route("/drivers/:id", put(update_driver).delete(delete_driver))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/drivers", get(list_drivers))
        .route("/drivers/:id", get(get_driver))
        .merge(protected)
}
