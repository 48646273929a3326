use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{create_round, delete_round, get_round, list_rounds, update_round};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/rounds", post(create_round))
        .route("/rounds/:id", put(update_round).delete(delete_round))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/seasons/:id/rounds", get(list_rounds))
        .route("/rounds/:id", get(get_round))
        .merge(protected)
}
