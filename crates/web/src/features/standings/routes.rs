use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{get_round_points, get_standings, preview_standings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/seasons/:id/standings", get(get_standings))
        .route("/seasons/:id/standings/preview", post(preview_standings))
        .route("/rounds/:id/points", get(get_round_points))
}
