pub mod division_changes;
pub mod drivers;
pub mod points;
pub mod results;
pub mod rounds;
pub mod seasons;
pub mod standings;

use axum::Router;

use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

/// Every league route, relative to `/api`
pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .merge(seasons::routes::routes(api_keys.clone()))
        .merge(rounds::routes::routes(api_keys.clone()))
        .merge(drivers::routes::routes(api_keys.clone()))
        .merge(division_changes::routes::routes(api_keys.clone()))
        .merge(results::routes::routes(api_keys.clone()))
        .merge(points::routes::routes(api_keys))
        .merge(standings::routes::routes())
}
