use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use storage::Database;

use crate::cache::StandingsCache;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub cache: Arc<StandingsCache>,
}

impl AppState {
    pub fn new(db: Database, standings_cache_ttl: Duration) -> Self {
        Self {
            db,
            cache: Arc::new(StandingsCache::new(standings_cache_ttl)),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<StandingsCache> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.cache)
    }
}
