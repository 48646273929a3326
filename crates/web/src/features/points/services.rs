use sqlx::PgPool;
use storage::{
    dto::saved_point::UpsertSavedPointRequest,
    error::Result,
    models::{PointKey, SavedPoint},
    repository::{round::RoundRepository, saved_point::SavedPointRepository, season::SeasonRepository},
};

use crate::cache::StandingsCache;

pub async fn list_saved_points(pool: &PgPool, season_id: &str) -> Result<Vec<SavedPoint>> {
    SeasonRepository::new(pool).find_by_id(season_id).await?;

    let repo = SavedPointRepository::new(pool);
    repo.list_by_season(season_id).await
}

/// Confirm points for one race entry
pub async fn save_points(
    pool: &PgPool,
    cache: &StandingsCache,
    request: &UpsertSavedPointRequest,
) -> Result<SavedPoint> {
    let round = RoundRepository::new(pool).find_by_id(&request.round_id).await?;

    let repo = SavedPointRepository::new(pool);
    let saved = repo.upsert(request).await?;
    cache.invalidate_season(&round.season_id).await;
    Ok(saved)
}

/// Drop saved points so the entry is calculated again
pub async fn delete_saved_points(pool: &PgPool, cache: &StandingsCache, key: &PointKey) -> Result<()> {
    let round = RoundRepository::new(pool).find_by_id(&key.round_id).await?;

    let repo = SavedPointRepository::new(pool);
    repo.delete(key).await?;
    cache.invalidate_season(&round.season_id).await;
    Ok(())
}
