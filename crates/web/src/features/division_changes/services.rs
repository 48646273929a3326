use sqlx::PgPool;
use storage::{
    dto::{division_change::CreateDivisionChangeRequest, standings::DivisionTimelineEntry},
    error::Result,
    models::DivisionChange,
    repository::{
        division_change::DivisionChangeRepository, season::SeasonRepository,
        standings::StandingsRepository,
    },
};

use crate::cache::StandingsCache;

pub async fn list_division_changes(pool: &PgPool, season_id: &str) -> Result<Vec<DivisionChange>> {
    SeasonRepository::new(pool).find_by_id(season_id).await?;

    let repo = DivisionChangeRepository::new(pool);
    repo.list_by_season(season_id).await
}

pub async fn create_division_change(
    pool: &PgPool,
    cache: &StandingsCache,
    request: &CreateDivisionChangeRequest,
) -> Result<DivisionChange> {
    let repo = DivisionChangeRepository::new(pool);
    let change = repo.create(request).await?;
    cache.invalidate_season(&change.season_id).await;
    Ok(change)
}

pub async fn delete_division_change(pool: &PgPool, cache: &StandingsCache, id: &str) -> Result<()> {
    let repo = DivisionChangeRepository::new(pool);
    let season_id = repo.delete(id).await?;
    cache.invalidate_season(&season_id).await;
    Ok(())
}

/// Division of one driver at every round of a season
pub async fn driver_divisions(
    pool: &PgPool,
    season_id: &str,
    driver_id: &str,
) -> Result<Vec<DivisionTimelineEntry>> {
    let snapshot = StandingsRepository::new(pool).load(season_id).await?;
    snapshot.division_timeline(driver_id)
}
