use sqlx::PgPool;
use storage::{
    dto::round::{CreateRoundRequest, UpdateRoundRequest},
    error::Result,
    models::Round,
    repository::{round::RoundRepository, season::SeasonRepository},
};

use crate::cache::StandingsCache;

/// List the rounds of an existing season
pub async fn list_rounds(pool: &PgPool, season_id: &str) -> Result<Vec<Round>> {
    SeasonRepository::new(pool).find_by_id(season_id).await?;

    let repo = RoundRepository::new(pool);
    repo.list_by_season(season_id).await
}

pub async fn get_round(pool: &PgPool, id: &str) -> Result<Round> {
    let repo = RoundRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_round(
    pool: &PgPool,
    cache: &StandingsCache,
    request: &CreateRoundRequest,
) -> Result<Round> {
    let repo = RoundRepository::new(pool);
    let round = repo.create(request).await?;
    cache.invalidate_season(&round.season_id).await;
    Ok(round)
}

pub async fn update_round(
    pool: &PgPool,
    cache: &StandingsCache,
    id: &str,
    request: &UpdateRoundRequest,
) -> Result<Round> {
    let repo = RoundRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    let round = repo.update(&existing, request).await?;
    cache.invalidate_season(&round.season_id).await;
    Ok(round)
}

pub async fn delete_round(pool: &PgPool, cache: &StandingsCache, id: &str) -> Result<()> {
    let repo = RoundRepository::new(pool);
    let season_id = repo.delete(id).await?;
    cache.invalidate_season(&season_id).await;
    Ok(())
}
