use sqlx::PgPool;
use storage::{
    dto::race_result::UpsertRaceResultRequest,
    error::Result,
    models::RaceResult,
    repository::{race_result::RaceResultRepository, round::RoundRepository},
};

use crate::cache::StandingsCache;

pub async fn list_results(pool: &PgPool, round_id: &str) -> Result<Vec<RaceResult>> {
    RoundRepository::new(pool).find_by_id(round_id).await?;

    let repo = RaceResultRepository::new(pool);
    repo.list_by_round(round_id).await
}

/// Record a result, replacing the driver's earlier result for the same race
pub async fn upsert_result(
    pool: &PgPool,
    cache: &StandingsCache,
    request: &UpsertRaceResultRequest,
) -> Result<RaceResult> {
    let round = RoundRepository::new(pool).find_by_id(&request.round_id).await?;

    let repo = RaceResultRepository::new(pool);
    let result = repo.upsert(request).await?;
    cache.invalidate_season(&round.season_id).await;
    Ok(result)
}

pub async fn delete_result(pool: &PgPool, cache: &StandingsCache, id: &str) -> Result<()> {
    let repo = RaceResultRepository::new(pool);
    let round_id = repo.delete(id).await?;

    let round = RoundRepository::new(pool).find_by_id(&round_id).await?;
    cache.invalidate_season(&round.season_id).await;
    Ok(())
}
