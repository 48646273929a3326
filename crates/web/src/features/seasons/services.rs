use sqlx::PgPool;
use storage::{
    dto::season::CreateSeasonRequest, error::Result, models::Season,
    repository::season::SeasonRepository,
};

use crate::cache::StandingsCache;

pub async fn list_seasons(pool: &PgPool) -> Result<Vec<Season>> {
    let repo = SeasonRepository::new(pool);
    repo.list().await
}

pub async fn get_season(pool: &PgPool, id: &str) -> Result<Season> {
    let repo = SeasonRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_season(pool: &PgPool, request: &CreateSeasonRequest) -> Result<Season> {
    let repo = SeasonRepository::new(pool);
    repo.create(request).await
}

/// Delete a season and drop its cached standings
pub async fn delete_season(pool: &PgPool, cache: &StandingsCache, id: &str) -> Result<()> {
    let repo = SeasonRepository::new(pool);
    repo.delete(id).await?;
    cache.invalidate_season(id).await;
    Ok(())
}
