use sqlx::PgPool;
use storage::{
    dto::driver::{CreateDriverRequest, UpdateDriverRequest},
    error::Result,
    models::Driver,
    repository::driver::DriverRepository,
};

use crate::cache::StandingsCache;

pub async fn list_drivers(pool: &PgPool) -> Result<Vec<Driver>> {
    let repo = DriverRepository::new(pool);
    repo.list().await
}

pub async fn get_driver(pool: &PgPool, id: &str) -> Result<Driver> {
    let repo = DriverRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_driver(
    pool: &PgPool,
    cache: &StandingsCache,
    request: &CreateDriverRequest,
) -> Result<Driver> {
    let repo = DriverRepository::new(pool);
    let driver = repo.create(request).await?;
    // Drivers are shared by every season
    cache.invalidate_all().await;
    Ok(driver)
}

pub async fn update_driver(
    pool: &PgPool,
    cache: &StandingsCache,
    id: &str,
    request: &UpdateDriverRequest,
) -> Result<Driver> {
    let repo = DriverRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    let driver = repo.update(&existing, request).await?;
    cache.invalidate_all().await;
    Ok(driver)
}

pub async fn delete_driver(pool: &PgPool, cache: &StandingsCache, id: &str) -> Result<()> {
    let repo = DriverRepository::new(pool);
    repo.delete(id).await?;
    cache.invalidate_all().await;
    Ok(())
}
