use sqlx::PgPool;

use crate::dto::driver::{CreateDriverRequest, UpdateDriverRequest};
use crate::error::{Result, StorageError};
use crate::models::Driver;

const DRIVER_COLUMNS: &str = "driver_id, name, aliases, division, status, created_at";

pub struct DriverRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DriverRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all drivers by name
    pub async fn list(&self) -> Result<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers ORDER BY name, driver_id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Driver> {
        let driver = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers WHERE driver_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(driver)
    }

    pub async fn create(&self, req: &CreateDriverRequest) -> Result<Driver> {
        let aliases: Vec<String> = req.aliases.iter().map(|a| a.trim().to_string()).collect();

        let driver = sqlx::query_as::<_, Driver>(&format!(
            r#"
            INSERT INTO drivers (driver_id, name, aliases, division, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(super::new_id())
        .bind(req.name.trim())
        .bind(aliases)
        .bind(req.division)
        .bind(req.status)
        .fetch_one(self.pool)
        .await?;

        Ok(driver)
    }

    /// Update an existing driver, keeping fields the request leaves out
    pub async fn update(&self, existing: &Driver, req: &UpdateDriverRequest) -> Result<Driver> {
        let name = req.name.as_deref().map(str::trim).unwrap_or(&existing.name);
        let aliases: Vec<String> = req
            .aliases
            .as_ref()
            .unwrap_or(&existing.aliases)
            .iter()
            .map(|a| a.trim().to_string())
            .collect();

        let driver = sqlx::query_as::<_, Driver>(&format!(
            r#"
            UPDATE drivers
            SET name = $2,
                aliases = $3,
                division = $4,
                status = $5
            WHERE driver_id = $1
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(&existing.driver_id)
        .bind(name)
        .bind(aliases)
        .bind(req.division.unwrap_or(existing.division))
        .bind(req.status.unwrap_or(existing.status))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(driver)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM drivers WHERE driver_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
