use sqlx::PgPool;

use crate::dto::season::CreateSeasonRequest;
use crate::error::{Result, StorageError};
use crate::models::Season;

const SEASON_COLUMNS: &str = "season_id, name, start_date, end_date, created_at";

/// Repository for Season database operations
pub struct SeasonRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all seasons, newest first
    pub async fn list(&self) -> Result<Vec<Season>> {
        let seasons = sqlx::query_as::<_, Season>(&format!(
            "SELECT {SEASON_COLUMNS} FROM seasons ORDER BY start_date DESC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(seasons)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(&format!(
            "SELECT {SEASON_COLUMNS} FROM seasons WHERE season_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(season)
    }

    pub async fn create(&self, req: &CreateSeasonRequest) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(&format!(
            r#"
            INSERT INTO seasons (season_id, name, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING {SEASON_COLUMNS}
            "#
        ))
        .bind(super::new_id())
        .bind(&req.name)
        .bind(req.start_date)
        .bind(req.end_date)
        .fetch_one(self.pool)
        .await?;

        Ok(season)
    }

    /// Delete a season with its rounds, results and division changes
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM seasons WHERE season_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
