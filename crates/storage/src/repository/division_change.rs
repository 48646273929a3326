use sqlx::PgPool;

use crate::dto::division_change::CreateDivisionChangeRequest;
use crate::error::{Result, StorageError};
use crate::models::DivisionChange;

const CHANGE_COLUMNS: &str =
    "change_id, season_id, driver_id, round_id, change_type, from_division, to_division, division_start";

pub struct DivisionChangeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DivisionChangeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the division changes recorded in a season
    pub async fn list_by_season(&self, season_id: &str) -> Result<Vec<DivisionChange>> {
        let changes = sqlx::query_as::<_, DivisionChange>(&format!(
            "SELECT {CHANGE_COLUMNS} FROM division_changes WHERE season_id = $1 ORDER BY created_at, change_id"
        ))
        .bind(season_id)
        .fetch_all(self.pool)
        .await?;

        Ok(changes)
    }

    pub async fn create(&self, req: &CreateDivisionChangeRequest) -> Result<DivisionChange> {
        let change = sqlx::query_as::<_, DivisionChange>(&format!(
            r#"
            INSERT INTO division_changes (
                change_id, season_id, driver_id, round_id, change_type,
                from_division, to_division, division_start
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {CHANGE_COLUMNS}
            "#
        ))
        .bind(super::new_id())
        .bind(&req.season_id)
        .bind(&req.driver_id)
        .bind(req.round_id.trim())
        .bind(req.change_type)
        .bind(req.from_division)
        .bind(req.to_division)
        .bind(req.division_start)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages(
                "Division change already exists",
                "Season or driver does not exist",
            )
        })?;

        Ok(change)
    }

    /// Delete a division change, returning the season it belonged to
    pub async fn delete(&self, id: &str) -> Result<String> {
        let season_id = sqlx::query_scalar::<_, String>(
            "DELETE FROM division_changes WHERE change_id = $1 RETURNING season_id",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(season_id)
    }
}
