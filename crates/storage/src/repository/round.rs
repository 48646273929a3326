use sqlx::PgPool;

use crate::dto::round::{CreateRoundRequest, UpdateRoundRequest};
use crate::error::{Result, StorageError};
use crate::models::Round;

const ROUND_COLUMNS: &str = "round_id, season_id, round_number, date, location, status";
const DUPLICATE_ROUND: &str = "Round number already exists in this season";

/// Repository for Round database operations
pub struct RoundRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoundRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the rounds of a season in round order
    pub async fn list_by_season(&self, season_id: &str) -> Result<Vec<Round>> {
        let rounds = sqlx::query_as::<_, Round>(&format!(
            "SELECT {ROUND_COLUMNS} FROM rounds WHERE season_id = $1 ORDER BY round_number"
        ))
        .bind(season_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rounds)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(&format!(
            "SELECT {ROUND_COLUMNS} FROM rounds WHERE round_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(round)
    }

    pub async fn create(&self, req: &CreateRoundRequest) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(&format!(
            r#"
            INSERT INTO rounds (round_id, season_id, round_number, date, location, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ROUND_COLUMNS}
            "#
        ))
        .bind(super::new_id())
        .bind(&req.season_id)
        .bind(req.round_number)
        .bind(req.date)
        .bind(&req.location)
        .bind(req.status)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages(DUPLICATE_ROUND, "Season does not exist")
        })?;

        Ok(round)
    }

    /// Update an existing round, keeping fields the request leaves out
    pub async fn update(&self, existing: &Round, req: &UpdateRoundRequest) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(&format!(
            r#"
            UPDATE rounds
            SET round_number = $2,
                date = $3,
                location = $4,
                status = $5
            WHERE round_id = $1
            RETURNING {ROUND_COLUMNS}
            "#
        ))
        .bind(&existing.round_id)
        .bind(req.round_number.unwrap_or(existing.round_number))
        .bind(req.date.or(existing.date))
        .bind(req.location.as_ref().or(existing.location.as_ref()))
        .bind(req.status.unwrap_or(existing.status))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_messages(DUPLICATE_ROUND, DUPLICATE_ROUND))?
        .ok_or(StorageError::NotFound)?;

        Ok(round)
    }

    /// Delete a round, returning the season it belonged to
    pub async fn delete(&self, id: &str) -> Result<String> {
        let season_id =
            sqlx::query_scalar::<_, String>("DELETE FROM rounds WHERE round_id = $1 RETURNING season_id")
                .bind(id)
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::NotFound)?;

        Ok(season_id)
    }
}
