use sqlx::PgPool;

use crate::dto::race_result::UpsertRaceResultRequest;
use crate::error::{Result, StorageError};
use crate::models::RaceResult;

const RESULT_COLUMNS: &str = "rr.result_id, rr.round_id, rr.driver_id, rr.driver_name, rr.race_division, \
     rr.race_type, rr.final_type, rr.position, rr.overall_position, rr.fastest_lap";

pub struct RaceResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the results of one round, race by race
    pub async fn list_by_round(&self, round_id: &str) -> Result<Vec<RaceResult>> {
        let results = sqlx::query_as::<_, RaceResult>(&format!(
            r#"
            SELECT {RESULT_COLUMNS}
            FROM race_results rr
            WHERE rr.round_id = $1
            ORDER BY rr.race_division, rr.race_type, rr.final_type NULLS LAST,
                     COALESCE(rr.overall_position, rr.position) NULLS LAST, rr.result_id
            "#
        ))
        .bind(round_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// List every result of a season
    pub async fn list_by_season(&self, season_id: &str) -> Result<Vec<RaceResult>> {
        let results = sqlx::query_as::<_, RaceResult>(&format!(
            r#"
            SELECT {RESULT_COLUMNS}
            FROM race_results rr
            INNER JOIN rounds r ON r.round_id = rr.round_id
            WHERE r.season_id = $1
            ORDER BY r.round_number, rr.result_id
            "#
        ))
        .bind(season_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// Insert a result, replacing any result with the same natural key
    pub async fn upsert(&self, req: &UpsertRaceResultRequest) -> Result<RaceResult> {
        let result = sqlx::query_as::<_, RaceResult>(&format!(
            r#"
            INSERT INTO race_results AS rr (
                result_id, round_id, driver_id, driver_name, race_division,
                race_type, final_type, position, overall_position, fastest_lap
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (round_id, driver_id, race_type, final_type)
            DO UPDATE SET
                driver_name = EXCLUDED.driver_name,
                race_division = EXCLUDED.race_division,
                position = EXCLUDED.position,
                overall_position = EXCLUDED.overall_position,
                fastest_lap = EXCLUDED.fastest_lap
            RETURNING {RESULT_COLUMNS}
            "#
        ))
        .bind(super::new_id())
        .bind(&req.round_id)
        .bind(&req.driver_id)
        .bind(&req.driver_name)
        .bind(req.race_division)
        .bind(req.race_type)
        .bind(req.normalized_final_type())
        .bind(req.position)
        .bind(req.overall_position)
        .bind(&req.fastest_lap)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages("Result already exists", "Round does not exist")
        })?;

        Ok(result)
    }

    /// Delete a result, returning the round it belonged to
    pub async fn delete(&self, id: &str) -> Result<String> {
        let round_id = sqlx::query_scalar::<_, String>(
            "DELETE FROM race_results WHERE result_id = $1 RETURNING round_id",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(round_id)
    }
}
