use sqlx::PgPool;

use crate::dto::saved_point::UpsertSavedPointRequest;
use crate::error::{Result, StorageError};
use crate::models::{PointKey, SavedPoint};

const SAVED_POINT_COLUMNS: &str = "sp.round_id, sp.driver_id, sp.race_type, sp.final_type, sp.points, \
     sp.overall_position, sp.division, sp.note, sp.saved_at";

pub struct SavedPointRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SavedPointRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the saved points of a season
    pub async fn list_by_season(&self, season_id: &str) -> Result<Vec<SavedPoint>> {
        let points = sqlx::query_as::<_, SavedPoint>(&format!(
            r#"
            SELECT {SAVED_POINT_COLUMNS}
            FROM saved_points sp
            INNER JOIN rounds r ON r.round_id = sp.round_id
            WHERE r.season_id = $1
            ORDER BY r.round_number, sp.driver_id, sp.race_type, sp.final_type NULLS LAST
            "#
        ))
        .bind(season_id)
        .fetch_all(self.pool)
        .await?;

        Ok(points)
    }

    /// Save points for a race entry, replacing earlier saved points
    pub async fn upsert(&self, req: &UpsertSavedPointRequest) -> Result<SavedPoint> {
        let key = req.key();

        let saved = sqlx::query_as::<_, SavedPoint>(&format!(
            r#"
            INSERT INTO saved_points AS sp (
                round_id, driver_id, race_type, final_type, points,
                overall_position, division, note
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (round_id, driver_id, race_type, final_type)
            DO UPDATE SET
                points = EXCLUDED.points,
                overall_position = EXCLUDED.overall_position,
                division = EXCLUDED.division,
                note = EXCLUDED.note,
                saved_at = CURRENT_TIMESTAMP
            RETURNING {SAVED_POINT_COLUMNS}
            "#
        ))
        .bind(&key.round_id)
        .bind(&key.driver_id)
        .bind(key.race_type)
        .bind(&key.final_type)
        .bind(req.points)
        .bind(req.overall_position)
        .bind(req.division)
        .bind(&req.note)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages("Points already saved", "Round does not exist")
        })?;

        Ok(saved)
    }

    pub async fn delete(&self, key: &PointKey) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM saved_points
            WHERE round_id = $1
              AND driver_id = $2
              AND race_type = $3
              AND final_type IS NOT DISTINCT FROM $4
            "#,
        )
        .bind(&key.round_id)
        .bind(&key.driver_id)
        .bind(key.race_type)
        .bind(&key.final_type)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
