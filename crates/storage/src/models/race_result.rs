use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Division, PointKey, RaceType};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResult {
    pub result_id: String,
    pub round_id: String,
    pub driver_id: String,
    /// Name as entered with the result, used when the driver record is gone
    pub driver_name: Option<String>,
    pub race_division: Division,
    pub race_type: RaceType,
    pub final_type: Option<String>,
    pub position: Option<i32>,
    pub overall_position: Option<i32>,
    pub fastest_lap: Option<String>,
}

impl RaceResult {
    pub fn key(&self) -> PointKey {
        PointKey::new(
            &self.round_id,
            &self.driver_id,
            self.race_type,
            self.final_type.as_deref(),
        )
    }

    /// Finish rank within its race; overall position wins over grid position
    pub fn finish_rank(&self) -> Option<u32> {
        self.overall_position
            .or(self.position)
            .filter(|p| *p > 0)
            .map(|p| p as u32)
    }
}
