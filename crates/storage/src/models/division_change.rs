use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{ChangeType, Division, is_pre_season_round};

/// A point-in-time move of a driver between divisions, effective from `round_id` on
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DivisionChange {
    pub change_id: String,
    pub season_id: String,
    pub driver_id: String,
    pub round_id: String,
    pub change_type: ChangeType,
    pub from_division: Option<Division>,
    pub to_division: Option<Division>,
    pub division_start: Option<Division>,
}

impl DivisionChange {
    pub fn is_pre_season(&self) -> bool {
        is_pre_season_round(&self.round_id)
    }

    /// Division the driver is in once this change applies
    pub fn resulting_division(&self) -> Option<Division> {
        match self.change_type {
            ChangeType::Promotion | ChangeType::Demotion => self.to_division,
            ChangeType::DivisionStart | ChangeType::MidSeasonJoin => self.division_start,
        }
    }
}
