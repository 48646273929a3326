use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::RoundStatus;

/// Id prefix of the synthetic round that precedes every real round of a season
pub const PRE_SEASON_PREFIX: &str = "pre-season-";

pub fn is_pre_season_round(round_id: &str) -> bool {
    round_id.starts_with(PRE_SEASON_PREFIX)
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Round {
    pub round_id: String,
    pub season_id: String,
    pub round_number: i32,
    pub date: Option<chrono::NaiveDate>,
    pub location: Option<String>,
    pub status: RoundStatus,
}

impl Round {
    /// The pre-season pseudo-round of a season. It is never stored.
    pub fn pre_season(season_id: &str) -> Self {
        Self {
            round_id: format!("{PRE_SEASON_PREFIX}{season_id}"),
            season_id: season_id.to_string(),
            round_number: 0,
            date: None,
            location: None,
            status: RoundStatus::Completed,
        }
    }

    pub fn is_pre_season(&self) -> bool {
        is_pre_season_round(&self.round_id)
    }

    pub fn location_label(&self) -> &str {
        self.location
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or("TBD")
    }
}
