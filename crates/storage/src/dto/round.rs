use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Round, RoundStatus};

/// Request payload for creating a new round
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoundRequest {
    #[validate(length(min = 1, message = "Season is required"))]
    pub season_id: String,

    #[validate(range(min = 1, message = "Round number must be positive"))]
    pub round_number: i32,

    pub date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[serde(default)]
    pub status: RoundStatus,
}

/// Request payload for updating an existing round
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRoundRequest {
    #[validate(range(min = 1, message = "Round number must be positive"))]
    pub round_number: Option<i32>,

    pub date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    pub status: Option<RoundStatus>,
}

/// Round as shown to clients; a missing location reads "TBD"
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoundResponse {
    pub round_id: String,
    pub season_id: String,
    pub round_number: i32,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub status: RoundStatus,
}

impl From<Round> for RoundResponse {
    fn from(round: Round) -> Self {
        Self {
            location: round.location_label().to_string(),
            round_id: round.round_id,
            season_id: round.season_id,
            round_number: round.round_number,
            date: round.date,
            status: round.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_number_must_be_positive() {
        let req: CreateRoundRequest =
            serde_json::from_str(r#"{"season_id":"s1","round_number":0}"#).unwrap();
        assert!(req.validate().is_err());
        assert_eq!(req.status, RoundStatus::Upcoming);

        let req: CreateRoundRequest =
            serde_json::from_str(r#"{"season_id":"s1","round_number":3,"status":"completed"}"#)
                .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_response_labels_missing_location() {
        let round = Round {
            round_id: "r1".to_string(),
            season_id: "s1".to_string(),
            round_number: 1,
            date: None,
            location: Some("  ".to_string()),
            status: RoundStatus::Upcoming,
        };
        assert_eq!(RoundResponse::from(round).location, "TBD");
    }
}
