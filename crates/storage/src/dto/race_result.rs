use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Division, RaceType, normalize_group_letter};

/// Request payload for entering a race result. Re-entering the same
/// round, driver, race type and group replaces the earlier result.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertRaceResultRequest {
    #[validate(length(min = 1, message = "Round is required"))]
    pub round_id: String,

    #[validate(length(min = 1, message = "Driver is required"))]
    pub driver_id: String,

    #[validate(length(max = 255))]
    pub driver_name: Option<String>,

    pub race_division: Division,

    pub race_type: RaceType,

    #[validate(length(min = 1, max = 3, message = "Group must be 1 to 3 letters"))]
    pub final_type: Option<String>,

    #[validate(range(min = 1, message = "Position must be positive"))]
    pub position: Option<i32>,

    #[validate(range(min = 1, message = "Overall position must be positive"))]
    pub overall_position: Option<i32>,

    #[validate(length(max = 32))]
    pub fastest_lap: Option<String>,
}

impl UpsertRaceResultRequest {
    pub fn normalized_final_type(&self) -> Option<String> {
        normalize_group_letter(self.final_type.as_deref())
    }

    pub fn validate_group(&self) -> Result<(), &'static str> {
        if self.race_type == RaceType::Qualification && self.normalized_final_type().is_some() {
            return Err("Qualification results have no group letter");
        }
        if let Some(group) = self.normalized_final_type()
            && !group.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err("Group must be letters only");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(race_type: RaceType, final_type: Option<&str>) -> UpsertRaceResultRequest {
        UpsertRaceResultRequest {
            round_id: "r1".to_string(),
            driver_id: "d1".to_string(),
            driver_name: None,
            race_division: Division::Division1,
            race_type,
            final_type: final_type.map(str::to_string),
            position: Some(1),
            overall_position: None,
            fastest_lap: Some("42.318".to_string()),
        }
    }

    #[test]
    fn test_group_letters() {
        assert!(request(RaceType::Final, Some("b")).validate_group().is_ok());
        assert_eq!(
            request(RaceType::Final, Some(" b ")).normalized_final_type().as_deref(),
            Some("B")
        );
        assert!(request(RaceType::Heat, Some("1")).validate_group().is_err());
        assert!(request(RaceType::Qualification, Some("A")).validate_group().is_err());
        assert!(request(RaceType::Qualification, None).validate_group().is_ok());
    }

    #[test]
    fn test_position_must_be_positive() {
        let mut req = request(RaceType::Heat, Some("A"));
        req.position = Some(0);
        assert!(req.validate().is_err());
    }
}
