use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{ChangeType, Division};

/// Request payload for recording a division change
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDivisionChangeRequest {
    #[validate(length(min = 1, message = "Season is required"))]
    pub season_id: String,

    #[validate(length(min = 1, message = "Driver is required"))]
    pub driver_id: String,

    /// Round the change applies from, or the season's `pre-season-` round
    #[validate(length(min = 1, message = "Round is required"))]
    pub round_id: String,

    pub change_type: ChangeType,

    pub from_division: Option<Division>,

    pub to_division: Option<Division>,

    pub division_start: Option<Division>,
}

impl CreateDivisionChangeRequest {
    /// Each change type needs the field it resolves to
    pub fn validate_divisions(&self) -> Result<(), &'static str> {
        let target = match self.change_type {
            ChangeType::Promotion | ChangeType::Demotion => self
                .to_division
                .ok_or("Promotions and demotions need a target division")?,
            ChangeType::DivisionStart | ChangeType::MidSeasonJoin => self
                .division_start
                .ok_or("Division starts and mid-season joins need a starting division")?,
        };

        if target == Division::Open {
            return Err("Open is not a driver division");
        }

        if let Some(from) = self.from_division
            && matches!(self.change_type, ChangeType::Promotion | ChangeType::Demotion)
            && from == target
        {
            return Err("A promotion or demotion must change the division");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(change_type: ChangeType) -> CreateDivisionChangeRequest {
        CreateDivisionChangeRequest {
            season_id: "s1".to_string(),
            driver_id: "d1".to_string(),
            round_id: "r3".to_string(),
            change_type,
            from_division: None,
            to_division: None,
            division_start: None,
        }
    }

    #[test]
    fn test_promotion_needs_target_division() {
        let mut req = request(ChangeType::Promotion);
        assert!(req.validate_divisions().is_err());

        req.from_division = Some(Division::Division2);
        req.to_division = Some(Division::Division1);
        assert!(req.validate_divisions().is_ok());

        req.to_division = Some(Division::Division2);
        assert!(req.validate_divisions().is_err());
    }

    #[test]
    fn test_division_start_needs_starting_division() {
        let mut req = request(ChangeType::DivisionStart);
        req.to_division = Some(Division::Division3);
        assert!(req.validate_divisions().is_err());

        req.division_start = Some(Division::Division3);
        assert!(req.validate_divisions().is_ok());

        req.division_start = Some(Division::Open);
        assert!(req.validate_divisions().is_err());
    }
}
