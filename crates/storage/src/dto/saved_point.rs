use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Division, PointKey, RaceType};

/// Request payload for confirming the points of one race entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertSavedPointRequest {
    #[validate(length(min = 1, message = "Round is required"))]
    pub round_id: String,

    #[validate(length(min = 1, message = "Driver is required"))]
    pub driver_id: String,

    pub race_type: RaceType,

    pub final_type: Option<String>,

    pub points: Decimal,

    #[validate(range(min = 1, message = "Overall position must be positive"))]
    pub overall_position: i32,

    pub division: Division,

    /// Why the points differ from the calculated value
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

impl UpsertSavedPointRequest {
    pub fn key(&self) -> PointKey {
        PointKey::new(
            &self.round_id,
            &self.driver_id,
            self.race_type,
            self.final_type.as_deref(),
        )
    }

    pub fn validate_points(&self) -> Result<(), &'static str> {
        if self.points.abs() > Decimal::from(1000) {
            return Err("Points must be between -1000 and 1000");
        }
        if self.points.scale() > 2 {
            return Err("Points allow at most two decimals");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(points: Decimal) -> UpsertSavedPointRequest {
        UpsertSavedPointRequest {
            round_id: "r1".to_string(),
            driver_id: "d1".to_string(),
            race_type: RaceType::Final,
            final_type: Some("a".to_string()),
            points,
            overall_position: 1,
            division: Division::Division1,
            note: Some("Jump start, -5".to_string()),
        }
    }

    #[test]
    fn test_points_bounds() {
        assert!(request(Decimal::from(20)).validate_points().is_ok());
        assert!(request(Decimal::from(-5)).validate_points().is_ok());
        assert!(request(Decimal::from(5000)).validate_points().is_err());
        assert!(request(Decimal::new(12345, 3)).validate_points().is_err());
    }

    #[test]
    fn test_key_is_normalized() {
        assert_eq!(request(Decimal::ONE).key().to_string(), "r1-d1-final-A");
    }
}
