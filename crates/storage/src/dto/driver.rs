use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Division, DriverStatus};

/// Request payload for creating a new driver
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDriverRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_aliases"))]
    pub aliases: Vec<String>,

    #[validate(custom(function = "validate_home_division"))]
    pub division: Division,

    #[serde(default)]
    pub status: DriverStatus,
}

/// Request payload for updating an existing driver
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_aliases"))]
    pub aliases: Option<Vec<String>>,

    #[validate(custom(function = "validate_home_division"))]
    pub division: Option<Division>,

    pub status: Option<DriverStatus>,
}

// Validation helpers
fn validate_aliases(aliases: &[String]) -> Result<(), validator::ValidationError> {
    if aliases.iter().all(|a| !a.trim().is_empty() && a.len() <= 255) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_alias"))
    }
}

fn validate_home_division(division: &Division) -> Result<(), validator::ValidationError> {
    // Open names races, never a driver's home division
    if *division == Division::Open {
        Err(validator::ValidationError::new("open_is_not_a_home_division"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_is_not_a_driver_division() {
        let req = CreateDriverRequest {
            name: "Max".to_string(),
            aliases: Vec::new(),
            division: Division::Open,
            status: DriverStatus::Active,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_alias_is_rejected() {
        let req = UpdateDriverRequest {
            name: None,
            aliases: Some(vec!["Maxi".to_string(), " ".to_string()]),
            division: Some(Division::Division2),
            status: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_status_defaults_to_active() {
        let req: CreateDriverRequest =
            serde_json::from_str(r#"{"name":"Max","division":"New"}"#).unwrap();
        assert_eq!(req.status, DriverStatus::Active);
        assert!(req.validate().is_ok());
    }
}
