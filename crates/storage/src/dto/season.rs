use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new season
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSeasonRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,
}

impl CreateSeasonRequest {
    pub fn validate_dates(&self) -> Result<(), &'static str> {
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err("End date must be on or after start date");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(end_date: Option<NaiveDate>) -> CreateSeasonRequest {
        CreateSeasonRequest {
            name: "2025".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date,
        }
    }

    #[test]
    fn test_end_date_before_start_is_rejected() {
        assert!(request(NaiveDate::from_ymd_opt(2025, 2, 1)).validate_dates().is_err());
        assert!(request(NaiveDate::from_ymd_opt(2025, 10, 1)).validate_dates().is_ok());
        assert!(request(None).validate_dates().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let mut req = request(None);
        req.name.clear();
        assert!(req.validate().is_err());
    }
}
