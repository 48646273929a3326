use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::{Division, RaceType};

/// Natural key of a race entry: one driver, one race of one round
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PointKey {
    pub round_id: String,
    pub driver_id: String,
    pub race_type: RaceType,
    pub final_type: Option<String>,
}

impl PointKey {
    pub fn new(round_id: &str, driver_id: &str, race_type: RaceType, final_type: Option<&str>) -> Self {
        Self {
            round_id: round_id.to_string(),
            driver_id: driver_id.to_string(),
            race_type,
            final_type: normalize_group_letter(final_type),
        }
    }

    /// Same key with the group letter normalized, for keys taken from requests
    pub fn normalized(self) -> Self {
        let final_type = normalize_group_letter(self.final_type.as_deref());
        Self { final_type, ..self }
    }
}

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.round_id,
            self.driver_id,
            self.race_type,
            self.final_type.as_deref().unwrap_or("none")
        )
    }
}

/// Uppercases and trims a heat/final group letter; blank means no group
pub fn normalize_group_letter(letter: Option<&str>) -> Option<String> {
    letter
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_uppercase)
}

/// A confirmed points value for one race entry. It replaces the calculated
/// points, division and overall position until it is edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SavedPoint {
    pub round_id: String,
    pub driver_id: String,
    pub race_type: RaceType,
    pub final_type: Option<String>,
    pub points: Decimal,
    pub overall_position: i32,
    /// Division frozen when the points were saved
    pub division: Division,
    pub note: Option<String>,
    pub saved_at: chrono::NaiveDateTime,
}

impl SavedPoint {
    pub fn key(&self) -> PointKey {
        PointKey::new(
            &self.round_id,
            &self.driver_id,
            self.race_type,
            self.final_type.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalizes_group_letter() {
        let key = PointKey::new("r1", "d1", RaceType::Final, Some(" a "));
        assert_eq!(key.final_type.as_deref(), Some("A"));

        let blank = PointKey::new("r1", "d1", RaceType::Heat, Some(""));
        assert_eq!(blank.final_type, None);
    }

    #[test]
    fn test_key_display() {
        let key = PointKey::new("r1", "d1", RaceType::Final, Some("B"));
        assert_eq!(key.to_string(), "r1-d1-final-B");

        let key = PointKey::new("r1", "d1", RaceType::Qualification, None);
        assert_eq!(key.to_string(), "r1-d1-qualification-none");
    }

    #[test]
    fn test_keys_with_different_letters_differ() {
        let a = PointKey::new("r1", "d1", RaceType::Final, Some("A"));
        let b = PointKey::new("r1", "d1", RaceType::Final, Some("b"));
        assert_ne!(a, b);
        assert_eq!(b, PointKey::new("r1", "d1", RaceType::Final, Some("B")));
    }
}
