use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Division, PointKey, RaceType, normalize_group_letter};

/// Narrows the points view before ranking
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct StandingsFilter {
    pub round_id: Option<String>,
    /// `Open` also matches Division 3, Division 4 and New
    pub division: Option<Division>,
    pub race_type: Option<RaceType>,
    /// Heat group letter, applied to heat rows only
    #[serde(rename = "heat")]
    pub heat_group: Option<String>,
    /// Final group letter, applied to final rows only
    #[serde(rename = "final")]
    pub final_group: Option<String>,
}

/// How the rows of one stage are ordered into points positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMode {
    /// Final group letter first, then finishing position
    FinalGroups,
    /// Current points, highest first
    Points,
}

impl RankingMode {
    pub fn for_race_type(race_type: RaceType) -> Self {
        match race_type {
            RaceType::Final => RankingMode::FinalGroups,
            RaceType::Heat | RaceType::Qualification => RankingMode::Points,
        }
    }
}

impl StandingsFilter {
    pub fn normalized(self) -> Self {
        Self {
            round_id: self.round_id.filter(|r| !r.trim().is_empty()),
            division: self.division,
            race_type: self.race_type,
            heat_group: normalize_group_letter(self.heat_group.as_deref()),
            final_group: normalize_group_letter(self.final_group.as_deref()),
        }
    }

    pub fn matches(&self, entry: &DriverPoints) -> bool {
        if let Some(round_id) = &self.round_id
            && *round_id != entry.round_id
        {
            return false;
        }

        if let Some(division) = self.division
            && !entry.race_division.matches_race_filter(division)
        {
            return false;
        }

        if let Some(race_type) = self.race_type
            && race_type != entry.race_type
        {
            return false;
        }

        let group_filter = match entry.race_type {
            RaceType::Heat => self.heat_group.as_deref(),
            RaceType::Final => self.final_group.as_deref(),
            RaceType::Qualification => None,
        };
        match group_filter {
            Some(letter) => entry.final_type.as_deref() == Some(letter),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PointsSource {
    Saved,
    Edited,
    Calculated,
}

/// Points of one driver in one race of one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverPoints {
    pub round_id: String,
    pub round_number: i32,
    pub driver_id: String,
    pub driver_name: String,
    pub race_division: Division,
    /// Division the driver belonged to at this round
    pub division: Division,
    pub race_type: RaceType,
    pub final_type: Option<String>,
    pub overall_position: u32,
    /// Rank used to look up the points table
    pub points_position: u32,
    pub points: Decimal,
    pub source: PointsSource,
    pub note: Option<String>,
}

impl DriverPoints {
    pub fn key(&self) -> PointKey {
        PointKey::new(
            &self.round_id,
            &self.driver_id,
            self.race_type,
            self.final_type.as_deref(),
        )
    }

    /// Calculated rows follow the ranking; saved and edited rows hold their value
    pub fn is_live(&self) -> bool {
        self.source == PointsSource::Calculated
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoundPoints {
    pub round_id: String,
    pub round_number: i32,
    pub points: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandingEntry {
    /// Shared by drivers on equal points
    pub position: u32,
    pub driver_id: String,
    pub driver_name: String,
    /// Division at the driver's latest round with results
    pub division: Division,
    pub total_points: Decimal,
    pub race_count: u32,
    pub rounds: Vec<RoundPoints>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandingsReport {
    pub points: Vec<DriverPoints>,
    pub driver_totals: BTreeMap<String, Decimal>,
    pub standings: Vec<StandingEntry>,
}

/// Unsaved points value for one race entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointEdit {
    pub key: PointKey,
    pub points: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PreviewStandingsRequest {
    #[serde(default)]
    pub filter: StandingsFilter,

    #[serde(default)]
    #[validate(length(max = 2000, message = "At most 2000 edits per preview"))]
    pub edits: Vec<PointEdit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DivisionTimelineEntry {
    pub round_id: String,
    pub round_number: i32,
    pub division: Division,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(race_division: Division, race_type: RaceType, final_type: Option<&str>) -> DriverPoints {
        DriverPoints {
            round_id: "r1".to_string(),
            round_number: 1,
            driver_id: "d1".to_string(),
            driver_name: "D1".to_string(),
            race_division,
            division: race_division,
            race_type,
            final_type: final_type.map(str::to_string),
            overall_position: 1,
            points_position: 1,
            points: Decimal::ZERO,
            source: PointsSource::Calculated,
            note: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = StandingsFilter::default();
        assert!(filter.matches(&entry(Division::Division1, RaceType::Heat, Some("A"))));
        assert!(filter.matches(&entry(Division::Open, RaceType::Qualification, None)));
    }

    #[test]
    fn test_open_filter_matches_open_and_lower_races() {
        let filter = StandingsFilter {
            division: Some(Division::Open),
            ..Default::default()
        };
        assert!(filter.matches(&entry(Division::Open, RaceType::Final, Some("A"))));
        assert!(filter.matches(&entry(Division::New, RaceType::Final, Some("A"))));
        assert!(!filter.matches(&entry(Division::Division2, RaceType::Final, Some("A"))));
    }

    #[test]
    fn test_group_letters_apply_to_their_own_stage() {
        let filter = StandingsFilter {
            heat_group: Some("b".to_string()),
            ..Default::default()
        }
        .normalized();

        assert!(filter.matches(&entry(Division::Division1, RaceType::Heat, Some("B"))));
        assert!(!filter.matches(&entry(Division::Division1, RaceType::Heat, Some("A"))));
        assert!(filter.matches(&entry(Division::Division1, RaceType::Final, Some("A"))));
    }

    #[test]
    fn test_ranking_mode_follows_race_type() {
        assert_eq!(RankingMode::for_race_type(RaceType::Final), RankingMode::FinalGroups);
        assert_eq!(RankingMode::for_race_type(RaceType::Heat), RankingMode::Points);
        assert_eq!(RankingMode::for_race_type(RaceType::Qualification), RankingMode::Points);
    }

    #[test]
    fn test_filter_query_names() {
        let filter: StandingsFilter =
            serde_json::from_str(r#"{"race_type":"heat","heat":"a","final":null}"#).unwrap();
        assert_eq!(filter.race_type, Some(RaceType::Heat));
        assert_eq!(filter.normalized().heat_group.as_deref(), Some("A"));
    }
}
