use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::division_change::DivisionChangeRepository;
use super::driver::DriverRepository;
use super::race_result::RaceResultRepository;
use super::round::RoundRepository;
use super::saved_point::SavedPointRepository;
use super::season::SeasonRepository;
use crate::dto::standings::DivisionTimelineEntry;
use crate::error::{Result, StorageError};
use crate::models::{DivisionChange, Driver, PointKey, RaceResult, Round, SavedPoint, Season};
use crate::services::division_history::DivisionHistory;
use crate::services::standings::StandingsInput;

/// Everything the standings calculation reads for one season, loaded up front
#[derive(Debug, Clone)]
pub struct SeasonSnapshot {
    pub season: Season,
    pub rounds: Vec<Round>,
    pub drivers: Vec<Driver>,
    pub division_changes: Vec<DivisionChange>,
    pub results: Vec<RaceResult>,
    pub saved_points: HashMap<PointKey, SavedPoint>,
}

impl SeasonSnapshot {
    pub fn input<'a>(&'a self, edits: &'a HashMap<PointKey, Decimal>) -> StandingsInput<'a> {
        StandingsInput {
            rounds: &self.rounds,
            drivers: &self.drivers,
            division_changes: &self.division_changes,
            results: &self.results,
            saved_points: &self.saved_points,
            edits,
        }
    }

    /// Division of a known driver at every round, with the pre-season first
    /// when the driver has a pre-season change
    pub fn division_timeline(&self, driver_id: &str) -> Result<Vec<DivisionTimelineEntry>> {
        if !self.drivers.iter().any(|d| d.driver_id == driver_id) {
            return Err(StorageError::NotFound);
        }

        let mut rounds = self.rounds.clone();
        if self
            .division_changes
            .iter()
            .any(|c| c.driver_id == driver_id && c.is_pre_season())
        {
            rounds.push(Round::pre_season(&self.season.season_id));
        }

        let history = DivisionHistory::new(&self.drivers, &rounds, &self.division_changes);
        Ok(history.timeline(driver_id))
    }
}

pub struct StandingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StandingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load a season snapshot; fails with `NotFound` for an unknown season
    pub async fn load(&self, season_id: &str) -> Result<SeasonSnapshot> {
        let season = SeasonRepository::new(self.pool).find_by_id(season_id).await?;
        let rounds = RoundRepository::new(self.pool).list_by_season(season_id).await?;
        let drivers = DriverRepository::new(self.pool).list().await?;
        let division_changes = DivisionChangeRepository::new(self.pool)
            .list_by_season(season_id)
            .await?;
        let results = RaceResultRepository::new(self.pool)
            .list_by_season(season_id)
            .await?;
        let saved_points = SavedPointRepository::new(self.pool)
            .list_by_season(season_id)
            .await?
            .into_iter()
            .map(|saved| (saved.key(), saved))
            .collect();

        Ok(SeasonSnapshot {
            season,
            rounds,
            drivers,
            division_changes,
            results,
            saved_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChangeType, Division, DriverStatus, RoundStatus};

    fn snapshot() -> SeasonSnapshot {
        let round = |n: i32| Round {
            round_id: format!("r{n}"),
            season_id: "s1".to_string(),
            round_number: n,
            date: None,
            location: None,
            status: RoundStatus::Completed,
        };

        SeasonSnapshot {
            season: Season {
                season_id: "s1".to_string(),
                name: "2025".to_string(),
                start_date: chrono::NaiveDate::default(),
                end_date: None,
                created_at: chrono::NaiveDateTime::default(),
            },
            rounds: vec![round(1), round(2)],
            drivers: vec![Driver {
                driver_id: "d1".to_string(),
                name: "Max".to_string(),
                aliases: Vec::new(),
                division: Division::Division1,
                status: DriverStatus::Active,
                created_at: chrono::NaiveDateTime::default(),
            }],
            division_changes: vec![
                DivisionChange {
                    change_id: "c1".to_string(),
                    season_id: "s1".to_string(),
                    driver_id: "d1".to_string(),
                    round_id: "pre-season-s1".to_string(),
                    change_type: ChangeType::DivisionStart,
                    from_division: None,
                    to_division: None,
                    division_start: Some(Division::Division3),
                },
                DivisionChange {
                    change_id: "c2".to_string(),
                    season_id: "s1".to_string(),
                    driver_id: "d1".to_string(),
                    round_id: "r2".to_string(),
                    change_type: ChangeType::Promotion,
                    from_division: Some(Division::Division3),
                    to_division: Some(Division::Division2),
                    division_start: None,
                },
            ],
            results: Vec::new(),
            saved_points: HashMap::new(),
        }
    }

    #[test]
    fn test_timeline_starts_with_pre_season() {
        let timeline = snapshot().division_timeline("d1").unwrap();
        let divisions: Vec<(i32, Division)> = timeline
            .iter()
            .map(|entry| (entry.round_number, entry.division))
            .collect();
        assert_eq!(
            divisions,
            vec![
                (0, Division::Division3),
                (1, Division::Division3),
                (2, Division::Division2),
            ]
        );
    }

    #[test]
    fn test_timeline_of_unknown_driver_is_not_found() {
        assert!(matches!(
            snapshot().division_timeline("ghost"),
            Err(StorageError::NotFound)
        ));
    }
}
