//! Resolves which division a driver raced in at any point of a season.

use std::collections::HashMap;

use crate::dto::standings::DivisionTimelineEntry;
use crate::models::{Division, DivisionChange, Driver, Round, is_pre_season_round};

/// Read-only index over a season's drivers, rounds and division changes.
///
/// Answers depend only on the inputs, never on the order of lookups.
pub struct DivisionHistory<'a> {
    drivers: HashMap<&'a str, &'a Driver>,
    round_numbers: HashMap<&'a str, i32>,
    rounds: Vec<&'a Round>,
    changes: HashMap<&'a str, Vec<&'a DivisionChange>>,
}

impl<'a> DivisionHistory<'a> {
    pub fn new(drivers: &'a [Driver], rounds: &'a [Round], changes: &'a [DivisionChange]) -> Self {
        let round_numbers: HashMap<&str, i32> = rounds
            .iter()
            .map(|r| (r.round_id.as_str(), r.round_number))
            .collect();

        let mut by_driver: HashMap<&str, Vec<&DivisionChange>> = HashMap::new();
        for change in changes {
            by_driver
                .entry(change.driver_id.as_str())
                .or_default()
                .push(change);
        }

        // Pre-season changes first, then by round number; both stable
        for driver_changes in by_driver.values_mut() {
            driver_changes.sort_by_key(|c| {
                if c.is_pre_season() {
                    (0, 0)
                } else {
                    (1, round_numbers.get(c.round_id.as_str()).copied().unwrap_or(0))
                }
            });
        }

        let mut ordered_rounds: Vec<&Round> = rounds.iter().collect();
        ordered_rounds.sort_by_key(|r| (!r.is_pre_season(), r.round_number));

        Self {
            drivers: drivers.iter().map(|d| (d.driver_id.as_str(), d)).collect(),
            round_numbers,
            rounds: ordered_rounds,
            changes: by_driver,
        }
    }

    pub fn current_division(&self, driver_id: &str) -> Option<Division> {
        self.drivers.get(driver_id).map(|d| d.division)
    }

    /// Round number of a known round; unknown rounds count as 0
    pub fn round_number(&self, round_id: &str) -> i32 {
        self.round_numbers.get(round_id).copied().unwrap_or(0)
    }

    /// Division of `driver_id` at the given round.
    ///
    /// Returns `None` only for a driver with neither a record nor any change.
    pub fn division_at(&self, driver_id: &str, round_id: &str, round_number: i32) -> Option<Division> {
        let current = self.current_division(driver_id);

        let Some(changes) = self.changes.get(driver_id) else {
            return current;
        };

        let selected = if is_pre_season_round(round_id) {
            changes.iter().rev().find(|c| c.is_pre_season()).copied()
        } else {
            let mut candidate = None;
            for change in changes {
                if !change.is_pre_season() && self.round_number(&change.round_id) > round_number {
                    break;
                }
                candidate = Some(*change);
            }
            candidate
        };

        selected
            .and_then(DivisionChange::resulting_division)
            .or(current)
    }

    /// Division of a driver at every round of the season, pre-season first
    pub fn timeline(&self, driver_id: &str) -> Vec<DivisionTimelineEntry> {
        self.rounds
            .iter()
            .filter_map(|round| {
                self.division_at(driver_id, &round.round_id, round.round_number)
                    .map(|division| DivisionTimelineEntry {
                        round_id: round.round_id.clone(),
                        round_number: round.round_number,
                        division,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChangeType, DriverStatus, RoundStatus};

    fn driver(id: &str, division: Division) -> Driver {
        Driver {
            driver_id: id.to_string(),
            name: id.to_uppercase(),
            aliases: Vec::new(),
            division,
            status: DriverStatus::Active,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn round(number: i32) -> Round {
        Round {
            round_id: format!("r{number}"),
            season_id: "s1".to_string(),
            round_number: number,
            date: None,
            location: None,
            status: RoundStatus::Completed,
        }
    }

    fn change(driver_id: &str, round_id: &str, change_type: ChangeType, division: Division) -> DivisionChange {
        let (to_division, division_start) = match change_type {
            ChangeType::Promotion | ChangeType::Demotion => (Some(division), None),
            _ => (None, Some(division)),
        };
        DivisionChange {
            change_id: format!("{driver_id}-{round_id}"),
            season_id: "s1".to_string(),
            driver_id: driver_id.to_string(),
            round_id: round_id.to_string(),
            change_type,
            from_division: None,
            to_division,
            division_start,
        }
    }

    fn rounds() -> Vec<Round> {
        (1..=8).map(round).collect()
    }

    #[test]
    fn test_no_changes_uses_current_division() {
        let drivers = vec![driver("d1", Division::Division3)];
        let rounds = rounds();
        let history = DivisionHistory::new(&drivers, &rounds, &[]);

        assert_eq!(history.division_at("d1", "r4", 4), Some(Division::Division3));
        assert_eq!(history.division_at("ghost", "r4", 4), None);
    }

    #[test]
    fn test_changes_apply_from_their_round_on() {
        let drivers = vec![driver("d1", Division::Division1)];
        let rounds = rounds();
        let changes = vec![
            change("d1", "r5", ChangeType::Promotion, Division::Division1),
            change("d1", "r1", ChangeType::DivisionStart, Division::Division2),
        ];
        let history = DivisionHistory::new(&drivers, &rounds, &changes);

        assert_eq!(history.division_at("d1", "r3", 3), Some(Division::Division2));
        assert_eq!(history.division_at("d1", "r5", 5), Some(Division::Division1));
        assert_eq!(history.division_at("d1", "r7", 7), Some(Division::Division1));
    }

    #[test]
    fn test_pre_season_change_applies_to_round_one() {
        let drivers = vec![driver("d1", Division::Division2)];
        let rounds = rounds();
        let changes = vec![change("d1", "pre-season-s1", ChangeType::DivisionStart, Division::Division4)];
        let history = DivisionHistory::new(&drivers, &rounds, &changes);

        assert_eq!(history.division_at("d1", "r1", 1), Some(Division::Division4));
        assert_eq!(history.division_at("d1", "pre-season-s1", 0), Some(Division::Division4));
    }

    #[test]
    fn test_regular_change_at_round_one_beats_pre_season() {
        let drivers = vec![driver("d1", Division::Division2)];
        let rounds = rounds();
        let changes = vec![
            change("d1", "r1", ChangeType::MidSeasonJoin, Division::New),
            change("d1", "pre-season-s1", ChangeType::DivisionStart, Division::Division4),
        ];
        let history = DivisionHistory::new(&drivers, &rounds, &changes);

        assert_eq!(history.division_at("d1", "r1", 1), Some(Division::New));
        // A pre-season target ignores regular changes
        assert_eq!(history.division_at("d1", "pre-season-s1", 0), Some(Division::Division4));
    }

    #[test]
    fn test_change_before_any_applicable_change_falls_back_to_current() {
        let drivers = vec![driver("d1", Division::Division1)];
        let rounds = rounds();
        let changes = vec![change("d1", "r4", ChangeType::Demotion, Division::Division2)];
        let history = DivisionHistory::new(&drivers, &rounds, &changes);

        assert_eq!(history.division_at("d1", "r2", 2), Some(Division::Division1));
        assert_eq!(history.division_at("d1", "r4", 4), Some(Division::Division2));
    }

    #[test]
    fn test_change_with_unknown_round_counts_as_round_zero() {
        let drivers = vec![driver("d1", Division::Division1)];
        let rounds = rounds();
        let changes = vec![
            change("d1", "deleted-round", ChangeType::DivisionStart, Division::Division3),
            change("d1", "r2", ChangeType::Promotion, Division::Division2),
        ];
        let history = DivisionHistory::new(&drivers, &rounds, &changes);

        assert_eq!(history.division_at("d1", "r1", 1), Some(Division::Division3));
        assert_eq!(history.division_at("d1", "r2", 2), Some(Division::Division2));
    }

    #[test]
    fn test_change_missing_target_division_falls_back() {
        let drivers = vec![driver("d1", Division::Division3)];
        let rounds = rounds();
        let mut broken = change("d1", "r1", ChangeType::Promotion, Division::Division2);
        broken.to_division = None;
        let changes = vec![broken];
        let history = DivisionHistory::new(&drivers, &rounds, &changes);

        assert_eq!(history.division_at("d1", "r3", 3), Some(Division::Division3));
    }

    #[test]
    fn test_lookups_do_not_depend_on_call_order() {
        let drivers = vec![driver("d1", Division::Division1)];
        let rounds = rounds();
        let changes = vec![
            change("d1", "r1", ChangeType::DivisionStart, Division::Division2),
            change("d1", "r5", ChangeType::Promotion, Division::Division1),
        ];
        let history = DivisionHistory::new(&drivers, &rounds, &changes);

        let late = history.division_at("d1", "r7", 7);
        let early = history.division_at("d1", "r3", 3);
        let early_again = history.division_at("d1", "r3", 3);
        let late_again = history.division_at("d1", "r7", 7);

        assert_eq!(late, late_again);
        assert_eq!(early, early_again);
        assert_eq!(early, Some(Division::Division2));
    }

    #[test]
    fn test_timeline_lists_every_round_in_order() {
        let drivers = vec![driver("d1", Division::Division1)];
        let mut rounds = rounds();
        rounds.reverse();
        rounds.push(Round::pre_season("s1"));
        let changes = vec![
            change("d1", "pre-season-s1", ChangeType::DivisionStart, Division::Division2),
            change("d1", "r5", ChangeType::Promotion, Division::Division1),
        ];
        let history = DivisionHistory::new(&drivers, &rounds, &changes);

        let timeline = history.timeline("d1");
        assert_eq!(timeline.len(), 9);
        assert_eq!(timeline[0].round_id, "pre-season-s1");
        assert_eq!(timeline[0].division, Division::Division2);
        assert_eq!(timeline[4].round_number, 4);
        assert_eq!(timeline[4].division, Division::Division2);
        assert_eq!(timeline[5].division, Division::Division1);
    }
}
