//! Season points and standings.
//!
//! Calculation runs in two passes. The first scores every race entry on its
//! own: results are grouped per race, ordered by finish and looked up in the
//! points table, then saved points and pending edits are laid over the
//! calculated values. The second pass ranks every stage block of a round and
//! re-scores only the calculated entries from their new points position.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;

use crate::dto::standings::{
    DriverPoints, PointsSource, RankingMode, RoundPoints, StandingEntry,
    StandingsFilter, StandingsReport,
};
use crate::models::{
    Division, DivisionChange, Driver, PointKey, RaceResult, RaceType, Round, SavedPoint,
    normalize_group_letter,
};
use crate::services::division_history::DivisionHistory;
use crate::services::points_table::PointsTable;

pub const UNKNOWN_DRIVER: &str = "Unknown Driver";

/// Snapshot of everything the calculation reads. Nothing in it is modified.
#[derive(Debug, Clone, Copy)]
pub struct StandingsInput<'a> {
    pub rounds: &'a [Round],
    pub drivers: &'a [Driver],
    pub division_changes: &'a [DivisionChange],
    pub results: &'a [RaceResult],
    pub saved_points: &'a HashMap<PointKey, SavedPoint>,
    /// Points typed in but not saved yet
    pub edits: &'a HashMap<PointKey, Decimal>,
}

pub struct StandingsCalculator<'a, T: PointsTable + ?Sized> {
    input: StandingsInput<'a>,
    table: &'a T,
    history: DivisionHistory<'a>,
    driver_names: HashMap<&'a str, &'a str>,
    rounds_with_heats: HashSet<&'a str>,
}

impl<'a, T: PointsTable + ?Sized> StandingsCalculator<'a, T> {
    pub fn new(input: StandingsInput<'a>, table: &'a T) -> Self {
        let rounds_with_heats = input
            .results
            .iter()
            .filter(|r| r.race_type == RaceType::Heat)
            .map(|r| r.round_id.as_str())
            .collect();

        Self {
            input,
            table,
            history: DivisionHistory::new(input.drivers, input.rounds, input.division_changes),
            driver_names: input
                .drivers
                .iter()
                .map(|d| (d.driver_id.as_str(), d.name.as_str()))
                .collect(),
            rounds_with_heats,
        }
    }

    /// Filtered, ranked points plus season totals and standings.
    ///
    /// Totals and standings always come from the whole season ranked
    /// stage by stage, so the filter only narrows `points`.
    pub fn calculate(&self, filter: &StandingsFilter) -> StandingsReport {
        let records = self.season_points();
        let mut ranked = records.clone();
        self.rerank(&mut ranked);
        let driver_totals = driver_totals(&ranked);
        let standings = self.season_standings(&ranked, &driver_totals, filter.division);

        let mut points: Vec<DriverPoints> = records
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect();
        self.rerank(&mut points);

        StandingsReport {
            points,
            driver_totals,
            standings,
        }
    }

    /// First-pass points of every race entry of the season
    pub fn season_points(&self) -> Vec<DriverPoints> {
        let mut by_round: BTreeMap<&str, Vec<&RaceResult>> = BTreeMap::new();
        for result in self.input.results {
            by_round.entry(result.round_id.as_str()).or_default().push(result);
        }

        let mut records: Vec<DriverPoints> = by_round
            .into_iter()
            .flat_map(|(round_id, results)| self.score_round(round_id, &results))
            .collect();
        records.sort_by(|a, b| {
            a.round_number
                .cmp(&b.round_number)
                .then_with(|| a.round_id.cmp(&b.round_id))
        });
        records
    }

    /// Ranked points of one round, as they count towards the season totals
    pub fn round_points(&self, round_id: &str) -> Vec<DriverPoints> {
        let results: Vec<&RaceResult> = self
            .input
            .results
            .iter()
            .filter(|r| r.round_id == round_id)
            .collect();
        let mut points = self.score_round(round_id, &results);
        self.rerank(&mut points);
        points
    }

    fn score_round(&self, round_id: &str, results: &[&RaceResult]) -> Vec<DriverPoints> {
        let round_number = self.history.round_number(round_id);
        let has_heat = self.rounds_with_heats.contains(round_id);

        // Every (division, stage, group letter) is a race of its own
        let mut races: BTreeMap<(Division, RaceType, Option<String>), Vec<&RaceResult>> =
            BTreeMap::new();
        for result in results {
            let group = normalize_group_letter(result.final_type.as_deref());
            races
                .entry((result.race_division, result.race_type, group))
                .or_default()
                .push(*result);
        }

        let mut entries = Vec::with_capacity(results.len());
        for ((race_division, race_type, final_type), mut race) in races {
            race.sort_by_key(|r| {
                let rank = r.finish_rank();
                (rank.is_none(), rank.unwrap_or(0))
            });

            for (index, result) in race.into_iter().enumerate() {
                let overall_position = result
                    .overall_position
                    .filter(|p| *p > 0)
                    .map(|p| p as u32)
                    .unwrap_or(index as u32 + 1);

                let mut entry = DriverPoints {
                    round_id: round_id.to_string(),
                    round_number,
                    driver_id: result.driver_id.clone(),
                    driver_name: self.driver_name(result),
                    race_division,
                    division: self
                        .history
                        .division_at(&result.driver_id, round_id, round_number)
                        .unwrap_or(race_division),
                    race_type,
                    final_type: final_type.clone(),
                    overall_position,
                    points_position: overall_position,
                    points: self.table.points_for(overall_position, race_type, has_heat),
                    source: PointsSource::Calculated,
                    note: None,
                };

                let key = entry.key();
                if let Some(saved) = self.input.saved_points.get(&key) {
                    let saved_position = saved.overall_position.max(0) as u32;
                    entry.points = saved.points;
                    entry.division = saved.division;
                    entry.overall_position = saved_position;
                    entry.points_position = saved_position;
                    entry.source = PointsSource::Saved;
                    entry.note = saved.note.clone();
                } else if let Some(edited) = self.input.edits.get(&key) {
                    entry.points = *edited;
                    entry.source = PointsSource::Edited;
                }

                entries.push(entry);
            }
        }
        entries
    }

    fn driver_name(&self, result: &RaceResult) -> String {
        self.driver_names
            .get(result.driver_id.as_str())
            .copied()
            .or_else(|| {
                result
                    .driver_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
            })
            .unwrap_or(UNKNOWN_DRIVER)
            .to_string()
    }

    /// Second pass: rank each stage block and re-score live rows
    fn rerank(&self, points: &mut [DriverPoints]) {
        let mut blocks: BTreeMap<(&str, StageKey<'_>), Vec<usize>> = BTreeMap::new();
        for (index, entry) in points.iter().enumerate() {
            blocks
                .entry((entry.round_id.as_str(), stage_key(entry)))
                .or_default()
                .push(index);
        }

        let mut rescored: Vec<(usize, u32, Option<Decimal>)> = Vec::with_capacity(points.len());
        for ((round_id, _), mut indices) in blocks {
            let has_heat = self.rounds_with_heats.contains(round_id);
            // Every block holds at least the row that opened it
            let order = ranking_order(RankingMode::for_race_type(points[indices[0]].race_type));
            indices.sort_by(|&a, &b| order(&points[a], &points[b]));

            for (rank, index) in indices.into_iter().enumerate() {
                let position = rank as u32 + 1;
                let entry = &points[index];
                let new_points = entry
                    .is_live()
                    .then(|| self.table.points_for(position, entry.race_type, has_heat));
                rescored.push((index, position, new_points));
            }
        }

        for (index, position, new_points) in rescored {
            let entry = &mut points[index];
            entry.points_position = position;
            if let Some(value) = new_points {
                entry.points = value;
            }
        }

        points.sort_by(|a, b| {
            a.round_number
                .cmp(&b.round_number)
                .then_with(|| a.round_id.cmp(&b.round_id))
                .then_with(|| stage_key(a).cmp(&stage_key(b)))
                .then(a.points_position.cmp(&b.points_position))
        });
    }

    /// Drivers ordered by season total, equal totals sharing a position
    fn season_standings(
        &self,
        records: &[DriverPoints],
        totals: &BTreeMap<String, Decimal>,
        division: Option<Division>,
    ) -> Vec<StandingEntry> {
        let mut seasons: BTreeMap<&str, DriverSeason<'_>> = BTreeMap::new();
        for entry in records {
            let season = seasons
                .entry(entry.driver_id.as_str())
                .or_insert_with(|| DriverSeason {
                    name: &entry.driver_name,
                    latest: entry,
                    race_count: 0,
                    rounds: BTreeMap::new(),
                });
            if entry.round_number > season.latest.round_number {
                season.latest = entry;
            }
            season.race_count += 1;
            *season
                .rounds
                .entry((entry.round_number, entry.round_id.as_str()))
                .or_insert(Decimal::ZERO) += entry.points;
        }

        let mut standings: Vec<StandingEntry> = seasons
            .into_iter()
            .map(|(driver_id, season)| {
                let latest = season.latest;
                let current = self
                    .history
                    .division_at(driver_id, &latest.round_id, latest.round_number)
                    .unwrap_or(latest.division);
                (driver_id, season, current)
            })
            .filter(|(_, _, current)| division.is_none_or(|d| current.matches_driver_filter(d)))
            .map(|(driver_id, season, current)| StandingEntry {
                position: 0,
                driver_id: driver_id.to_string(),
                driver_name: season.name.to_string(),
                division: current,
                total_points: totals.get(driver_id).copied().unwrap_or(Decimal::ZERO),
                race_count: season.race_count,
                rounds: season
                    .rounds
                    .into_iter()
                    .map(|((round_number, round_id), points)| RoundPoints {
                        round_id: round_id.to_string(),
                        round_number,
                        points,
                    })
                    .collect(),
            })
            .collect();

        standings.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.driver_name.cmp(&b.driver_name))
                .then_with(|| a.driver_id.cmp(&b.driver_id))
        });

        let mut previous: Option<(Decimal, u32)> = None;
        for (index, entry) in standings.iter_mut().enumerate() {
            entry.position = match previous {
                Some((total, position)) if total == entry.total_points => position,
                _ => index as u32 + 1,
            };
            previous = Some((entry.total_points, entry.position));
        }

        standings
    }
}

/// Race division, stage priority and, outside finals, the group letter.
/// Finals share one block so Final A ranks ahead of Final B; parallel heats
/// each keep their own.
type StageKey<'e> = (Division, u8, Option<&'e str>);

fn stage_key(entry: &DriverPoints) -> StageKey<'_> {
    let group = match entry.race_type {
        RaceType::Final => None,
        RaceType::Heat | RaceType::Qualification => entry.final_type.as_deref(),
    };
    (entry.race_division, entry.race_type.priority(), group)
}

fn ranking_order(mode: RankingMode) -> fn(&DriverPoints, &DriverPoints) -> Ordering {
    match mode {
        RankingMode::FinalGroups => final_group_order,
        RankingMode::Points => points_order,
    }
}

/// Final A ahead of Final B, then by finishing position
fn final_group_order(a: &DriverPoints, b: &DriverPoints) -> Ordering {
    let letters = match (a.final_type.as_deref(), b.final_type.as_deref()) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    letters
        .then(a.overall_position.cmp(&b.overall_position))
        .then_with(|| a.driver_name.cmp(&b.driver_name))
}

/// Highest points first
fn points_order(a: &DriverPoints, b: &DriverPoints) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(a.race_type.priority().cmp(&b.race_type.priority()))
        .then_with(|| a.driver_name.cmp(&b.driver_name))
}

/// Sum of every race entry per driver, whatever the filter
pub fn driver_totals(records: &[DriverPoints]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for entry in records {
        *totals.entry(entry.driver_id.clone()).or_insert(Decimal::ZERO) += entry.points;
    }
    totals
}

struct DriverSeason<'r> {
    name: &'r str,
    /// First record of the driver's latest round
    latest: &'r DriverPoints,
    race_count: u32,
    rounds: BTreeMap<(i32, &'r str), Decimal>,
}
