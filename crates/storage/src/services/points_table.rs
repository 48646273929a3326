//! Points awarded for a finishing position.
//!
//! The league scores heats and finals on different scales when a round runs
//! both stages, and uses a single, richer final scale when it does not.

use rust_decimal::Decimal;

use crate::models::RaceType;

/// Maps a points position to the points it earns
pub trait PointsTable {
    fn points_for(&self, position: u32, race_type: RaceType, round_has_heat: bool) -> Decimal;
}

impl<F> PointsTable for F
where
    F: Fn(u32, RaceType, bool) -> Decimal,
{
    fn points_for(&self, position: u32, race_type: RaceType, round_has_heat: bool) -> Decimal {
        self(position, race_type, round_has_heat)
    }
}

const FINAL_ONLY: [i64; 16] = [25, 20, 17, 15, 13, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
const FINAL_AFTER_HEATS: [i64; 12] = [20, 16, 13, 11, 9, 8, 7, 6, 5, 4, 3, 2];
const HEAT: [i64; 8] = [10, 8, 6, 5, 4, 3, 2, 1];

/// The league's scoring scales
#[derive(Debug, Clone, PartialEq)]
pub struct LeaguePointsTable {
    final_only: Vec<Decimal>,
    final_after_heats: Vec<Decimal>,
    heat: Vec<Decimal>,
    qualification: Vec<Decimal>,
}

impl LeaguePointsTable {
    pub fn new(
        final_only: Vec<Decimal>,
        final_after_heats: Vec<Decimal>,
        heat: Vec<Decimal>,
        qualification: Vec<Decimal>,
    ) -> Self {
        Self {
            final_only,
            final_after_heats,
            heat,
            qualification,
        }
    }

    fn scale(&self, race_type: RaceType, round_has_heat: bool) -> &[Decimal] {
        match (race_type, round_has_heat) {
            (RaceType::Final, false) => &self.final_only,
            (RaceType::Final, true) => &self.final_after_heats,
            (RaceType::Heat, _) => &self.heat,
            (RaceType::Qualification, _) => &self.qualification,
        }
    }
}

impl Default for LeaguePointsTable {
    fn default() -> Self {
        let scale = |values: &[i64]| values.iter().copied().map(Decimal::from).collect();
        Self::new(scale(&FINAL_ONLY), scale(&FINAL_AFTER_HEATS), scale(&HEAT), Vec::new())
    }
}

impl PointsTable for LeaguePointsTable {
    fn points_for(&self, position: u32, race_type: RaceType, round_has_heat: bool) -> Decimal {
        if position == 0 {
            return Decimal::ZERO;
        }
        self.scale(race_type, round_has_heat)
            .get(position as usize - 1)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_scale_depends_on_heats() {
        let table = LeaguePointsTable::default();
        assert_eq!(table.points_for(1, RaceType::Final, false), Decimal::from(25));
        assert_eq!(table.points_for(1, RaceType::Final, true), Decimal::from(20));
        assert_eq!(table.points_for(1, RaceType::Heat, true), Decimal::from(10));
    }

    #[test]
    fn test_out_of_range_positions_score_zero() {
        let table = LeaguePointsTable::default();
        assert_eq!(table.points_for(0, RaceType::Final, false), Decimal::ZERO);
        assert_eq!(table.points_for(17, RaceType::Final, false), Decimal::ZERO);
        assert_eq!(table.points_for(9, RaceType::Heat, true), Decimal::ZERO);
    }

    #[test]
    fn test_qualification_scores_nothing_by_default() {
        let table = LeaguePointsTable::default();
        assert_eq!(table.points_for(1, RaceType::Qualification, false), Decimal::ZERO);
    }

    #[test]
    fn test_closures_are_points_tables() {
        let flat = |_: u32, _: RaceType, _: bool| Decimal::ONE;
        assert_eq!(flat.points_for(3, RaceType::Heat, false), Decimal::ONE);
    }
}
