use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::{
    dto::standings::{DriverPoints, PreviewStandingsRequest, StandingsFilter, StandingsReport},
    error::Result,
    models::PointKey,
    repository::{
        round::RoundRepository,
        standings::{SeasonSnapshot, StandingsRepository},
    },
    services::{points_table::LeaguePointsTable, standings::StandingsCalculator},
};

use crate::cache::StandingsCache;

fn calculate(
    snapshot: &SeasonSnapshot,
    edits: &HashMap<PointKey, Decimal>,
    filter: &StandingsFilter,
) -> StandingsReport {
    let table = LeaguePointsTable::default();
    let report = StandingsCalculator::new(snapshot.input(edits), &table).calculate(filter);

    tracing::debug!(
        season_id = %snapshot.season.season_id,
        results = snapshot.results.len(),
        saved = snapshot.saved_points.len(),
        edits = edits.len(),
        points = report.points.len(),
        drivers = report.standings.len(),
        "Computed standings"
    );
    report
}

/// Standings from stored data only, served from the cache while fresh
pub async fn season_standings(
    pool: &PgPool,
    cache: &StandingsCache,
    season_id: &str,
    filter: StandingsFilter,
) -> Result<Arc<StandingsReport>> {
    let filter = filter.normalized();

    if let Some(report) = cache.get(season_id, &filter).await {
        tracing::debug!(season_id, "Standings cache hit");
        return Ok(report);
    }
    tracing::debug!(season_id, "Standings cache miss");

    // Taken before loading so a write landing mid-calculation keeps it out of the cache
    let generation = cache.generation(season_id).await;
    let snapshot = StandingsRepository::new(pool).load(season_id).await?;
    let report = calculate(&snapshot, &HashMap::new(), &filter);

    Ok(cache.insert(season_id, filter, report, generation).await)
}

/// Standings with unsaved edits laid over the stored data
pub async fn preview_standings(
    pool: &PgPool,
    season_id: &str,
    request: PreviewStandingsRequest,
) -> Result<StandingsReport> {
    let snapshot = StandingsRepository::new(pool).load(season_id).await?;

    let edits: HashMap<PointKey, Decimal> = request
        .edits
        .into_iter()
        .map(|edit| (edit.key.normalized(), edit.points))
        .collect();

    Ok(calculate(&snapshot, &edits, &request.filter.normalized()))
}

/// Ranked points of every race entry of one round
pub async fn round_points(pool: &PgPool, round_id: &str) -> Result<Vec<DriverPoints>> {
    let round = RoundRepository::new(pool).find_by_id(round_id).await?;
    let snapshot = StandingsRepository::new(pool).load(&round.season_id).await?;

    let table = LeaguePointsTable::default();
    let edits = HashMap::new();
    Ok(StandingsCalculator::new(snapshot.input(&edits), &table).round_points(round_id))
}
