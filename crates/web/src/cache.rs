//! Time-expiring memo of computed standings, keyed by season and filter.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use storage::dto::standings::{StandingsFilter, StandingsReport};
use tokio::sync::RwLock;

type CacheKey = (String, StandingsFilter);

struct CachedReport {
    report: Arc<StandingsReport>,
    inserted_at: Instant,
}

/// Invalidation count a report was computed under. A report is only stored
/// if no invalidation for its season happened since it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    all: u64,
    season: u64,
}

#[derive(Default)]
struct Entries {
    reports: HashMap<CacheKey, CachedReport>,
    seasons: HashMap<String, u64>,
    all: u64,
}

impl Entries {
    fn generation(&self, season_id: &str) -> Generation {
        Generation {
            all: self.all,
            season: self.seasons.get(season_id).copied().unwrap_or(0),
        }
    }
}

pub struct StandingsCache {
    ttl: Duration,
    entries: RwLock<Entries>,
}

impl StandingsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Read before loading the data a report is computed from
    pub async fn generation(&self, season_id: &str) -> Generation {
        self.entries.read().await.generation(season_id)
    }

    /// Fresh report for the key; an expired entry is evicted and counts as a miss
    pub async fn get(&self, season_id: &str, filter: &StandingsFilter) -> Option<Arc<StandingsReport>> {
        let key = (season_id.to_string(), filter.clone());

        {
            let entries = self.entries.read().await;
            match entries.reports.get(&key) {
                Some(cached) if cached.inserted_at.elapsed() < self.ttl => {
                    return Some(Arc::clone(&cached.report));
                }
                Some(_) => {}
                None => return None,
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .reports
            .get(&key)
            .is_some_and(|cached| cached.inserted_at.elapsed() >= self.ttl)
        {
            entries.reports.remove(&key);
        }
        None
    }

    /// Stores the report unless the season was invalidated after `generation`
    pub async fn insert(
        &self,
        season_id: &str,
        filter: StandingsFilter,
        report: StandingsReport,
        generation: Generation,
    ) -> Arc<StandingsReport> {
        let report = Arc::new(report);
        let mut entries = self.entries.write().await;
        if entries.generation(season_id) != generation {
            tracing::debug!(season_id, "Skipped caching standings computed before an update");
            return report;
        }

        entries.reports.insert(
            (season_id.to_string(), filter),
            CachedReport {
                report: Arc::clone(&report),
                inserted_at: Instant::now(),
            },
        );
        report
    }

    pub async fn invalidate_season(&self, season_id: &str) {
        let mut entries = self.entries.write().await;
        *entries.seasons.entry(season_id.to_string()).or_insert(0) += 1;
        let before = entries.reports.len();
        entries.reports.retain(|(season, _), _| season != season_id);
        tracing::debug!(
            season_id,
            evicted = before - entries.reports.len(),
            "Invalidated cached standings"
        );
    }

    pub async fn invalidate_all(&self) {
        let mut entries = self.entries.write().await;
        entries.all += 1;
        entries.reports.clear();
        tracing::debug!("Cleared cached standings");
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.reports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use storage::models::RaceType;

    fn report() -> StandingsReport {
        StandingsReport {
            points: Vec::new(),
            driver_totals: BTreeMap::new(),
            standings: Vec::new(),
        }
    }

    fn finals() -> StandingsFilter {
        StandingsFilter {
            race_type: Some(RaceType::Final),
            ..Default::default()
        }
    }

    async fn store(cache: &StandingsCache, season_id: &str, filter: StandingsFilter) {
        let generation = cache.generation(season_id).await;
        cache.insert(season_id, filter, report(), generation).await;
    }

    #[tokio::test]
    async fn test_hit_per_season_and_filter() {
        let cache = StandingsCache::new(Duration::from_secs(60));
        store(&cache, "s1", StandingsFilter::default()).await;

        assert!(cache.get("s1", &StandingsFilter::default()).await.is_some());
        assert!(cache.get("s1", &finals()).await.is_none());
        assert!(cache.get("s2", &StandingsFilter::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entries_are_evicted() {
        let cache = StandingsCache::new(Duration::ZERO);
        store(&cache, "s1", StandingsFilter::default()).await;

        assert!(cache.get("s1", &StandingsFilter::default()).await.is_none());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_invalidate_season_keeps_other_seasons() {
        let cache = StandingsCache::new(Duration::from_secs(60));
        store(&cache, "s1", StandingsFilter::default()).await;
        store(&cache, "s1", finals()).await;
        store(&cache, "s2", StandingsFilter::default()).await;

        cache.invalidate_season("s1").await;
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("s2", &StandingsFilter::default()).await.is_some());

        cache.invalidate_all().await;
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_report_computed_before_an_update_is_not_stored() {
        let cache = StandingsCache::new(Duration::from_secs(60));
        let stale = cache.generation("s1").await;
        let other = cache.generation("s2").await;

        cache.invalidate_season("s1").await;
        let served = cache.insert("s1", StandingsFilter::default(), report(), stale).await;
        assert!(served.points.is_empty());
        assert!(cache.get("s1", &StandingsFilter::default()).await.is_none());

        // Another season's update leaves s2 cacheable
        cache.insert("s2", StandingsFilter::default(), report(), other).await;
        assert!(cache.get("s2", &StandingsFilter::default()).await.is_some());

        let before_clear = cache.generation("s2").await;
        cache.invalidate_all().await;
        cache.insert("s2", finals(), report(), before_clear).await;
        assert_eq!(cache.len().await, 0);

        let fresh = cache.generation("s1").await;
        cache.insert("s1", StandingsFilter::default(), report(), fresh).await;
        assert!(cache.get("s1", &StandingsFilter::default()).await.is_some());
    }
}
