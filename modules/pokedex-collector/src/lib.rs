//! The sequential collect loop.
//!
//! `EntitySource` puts the network behind one trait so the loop tests
//! with a mock source: no HTTP, no live API. The loop itself consumes a
//! per-item `Result`: a failed entity is logged and skipped, and the
//! run always continues to the end of the range or name list.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use pokeapi_client::{PokeApiClient, RawBundle};
use pokedex_core::{format_record, Pokedex};

#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Fetch the three chained payloads for one entity. `key` is a
    /// decimal pokedex id or a lowercased name.
    async fn bundle(&self, key: &str) -> Result<RawBundle>;
}

#[async_trait]
impl EntitySource for PokeApiClient {
    async fn bundle(&self, key: &str) -> Result<RawBundle> {
        Ok(PokeApiClient::bundle(self, key).await?)
    }
}

/// Counters for the end-of-run summary.
#[derive(Debug, Default)]
pub struct CollectStats {
    pub fetched: u32,
    pub failed: u32,
}

impl std::fmt::Display for CollectStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Collection Complete ===")?;
        writeln!(f, "Entities fetched: {}", self.fetched)?;
        write!(f, "Entities failed:  {}", self.failed)
    }
}

/// Accumulates records over one run. Strictly sequential: one fetch
/// completes or fails before the next begins.
pub struct Collector<S> {
    source: S,
    delay: Duration,
    pokedex: Pokedex,
    stats: CollectStats,
}

impl<S: EntitySource> Collector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            delay: Duration::ZERO,
            pokedex: Pokedex::new(),
            stats: CollectStats::default(),
        }
    }

    /// Sleep this long between entities. Defaults to zero.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Collect an inclusive ascending id range.
    pub async fn collect_range(&mut self, start_id: u32, end_id: u32) {
        info!(start_id, end_id, "Collecting pokemon data");
        for id in start_id..=end_id {
            self.collect_one(&id.to_string()).await;
        }
    }

    /// Collect an explicit list of display names, lowercased for the
    /// fetch key.
    pub async fn collect_names(&mut self, names: &[String]) {
        info!(count = names.len(), "Collecting specific pokemon");
        for name in names {
            self.collect_one(&name.to_lowercase()).await;
        }
    }

    async fn collect_one(&mut self, key: &str) {
        match self.source.bundle(key).await {
            Ok(bundle) => {
                let (name, record) = format_record(&bundle);
                info!(key, name = name.as_str(), "Fetched");
                self.pokedex.insert(name, record);
                self.stats.fetched += 1;
            }
            Err(err) => {
                warn!(key, error = %err, "Fetch failed, skipping");
                self.stats.failed += 1;
            }
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    pub fn finish(self) -> (Pokedex, CollectStats) {
        (self.pokedex, self.stats)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

#[cfg(test)]
mod tests {
    use super::testing::{simple_bundle, MockSource};
    use super::*;

    #[tokio::test]
    async fn failing_middle_id_is_skipped_not_fatal() {
        let source = MockSource::default()
            .with("19", simple_bundle(19, "rattata"))
            .with("21", simple_bundle(21, "spearow"));

        let mut collector = Collector::new(source);
        collector.collect_range(19, 21).await;
        let (pokedex, stats) = collector.finish();

        assert_eq!(stats.fetched, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(pokedex.len(), 2);
        assert!(pokedex.get("Rattata").is_some());
        assert!(pokedex.get("Spearow").is_some());
    }

    #[tokio::test]
    async fn name_mode_lowercases_before_fetch() {
        let source = MockSource::default().with("pikachu", simple_bundle(25, "pikachu"));

        let mut collector = Collector::new(source);
        collector.collect_names(&["Pikachu".to_string()]).await;
        let (pokedex, stats) = collector.finish();

        assert_eq!(stats.fetched, 1);
        assert_eq!(pokedex.get("Pikachu").unwrap().pokedex_id, 25);
    }

    #[tokio::test]
    async fn records_land_in_range_order() {
        let source = MockSource::default()
            .with("1", simple_bundle(1, "bulbasaur"))
            .with("2", simple_bundle(2, "ivysaur"))
            .with("3", simple_bundle(3, "venusaur"));

        let mut collector = Collector::new(source);
        collector.collect_range(1, 3).await;
        let (pokedex, _) = collector.finish();

        let names: Vec<&str> = pokedex.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Bulbasaur", "Ivysaur", "Venusaur"]);
    }
}
