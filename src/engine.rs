// =============================================================================
// Scan Engine — drives the scoring core once per configured symbol
// =============================================================================
//
// The scan-cycle collaborator around the pure core. Each cycle:
//
//   1. Normalize every watchlist symbol
//   2. Fetch candles through the pluggable CandleSource
//   3. Drop series shorter than the scoring minimum (counted as failed)
//   4. Score the rest and sort descending by score
//   5. Publish the batch to the ResultStore, superseding the previous cycle
//
// Per-symbol failures are logged and skipped, never fatal: one dead symbol
// must not take down the whole scan.
// =============================================================================

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::market_data::Candle;
use crate::scanner::{self, ScanResult};
use crate::symbols::normalize_symbol;
use crate::types::{AssetClass, Direction, Grade};

/// Minimum series length the scoring pipeline accepts. Shorter series are
/// dropped here so the indicator windows downstream always have enough
/// history to smooth over.
pub const MIN_CANDLES: usize = 30;

// =============================================================================
// CandleSource
// =============================================================================

/// The data-fetch collaborator feeding the engine.
///
/// Implementations own everything the core does not: transport, retries,
/// provider routing by asset class, interval translation. The `interval`
/// label is opaque here and forwarded unchanged.
pub trait CandleSource {
    /// Fetch up to `limit` candles for `symbol`, oldest first.
    fn fetch_candles(
        &self,
        symbol: &str,
        asset_class: AssetClass,
        interval: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Candle>>> + Send;
}

// =============================================================================
// Scan outcome
// =============================================================================

/// Bookkeeping for one scan cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanMeta {
    /// Symbols successfully scored this cycle.
    pub scanned: usize,
    /// Symbols dropped (fetch error or series too short).
    pub failed: usize,
    pub interval: String,
    /// RFC 3339 timestamp of cycle completion.
    pub timestamp: String,
}

/// One scan cycle's results, sorted descending by score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub results: Vec<ScanResult>,
    pub meta: ScanMeta,
}

impl ScanOutcome {
    /// Results at or above `min_score`, preserving the sorted order.
    pub fn filtered(&self, min_score: u8) -> Vec<&ScanResult> {
        self.results
            .iter()
            .filter(|r| r.score >= min_score)
            .collect()
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary::of(&self.results)
    }
}

/// Grade-band counts for the dashboard header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    pub strong: usize,
    pub valid: usize,
    pub weak: usize,
    pub skip: usize,
    pub long_strong: usize,
    pub long_valid: usize,
    pub short_strong: usize,
    pub short_valid: usize,
    pub total: usize,
    /// Symbol of the top-ranked result, if any.
    pub best: Option<String>,
}

impl ScanSummary {
    /// Tally a result batch. Assumes `results` is already sorted descending
    /// by score, as produced by the engine.
    pub fn of(results: &[ScanResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            best: results.first().map(|r| r.symbol.clone()),
            ..Self::default()
        };

        for r in results {
            match r.grade {
                Grade::Strong => summary.strong += 1,
                Grade::Valid => summary.valid += 1,
                Grade::Weak => summary.weak += 1,
                Grade::Skip => summary.skip += 1,
            }
            match (r.direction, r.grade) {
                (Direction::Long, Grade::Strong) => summary.long_strong += 1,
                (Direction::Long, Grade::Valid) => summary.long_valid += 1,
                (Direction::Short, Grade::Strong) => summary.short_strong += 1,
                (Direction::Short, Grade::Valid) => summary.short_valid += 1,
                _ => {}
            }
        }

        summary
    }
}

// =============================================================================
// ResultStore
// =============================================================================

/// Latest scan result per symbol.
///
/// Results are immutable; each scan cycle replaces a symbol's entry with a
/// freshly built record rather than mutating the old one, so a reader
/// holding a clone never observes a half-updated scan.
#[derive(Default)]
pub struct ResultStore {
    results: RwLock<HashMap<String, ScanResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a scan batch, superseding previous entries for the same
    /// symbols.
    pub fn publish(&self, results: &[ScanResult]) {
        let mut map = self.results.write();
        for r in results {
            map.insert(r.symbol.clone(), r.clone());
        }
    }

    /// Latest result for a symbol, if it has been scanned.
    pub fn latest(&self, symbol: &str) -> Option<ScanResult> {
        self.results.read().get(symbol).cloned()
    }

    /// All stored results, unordered.
    pub fn all(&self) -> Vec<ScanResult> {
        self.results.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.results.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.read().is_empty()
    }
}

// =============================================================================
// ScanEngine
// =============================================================================

/// Owns the scan configuration and the latest-results store, and runs scan
/// cycles against a candle source.
pub struct ScanEngine {
    config: ScanConfig,
    store: Arc<ResultStore>,
}

impl ScanEngine {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            store: Arc::new(ResultStore::new()),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Shared handle to the latest-results store, for API/UI readers.
    pub fn store(&self) -> Arc<ResultStore> {
        self.store.clone()
    }

    /// Run one scan cycle over the configured watchlist.
    pub async fn scan_once<S: CandleSource>(&self, source: &S) -> ScanOutcome {
        let mut results = Vec::with_capacity(self.config.symbols.len());
        let mut failed = 0usize;

        for raw in &self.config.symbols {
            let norm = normalize_symbol(raw);

            match source
                .fetch_candles(
                    &norm.symbol,
                    norm.asset_class,
                    &self.config.interval,
                    self.config.limit,
                )
                .await
            {
                Ok(candles) if candles.len() >= MIN_CANDLES => {
                    debug!(symbol = %raw, candles = candles.len(), "scoring");
                    results.push(scanner::score(raw, norm.asset_class, &candles));
                }
                Ok(candles) => {
                    warn!(
                        symbol = %raw,
                        candles = candles.len(),
                        min = MIN_CANDLES,
                        "series too short — skipping"
                    );
                    failed += 1;
                }
                Err(e) => {
                    warn!(symbol = %raw, error = %e, "candle fetch failed — skipping");
                    failed += 1;
                }
            }
        }

        results.sort_by(|a, b| b.score.cmp(&a.score));
        self.store.publish(&results);

        let meta = ScanMeta {
            scanned: results.len(),
            failed,
            interval: self.config.interval.clone(),
            timestamp: Utc::now().to_rfc3339(),
        };

        info!(
            scanned = meta.scanned,
            failed = meta.failed,
            interval = %meta.interval,
            "scan cycle complete"
        );

        ScanOutcome { results, meta }
    }

    /// Rescan forever, sleeping `refresh_secs` between cycles.
    pub async fn run<S: CandleSource>(&self, source: &S) {
        loop {
            self.scan_once(source).await;
            tokio::time::sleep(Duration::from_secs(self.config.refresh_secs)).await;
        }
    }
}
