// =============================================================================
// Wavescan — Market-Signal Scoring Engine
// =============================================================================
//
// Deterministic, single-pass scoring pipeline for OHLCV candle series:
//
//   candles -> PriceSeries -> IndicatorSet -> long/short signals -> ScanResult
//
// The core (`indicators`, `signals`, `scanner`) is pure computation: no I/O,
// no shared state, no logging. The `engine` module is the scan-cycle
// collaborator that drives the core once per configured symbol against a
// pluggable `CandleSource`. Fetch implementations, auth, persistence and UI
// all live outside this crate.
// =============================================================================

pub mod config;
pub mod engine;
pub mod indicators;
pub mod market_data;
pub mod scanner;
pub mod signals;
pub mod symbols;
pub mod types;

pub use config::ScanConfig;
pub use engine::{
    CandleSource, ResultStore, ScanEngine, ScanMeta, ScanOutcome, ScanSummary, MIN_CANDLES,
};
pub use market_data::{Candle, PriceSeries};
pub use scanner::{score, score_at, ScanResult};
pub use symbols::{detect_asset_class, normalize_symbol, NormalizedSymbol};
pub use types::{AssetClass, Direction, Grade, Signal, SignalState};
