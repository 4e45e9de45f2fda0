// =============================================================================
// OHLCV Candle
// =============================================================================

use serde::{Deserialize, Serialize};

/// A single OHLCV candle for one time bucket.
///
/// Series are time-ordered ascending by `open_time` and immutable once
/// fetched. Scoring requires at least 30 candles; enforcing that minimum is
/// the scan cycle's job, not the candle's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket open time in epoch milliseconds.
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// A bullish candle closed above its open.
    pub fn is_green(&self) -> bool {
        self.close > self.open
    }

    /// A bearish candle closed below its open. A doji (`close == open`) is
    /// neither green nor red.
    pub fn is_red(&self) -> bool {
        self.close < self.open
    }

    /// Typical price `(high + low + close) / 3`, the per-bar input to VWAP.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}
