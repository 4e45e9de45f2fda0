// =============================================================================
// Scanner — score one instrument from its candle series
// =============================================================================
//
// The single entry point of the scoring core. One call runs the whole
// pipeline:
//
//   1. Extract close/high/low/volume arrays (PriceSeries)
//   2. Compute the indicator snapshot (IndicatorSet)
//   3. Evaluate the 10-signal battery, long and short
//   4. Pick the dominant direction (ties go long) and grade it
//   5. Derive trade-plan levels and assemble the immutable ScanResult
//
// Everything here is a deterministic function of the candle slice; the
// scan timestamp is the only non-input field, and `score_at` pins it for
// reproducible backtesting.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::{BollingerBands, IndicatorSet};
use crate::market_data::{Candle, PriceSeries};
use crate::signals::{evaluate_long, evaluate_short};
use crate::symbols::normalize_symbol;
use crate::types::{AssetClass, Direction, Grade, Signal};

/// Take-profit fractions of the entry price.
const TP_NEAR_PCT: f64 = 0.03;
const TP_FAR_PCT: f64 = 0.05;
/// ATR multiple for the volatility stop.
const ATR_STOP_MULT: f64 = 2.0;

// =============================================================================
// ScanResult
// =============================================================================

/// Immutable output of one scoring run for one instrument.
///
/// Constructed once per scan cycle and superseded, never mutated, by the
/// next cycle's result for the same symbol. Price-derived display fields
/// are pre-formatted strings (4 decimals for prices, 6 for MACD, 2 for
/// percentages and ratios); they are presentation values and are never fed
/// back into computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Symbol exactly as submitted to the scan.
    pub symbol: String,
    /// Normalized display form of the symbol.
    pub display: String,
    pub asset_class: AssetClass,

    pub direction: Direction,
    /// Score of the winning direction, 0-10.
    pub score: u8,
    pub long_score: u8,
    pub short_score: u8,
    pub grade: Grade,
    pub grade_class: String,
    /// The winning direction's 10 signals, in battery order.
    pub sigs: Vec<Signal>,

    pub price: f64,
    pub rsi_now: f64,
    pub rsi_prev: f64,
    pub rsi_rising: bool,
    pub ema9: f64,
    pub ema21: f64,
    pub ema50: f64,
    pub macd: String,
    pub vol_ratio: String,

    // Trade plan
    pub entry_limit: String,
    pub tp3: String,
    pub tp5: String,
    pub stop: String,
    pub atr_stop: String,
    pub atr_pct: String,
    pub vwap: String,

    pub green_run: usize,
    pub bb: BollingerBands,

    // Chart series for the dashboard sparkline
    pub closes: Vec<f64>,
    pub vols: Vec<f64>,
    pub times: Vec<i64>,

    /// RFC 3339 timestamp of the scan that produced this result.
    pub scan_time: String,
}

// =============================================================================
// Scoring pipeline
// =============================================================================

/// Score one instrument, stamping the current UTC time.
pub fn score(sym_raw: &str, asset_class: AssetClass, candles: &[Candle]) -> ScanResult {
    score_at(sym_raw, asset_class, candles, Utc::now())
}

/// Score one instrument at a pinned timestamp.
///
/// Same candles, same timestamp => bit-for-bit the same result, which is
/// what backtests replaying historical scans rely on.
pub fn score_at(
    sym_raw: &str,
    asset_class: AssetClass,
    candles: &[Candle],
    scan_time: DateTime<Utc>,
) -> ScanResult {
    let series = PriceSeries::from_candles(candles);
    let ind = IndicatorSet::compute(&series, candles);

    let (long_score, long_sigs) = evaluate_long(&ind);
    let (short_score, short_sigs) = evaluate_short(&ind);

    let direction = Direction::pick(long_score, short_score);
    let (score, sigs) = match direction {
        Direction::Long => (long_score, long_sigs),
        Direction::Short => (short_score, short_sigs),
    };

    let grade = Grade::from_score(score);

    // Trade plan: targets off the last price, entry at EMA9, trend stop at
    // EMA21, volatility stop 2xATR away. Mirrored for shorts.
    let price = ind.price;
    let (tp3, tp5, atr_stop) = match direction {
        Direction::Long => (
            price * (1.0 + TP_NEAR_PCT),
            price * (1.0 + TP_FAR_PCT),
            price - ATR_STOP_MULT * ind.atr,
        ),
        Direction::Short => (
            price * (1.0 - TP_NEAR_PCT),
            price * (1.0 - TP_FAR_PCT),
            price + ATR_STOP_MULT * ind.atr,
        ),
    };

    ScanResult {
        symbol: sym_raw.to_string(),
        display: normalize_symbol(sym_raw).display,
        asset_class,
        direction,
        score,
        long_score,
        short_score,
        grade,
        grade_class: grade.class().to_string(),
        sigs,
        price,
        rsi_now: ind.rsi_now,
        rsi_prev: ind.rsi_prev,
        rsi_rising: ind.rsi_rising,
        ema9: ind.ema9,
        ema21: ind.ema21,
        ema50: ind.ema50,
        macd: format!("{:.6}", ind.macd),
        vol_ratio: format!("{:.2}", ind.vol_ratio),
        entry_limit: fmt_price(ind.ema9),
        tp3: fmt_price(tp3),
        tp5: fmt_price(tp5),
        stop: fmt_price(ind.ema21),
        atr_stop: fmt_price(atr_stop),
        atr_pct: if price > 0.0 {
            format!("{:.2}", ind.atr_pct)
        } else {
            "0".to_string()
        },
        vwap: fmt_price(ind.vwap),
        green_run: ind.green_run,
        bb: ind.bb,
        closes: series.closes,
        vols: series.vols,
        times: series.times,
        scan_time: scan_time.to_rfc3339(),
    }
}

/// Display formatting for price-derived levels: 4 decimal places.
fn fmt_price(value: f64) -> String {
    format!("{value:.4}")
}
