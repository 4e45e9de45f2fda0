// =============================================================================
// IndicatorSet — per-scan indicator snapshot
// =============================================================================
//
// One scoring run computes every indicator exactly once, over fixed trailing
// windows chosen to stabilize each period's smoothing:
//
//   EMA9  <- last 20 closes      EMA12 <- last 30 closes
//   EMA21 <- last 30 closes      EMA26 <- last 40 closes
//   EMA50 <- last 60 closes
//   RSI   <- last 16 closes (now) / 16 closes excluding the tail (prev)
//   Bollinger <- trailing min(20, len) closes, 2 sigma
//   ATR   <- 14-period trailing mean, VWAP <- whole window
//
// The snapshot is a pure function of the candle slice; nothing carries over
// between runs.

use serde::{Deserialize, Serialize};

use crate::indicators::{atr, band_position, bollinger, ema, green_run, red_run, rsi, vwap};
use crate::indicators::BollingerBands;
use crate::market_data::{Candle, PriceSeries};

/// Fraction of price targeted by the trade plan (3%), measured against a
/// 2xATR stop to form the ATR risk/reward ratio.
const TARGET_PCT: f64 = 0.03;

/// All derived indicator values for one (instrument, series) scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub price: f64,

    pub ema9: f64,
    pub ema21: f64,
    pub ema50: f64,
    pub ema12: f64,
    pub ema26: f64,
    /// `ema12 - ema26`.
    pub macd: f64,

    /// 14-period RSI at the last close.
    pub rsi_now: f64,
    /// 14-period RSI one close earlier.
    pub rsi_prev: f64,
    pub rsi_rising: bool,

    pub bb: BollingerBands,
    /// Price position inside the bands; 0.5 when the envelope has no width.
    pub bb_pos: f64,

    pub atr: f64,
    /// ATR as a percentage of price; 0.0 when price is not positive.
    pub atr_pct: f64,
    /// Risk/reward of a 3% target against a 2xATR stop; 0.0 when ATR is 0.
    pub atr_rr: f64,

    pub vwap: f64,

    /// Last volume over the average of the 10 prior volumes, rounded to two
    /// decimals; 1.0 when the prior window is empty or silent.
    pub vol_ratio: f64,

    pub green_run: usize,
    pub red_run: usize,
}

impl IndicatorSet {
    /// Compute the full snapshot for one candle series.
    pub fn compute(series: &PriceSeries, candles: &[Candle]) -> Self {
        let closes = &series.closes;
        let price = series.price;

        let ema9 = ema(tail(closes, 20), 9);
        let ema21 = ema(tail(closes, 30), 21);
        let ema50 = ema(tail(closes, 60), 50);
        let ema12 = ema(tail(closes, 30), 12);
        let ema26 = ema(tail(closes, 40), 26);
        let macd = ema12 - ema26;

        let rsi_now = rsi(tail(closes, 16), 14);
        let rsi_prev = rsi(tail_before_last(closes, 16), 14);
        let rsi_rising = rsi_now > rsi_prev;

        let bb = bollinger(closes, closes.len().min(20), 2.0);
        let bb_pos = band_position(price, &bb);

        let atr = atr(candles, 14);
        let atr_pct = if price > 0.0 { atr / price * 100.0 } else { 0.0 };
        let atr_rr = if atr > 0.0 {
            (price * TARGET_PCT) / (2.0 * atr)
        } else {
            0.0
        };

        let vwap = vwap(candles);

        let vol_ratio = volume_ratio(&series.vols);

        Self {
            price,
            ema9,
            ema21,
            ema50,
            ema12,
            ema26,
            macd,
            rsi_now,
            rsi_prev,
            rsi_rising,
            bb,
            bb_pos,
            atr,
            atr_pct,
            atr_rr,
            vwap,
            vol_ratio,
            green_run: green_run(candles),
            red_run: red_run(candles),
        }
    }
}

/// Trailing `n` elements of a slice (the whole slice when shorter).
fn tail(data: &[f64], n: usize) -> &[f64] {
    &data[data.len().saturating_sub(n)..]
}

/// Trailing `n` elements ending one before the last (for "previous bar"
/// readings of an indicator).
fn tail_before_last(data: &[f64], n: usize) -> &[f64] {
    let end = data.len().saturating_sub(1);
    &data[end.saturating_sub(n)..end]
}

/// Last volume over the mean of the 10 volumes before it, rounded to two
/// decimals. The rounded value is what the volume-surge rule compares, so
/// display and scoring can never disagree.
fn volume_ratio(vols: &[f64]) -> f64 {
    let Some(&last) = vols.last() else {
        return 1.0;
    };

    let end = vols.len() - 1;
    let start = vols.len().saturating_sub(11);
    let avg = vols[start..end].iter().sum::<f64>() / 10.0;

    if avg > 0.0 {
        ((last / avg) * 100.0).round() / 100.0
    } else {
        1.0
    }
}
