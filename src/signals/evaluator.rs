// =============================================================================
// Signal Evaluator — the 10-signal battery, long and short
// =============================================================================
//
// Signals 1-6 are direction-specific (trend stack, RSI zone, RSI momentum,
// volume surge, short-horizon trend, MACD sign). Signals 7-10 are
// direction-aware variants of shared checks (Bollinger position, ATR
// risk/reward, VWAP side, candle run).
//
// Volume surge and ATR R:R use the same threshold on both sides: they are
// regime-neutral liquidity/volatility filters, not directional bets, so the
// same underlying fact can award a point to both interpretations.
//
// Bollinger warn bounds are asymmetric versus the hit bounds (long: hit
// < 0.35 / warn > 0.8; short: hit > 0.65 / warn < 0.2) — the wider neutral
// zone before flagging overbought/oversold is intentional and preserved.

use crate::indicators::IndicatorSet;
use crate::types::Signal;

/// Every direction evaluates exactly this many signals, in a fixed order.
pub const SIGNALS_PER_SIDE: usize = 10;

/// Minimum ratio of last volume to the 10-bar prior average to count as a
/// volume surge. Shared by both sides.
const VOL_SURGE_RATIO: f64 = 1.3;

/// Minimum candle-run length to count as momentum confirmation.
const RUN_LEN: usize = 3;

/// Evaluate the long-side battery. Returns the score (count of hits) and
/// the 10 signals in battery order.
pub fn evaluate_long(ind: &IndicatorSet) -> (u8, Vec<Signal>) {
    let mut sigs = Vec::with_capacity(SIGNALS_PER_SIDE);

    // 1. Bullish EMA stack
    if ind.ema9 > ind.ema21 && ind.ema21 > ind.ema50 {
        sigs.push(Signal::hit("EMA9>21>50"));
    } else {
        sigs.push(Signal::miss("EMA Stack"));
    }

    // 2. RSI in the 50-80 momentum zone; above 80 is flagged overbought
    if ind.rsi_now >= 50.0 && ind.rsi_now <= 80.0 {
        sigs.push(Signal::hit(format!("RSI {:.1}", ind.rsi_now)));
    } else if ind.rsi_now > 80.0 {
        sigs.push(Signal::warn(format!("RSI {:.1}", ind.rsi_now)));
    } else {
        sigs.push(Signal::miss(format!("RSI {:.1}", ind.rsi_now)));
    }

    // 3. RSI momentum
    if ind.rsi_rising {
        sigs.push(Signal::hit("RSI Rising"));
    } else {
        sigs.push(Signal::miss("RSI Falling"));
    }

    // 4. Volume surge (shared threshold)
    sigs.push(volume_signal(ind));

    // 5. Short-horizon trend
    if ind.ema9 > ind.ema21 {
        sigs.push(Signal::hit("Trend BULL"));
    } else {
        sigs.push(Signal::miss("Trend BEAR"));
    }

    // 6. MACD sign
    if ind.macd > 0.0 {
        sigs.push(Signal::hit("MACD+"));
    } else {
        sigs.push(Signal::miss("MACD-"));
    }

    // 7. Bollinger position: near the lower band is a long entry, deep in
    //    the upper band is an overbought warn
    let pct = ind.bb_pos * 100.0;
    if ind.bb_pos < 0.35 {
        sigs.push(Signal::hit(format!("BB Lower ({pct:.0}%)")));
    } else if ind.bb_pos > 0.8 {
        sigs.push(Signal::warn(format!("BB Upper ({pct:.0}%)")));
    } else {
        sigs.push(Signal::miss(format!("BB Mid ({pct:.0}%)")));
    }

    // 8. ATR risk/reward (shared threshold)
    sigs.push(atr_rr_signal(ind));

    // 9. VWAP side
    if ind.vwap > 0.0 && ind.price > ind.vwap {
        sigs.push(Signal::hit("Above VWAP"));
    } else if ind.price > ind.vwap {
        sigs.push(Signal::miss("Above VWAP"));
    } else {
        sigs.push(Signal::miss("Below VWAP"));
    }

    // 10. Green candle run
    sigs.push(run_signal(ind.green_run, "Green"));

    (count_hits(&sigs), sigs)
}

/// Evaluate the short-side battery: each rule mirrored with inverted
/// comparators, shared checks unchanged.
pub fn evaluate_short(ind: &IndicatorSet) -> (u8, Vec<Signal>) {
    let mut sigs = Vec::with_capacity(SIGNALS_PER_SIDE);

    // 1. Bearish EMA stack
    if ind.ema9 < ind.ema21 && ind.ema21 < ind.ema50 {
        sigs.push(Signal::hit("EMA9<21<50"));
    } else {
        sigs.push(Signal::miss("EMA Stack"));
    }

    // 2. RSI in the 20-50 zone; below 20 is flagged oversold
    if ind.rsi_now >= 20.0 && ind.rsi_now <= 50.0 {
        sigs.push(Signal::hit(format!("RSI {:.1}", ind.rsi_now)));
    } else if ind.rsi_now < 20.0 {
        sigs.push(Signal::warn(format!("RSI {:.1}", ind.rsi_now)));
    } else {
        sigs.push(Signal::miss(format!("RSI {:.1}", ind.rsi_now)));
    }

    // 3. RSI momentum (falling)
    if !ind.rsi_rising {
        sigs.push(Signal::hit("RSI Falling"));
    } else {
        sigs.push(Signal::miss("RSI Rising"));
    }

    // 4. Volume surge (shared threshold)
    sigs.push(volume_signal(ind));

    // 5. Short-horizon trend
    if ind.ema9 < ind.ema21 {
        sigs.push(Signal::hit("Trend BEAR"));
    } else {
        sigs.push(Signal::miss("Trend BULL"));
    }

    // 6. MACD sign
    if ind.macd < 0.0 {
        sigs.push(Signal::hit("MACD-"));
    } else {
        sigs.push(Signal::miss("MACD+"));
    }

    // 7. Bollinger position: deep in the upper band is a short entry, near
    //    the lower band is an oversold warn
    let pct = ind.bb_pos * 100.0;
    if ind.bb_pos > 0.65 {
        sigs.push(Signal::hit(format!("BB Upper ({pct:.0}%)")));
    } else if ind.bb_pos < 0.2 {
        sigs.push(Signal::warn(format!("BB Lower ({pct:.0}%)")));
    } else {
        sigs.push(Signal::miss(format!("BB Mid ({pct:.0}%)")));
    }

    // 8. ATR risk/reward (shared threshold)
    sigs.push(atr_rr_signal(ind));

    // 9. VWAP side
    if ind.vwap > 0.0 && ind.price < ind.vwap {
        sigs.push(Signal::hit("Below VWAP"));
    } else if ind.price < ind.vwap {
        sigs.push(Signal::miss("Below VWAP"));
    } else {
        sigs.push(Signal::miss("Above VWAP"));
    }

    // 10. Red candle run
    sigs.push(run_signal(ind.red_run, "Red"));

    (count_hits(&sigs), sigs)
}

// =============================================================================
// Shared rules
// =============================================================================

fn volume_signal(ind: &IndicatorSet) -> Signal {
    let label = format!("Vol {:.2}x", ind.vol_ratio);
    if ind.vol_ratio >= VOL_SURGE_RATIO {
        Signal::hit(label)
    } else {
        Signal::miss(label)
    }
}

fn atr_rr_signal(ind: &IndicatorSet) -> Signal {
    if ind.atr_rr >= 1.0 {
        Signal::hit("ATR RR >=1:1")
    } else {
        Signal::miss("ATR RR <1:1")
    }
}

fn run_signal(run: usize, colour: &str) -> Signal {
    if run >= RUN_LEN {
        Signal::hit(format!("{run} {colour} Candles"))
    } else if run == 0 {
        Signal::miss(format!("No {colour} Run"))
    } else {
        Signal::miss(format!("{run} {colour}"))
    }
}

fn count_hits(sigs: &[Signal]) -> u8 {
    sigs.iter().filter(|s| s.is_hit()).count() as u8
}
