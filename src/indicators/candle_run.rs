// =============================================================================
// Consecutive Candle Runs
// =============================================================================
//
// Walks backward from the last candle counting consecutive same-direction
// bars. Only the tail streak counts: the first candle that breaks the
// pattern ends the run, and a doji (`close == open`) breaks both colours.

use crate::market_data::Candle;

/// Consecutive green candles (`close > open`) ending at the series tail.
pub fn green_run(candles: &[Candle]) -> usize {
    tail_run(candles, Candle::is_green)
}

/// Consecutive red candles (`close < open`) ending at the series tail.
pub fn red_run(candles: &[Candle]) -> usize {
    tail_run(candles, Candle::is_red)
}

fn tail_run(candles: &[Candle], matches: impl Fn(&Candle) -> bool) -> usize {
    candles.iter().rev().take_while(|c| matches(c)).count()
}
