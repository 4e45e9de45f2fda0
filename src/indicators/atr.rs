// =============================================================================
// Average True Range (ATR) — trailing simple average
// =============================================================================
//
// True Range per bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR here is the arithmetic mean of the trailing `period` TR values, not
// Wilder's exponential smoothing. The simple average is kept for
// compatibility with the scored history this engine replaces.
// =============================================================================

use crate::market_data::Candle;

/// Mean of the trailing `period` true ranges.
///
/// Fewer than two candles produce no true range at all and yield 0.0; with
/// the 30-candle scan minimum this path never feeds production scoring.
pub fn atr(candles: &[Candle], period: usize) -> f64 {
    if candles.len() < 2 {
        return 0.0;
    }

    let mut trs: Vec<f64> = Vec::with_capacity(candles.len() - 1);
    for i in 1..candles.len() {
        let high = candles[i].high;
        let low = candles[i].low;
        let prev_close = candles[i - 1].close;

        let hl = high - low;
        let hc = (high - prev_close).abs();
        let lc = (low - prev_close).abs();
        trs.push(hl.max(hc).max(lc));
    }

    let window = &trs[trs.len().saturating_sub(period)..];
    if window.is_empty() {
        return 0.0;
    }
    window.iter().sum::<f64>() / window.len() as f64
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            open_time: 0,
            open,
            high,
            low,
            close,
            volume: 100.0,
        }
    }

    #[test]
    fn atr_constant_range() {
        // Every bar spans exactly 10 and closes mid-range, so TR == 10 and
        // the mean is exactly 10.
        let candles: Vec<Candle> = (0..30)
            .map(|_| candle(100.0, 105.0, 95.0, 100.0))
            .collect();
        assert!((atr(&candles, 14) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn atr_gap_uses_prev_close() {
        let candles = vec![
            candle(100.0, 105.0, 95.0, 95.0),
            // Gap up: |115 - 95| = 20 dominates the 7-point bar range.
            candle(110.0, 115.0, 108.0, 112.0),
        ];
        assert!((atr(&candles, 14) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn atr_trailing_window_only() {
        // 14 quiet bars after one violent bar: the violent TR falls outside
        // the trailing window and must not contaminate the average.
        let mut candles = vec![
            candle(100.0, 200.0, 50.0, 100.0),
            candle(100.0, 200.0, 50.0, 100.0),
        ];
        for _ in 0..14 {
            candles.push(candle(100.0, 101.0, 99.0, 100.0));
        }
        assert!((atr(&candles, 14) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn atr_short_series_degrades_to_available_bars() {
        let candles = vec![
            candle(100.0, 102.0, 98.0, 100.0),
            candle(100.0, 103.0, 97.0, 100.0),
            candle(100.0, 104.0, 96.0, 100.0),
        ];
        // Two TRs available (6 and 8), mean 7.
        assert!((atr(&candles, 14) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn atr_degenerate_inputs_yield_zero() {
        assert_eq!(atr(&[], 14), 0.0);
        assert_eq!(atr(&[candle(100.0, 101.0, 99.0, 100.0)], 14), 0.0);
        // period 0 leaves an empty trailing window.
        let candles = vec![
            candle(100.0, 101.0, 99.0, 100.0),
            candle(100.0, 101.0, 99.0, 100.0),
        ];
        assert_eq!(atr(&candles, 0), 0.0);
    }
}
