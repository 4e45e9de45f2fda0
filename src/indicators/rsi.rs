// =============================================================================
// Relative Strength Index (RSI) — trailing-window average
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes on a bounded
// 0-100 scale.
//
//   gains  = sum of positive deltas over the trailing `period` closes
//   losses = sum of |negative deltas| over the same window
//   RS     = (gains / period) / (losses / period)
//   RSI    = 100 - 100 / (1 + RS), rounded to 1 decimal
//
// This is the plain trailing-window average, not Wilder's exponential
// smoothing: each call looks at exactly `period` deltas and nothing older,
// which keeps the value a pure function of the window passed in.
// =============================================================================

use serde::{Deserialize, Serialize};

/// RSI over the trailing `period` deltas of `closes`.
///
/// Fallbacks, not errors:
/// - fewer than `period + 1` closes => neutral 50.0
/// - zero losses in the window      => 100.0
pub fn rsi(closes: &[f64], period: usize) -> f64 {
    if closes.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in closes.len() - period..closes.len() {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gains += delta;
        } else {
            losses += delta.abs();
        }
    }

    if losses == 0.0 {
        return 100.0;
    }

    let period_f = period as f64;
    let rs = (gains / period_f) / (losses / period_f);
    ((100.0 - 100.0 / (1.0 + rs)) * 10.0).round() / 10.0
}

/// One point of an RSI series, indexed into the close array it came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiPoint {
    pub idx: usize,
    pub value: f64,
}

/// Sliding-window RSI series for charting: one value per index >= `period`,
/// each computed over the `period + 1` closes ending at that index.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<RsiPoint> {
    if closes.len() <= period {
        return Vec::new();
    }

    (period..closes.len())
        .map(|i| RsiPoint {
            idx: i,
            value: rsi(&closes[i - period..=i], period),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_insufficient_data_is_neutral() {
        // 14 closes give only 13 deltas for a 14-period window.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert_eq!(rsi(&closes, 14), 50.0);
        assert_eq!(rsi(&[], 14), 50.0);
    }

    #[test]
    fn rsi_all_gains_saturates_at_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        assert_eq!(rsi(&closes, 14), 100.0);
    }

    #[test]
    fn rsi_all_losses_is_zero() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        assert_eq!(rsi(&closes, 14), 0.0);
    }

    #[test]
    fn rsi_flat_market_hits_zero_loss_path() {
        // Zero deltas => losses == 0 => saturated 100, by the documented
        // fallback (the neutral-50 path only fires on short input).
        let closes = vec![100.0; 30];
        assert_eq!(rsi(&closes, 14), 100.0);
    }

    #[test]
    fn rsi_stays_in_range() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            44.18, 44.22, 44.57, 43.42, 42.66, 43.13, 44.01, 44.96,
        ];
        for window in closes.windows(15) {
            let v = rsi(window, 14);
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }

    #[test]
    fn rsi_rounds_to_one_decimal() {
        let closes = vec![
            100.0, 100.7, 100.3, 101.1, 100.9, 101.4, 101.2, 102.0, 101.8, 102.3, 102.1, 102.9,
            102.6, 103.2, 103.0,
        ];
        let v = rsi(&closes, 14);
        assert!(
            (v * 10.0 - (v * 10.0).round()).abs() < 1e-9,
            "RSI {v} not rounded to 1 decimal"
        );
    }

    #[test]
    fn rsi_series_one_point_per_index_from_period() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
        let series = rsi_series(&closes, 14);
        assert_eq!(series.len(), closes.len() - 14);
        assert_eq!(series[0].idx, 14);
        assert_eq!(series.last().unwrap().idx, closes.len() - 1);

        // Each point must agree with a direct call over its window.
        for p in &series {
            let expected = rsi(&closes[p.idx - 14..=p.idx], 14);
            assert!((p.value - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn rsi_series_empty_on_short_input() {
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(rsi_series(&closes, 14).is_empty());
    }
}
