// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   k     = 2 / (period + 1)
//   EMA_t = close_t * k + EMA_{t-1} * (1 - k)
//
// The recursion is seeded with the first element of the slice. Callers pass
// a window sized to the period they want (e.g. the last 20 closes for a
// 9-period EMA) so the same window always smooths to the same value.
// =============================================================================

/// Final EMA value over the given slice.
///
/// An empty slice yields 0.0; the scan cycle's 30-candle minimum keeps that
/// path out of production scoring. `period` is assumed >= 1.
pub fn ema(data: &[f64], period: usize) -> f64 {
    let Some(&seed) = data.first() else {
        return 0.0;
    };

    let k = 2.0 / (period as f64 + 1.0);
    let mut e = seed;
    for &value in &data[1..] {
        e = value * k + e * (1.0 - k);
    }
    e
}

/// Full EMA sequence over the slice, one value per input element.
///
/// Used for charting; [`ema`] is the scoring-path variant that keeps only
/// the final value.
pub fn ema_series(data: &[f64], period: usize) -> Vec<f64> {
    let Some(&seed) = data.first() else {
        return Vec::new();
    };

    let k = 2.0 / (period as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len());
    result.push(seed);

    let mut e = seed;
    for &value in &data[1..] {
        e = value * k + e * (1.0 - k);
        result.push(e);
    }
    result
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_empty_input() {
        assert_eq!(ema(&[], 9), 0.0);
        assert!(ema_series(&[], 9).is_empty());
    }

    #[test]
    fn ema_single_element_is_seed() {
        assert!((ema(&[42.0], 9) - 42.0).abs() < 1e-12);
    }

    #[test]
    fn ema_known_values() {
        // period 3 => k = 0.5; seed 2.0
        // e1 = 4*0.5 + 2*0.5 = 3.0
        // e2 = 6*0.5 + 3*0.5 = 4.5
        let data = [2.0, 4.0, 6.0];
        assert!((ema(&data, 3) - 4.5).abs() < 1e-12);
    }

    #[test]
    fn ema_period_one_tracks_last_value() {
        // k = 1 => the EMA is just the most recent element.
        let data = [10.0, 20.0, 5.0, 42.0];
        assert!((ema(&data, 1) - 42.0).abs() < 1e-12);
    }

    #[test]
    fn ema_huge_period_forgets_nothing() {
        // k -> 0 => the seed dominates and the EMA stays near data[0].
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let e = ema(&data, 1_000_000);
        assert!((e - data[0]).abs() < 0.01, "expected ~{}, got {e}", data[0]);
    }

    #[test]
    fn ema_series_matches_final_value() {
        let data: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        let series = ema_series(&data, 9);
        assert_eq!(series.len(), data.len());
        assert!((series[0] - data[0]).abs() < 1e-12);
        assert!((series.last().unwrap() - ema(&data, 9)).abs() < 1e-12);
    }

    #[test]
    fn ema_rises_with_rising_input() {
        let data: Vec<f64> = (1..=30).map(|i| i as f64).collect();
        let series = ema_series(&data, 9);
        for pair in series.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
