// =============================================================================
// Series Preprocessor
// =============================================================================
//
// Splits a candle series into the parallel numeric arrays the indicator
// library consumes. Pure extraction, no validation: non-numeric or missing
// candle fields are a data-quality concern handled upstream by the candle
// source.

use crate::market_data::Candle;

/// Parallel per-field arrays extracted from one candle series, plus the
/// last close as the reference price.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub vols: Vec<f64>,
    /// Bucket open times, carried through for charting.
    pub times: Vec<i64>,
    /// The most recent close; 0.0 for an empty series.
    pub price: f64,
}

impl PriceSeries {
    pub fn from_candles(candles: &[Candle]) -> Self {
        Self {
            closes: candles.iter().map(|c| c.close).collect(),
            highs: candles.iter().map(|c| c.high).collect(),
            lows: candles.iter().map(|c| c.low).collect(),
            vols: candles.iter().map(|c| c.volume).collect(),
            times: candles.iter().map(|c| c.open_time).collect(),
            price: candles.last().map_or(0.0, |c| c.close),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles() -> Vec<Candle> {
        (0..5)
            .map(|i| Candle {
                open_time: i as i64 * 60_000,
                open: 100.0 + i as f64,
                high: 101.0 + i as f64,
                low: 99.0 + i as f64,
                close: 100.5 + i as f64,
                volume: 1000.0 + i as f64,
            })
            .collect()
    }

    #[test]
    fn arrays_are_parallel() {
        let series = PriceSeries::from_candles(&candles());
        assert_eq!(series.closes.len(), 5);
        assert_eq!(series.highs.len(), 5);
        assert_eq!(series.lows.len(), 5);
        assert_eq!(series.vols.len(), 5);
        assert_eq!(series.times.len(), 5);
        assert!((series.closes[2] - 102.5).abs() < 1e-12);
        assert!((series.vols[4] - 1004.0).abs() < 1e-12);
        assert_eq!(series.times[1], 60_000);
    }

    #[test]
    fn price_is_last_close() {
        let series = PriceSeries::from_candles(&candles());
        assert!((series.price - 104.5).abs() < 1e-12);
    }

    #[test]
    fn empty_series_defaults_price_to_zero() {
        let series = PriceSeries::from_candles(&[]);
        assert!(series.closes.is_empty());
        assert_eq!(series.price, 0.0);
    }
}
