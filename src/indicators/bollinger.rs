// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = SMA over the trailing `period` closes; upper/lower bands sit
// `mult` population standard deviations away. The scorer consumes the bands
// through `band_position`, the price's normalized position inside them.

use serde::{Deserialize, Serialize};

/// Bollinger envelope around the trailing SMA.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Calculate Bollinger Bands over the trailing `period` closes.
///
/// Uses the population standard deviation (divide by n). An empty window
/// yields an all-zero envelope; callers keep that path out of scoring by
/// enforcing the series minimum upstream.
pub fn bollinger(closes: &[f64], period: usize, mult: f64) -> BollingerBands {
    let window = &closes[closes.len().saturating_sub(period)..];
    if window.is_empty() {
        return BollingerBands {
            upper: 0.0,
            middle: 0.0,
            lower: 0.0,
        };
    }

    let n = window.len() as f64;
    let sma = window.iter().sum::<f64>() / n;
    let variance = window.iter().map(|c| (c - sma).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    BollingerBands {
        upper: sma + mult * std_dev,
        middle: sma,
        lower: sma - mult * std_dev,
    }
}

/// Normalized position of `price` inside the bands:
/// 0.0 at the lower band, 1.0 at the upper band.
///
/// A zero-width envelope (flat window) yields 0.5 rather than a division
/// fault.
pub fn band_position(price: f64, bands: &BollingerBands) -> f64 {
    let width = bands.upper - bands.lower;
    if width > 0.0 {
        (price - bands.lower) / width
    } else {
        0.5
    }
}
