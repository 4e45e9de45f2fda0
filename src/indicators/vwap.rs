// =============================================================================
// Volume-Weighted Average Price (VWAP)
// =============================================================================
//
// A single aggregate over the entire supplied window:
//
//   VWAP = sum(typicalPrice * volume) / sum(volume)
//
// Not a rolling or session-anchored VWAP. The window the caller passes IS
// the anchor.

use crate::market_data::Candle;

/// Aggregate VWAP of the window; 0.0 when total volume is zero.
pub fn vwap(candles: &[Candle]) -> f64 {
    let mut cum_tpv = 0.0;
    let mut cum_vol = 0.0;
    for c in candles {
        cum_tpv += c.typical_price() * c.volume;
        cum_vol += c.volume;
    }

    if cum_vol > 0.0 {
        cum_tpv / cum_vol
    } else {
        0.0
    }
}
