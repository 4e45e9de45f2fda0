// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators behind the
// 10-signal scoring battery. Each function takes an explicit numeric slice
// sized to the lookback it needs: callers pass the smallest correct window
// per indicator so the exponential smoothing converges from the same
// deterministic seed every time (seed = first element of the slice). No
// state carries across calls.

pub mod atr;
pub mod bollinger;
pub mod candle_run;
pub mod ema;
pub mod rsi;
pub mod snapshot;
pub mod vwap;

pub use atr::atr;
pub use bollinger::{band_position, bollinger, BollingerBands};
pub use candle_run::{green_run, red_run};
pub use ema::{ema, ema_series};
pub use rsi::{rsi, rsi_series, RsiPoint};
pub use snapshot::IndicatorSet;
pub use vwap::vwap;
