// =============================================================================
// Signals Module
// =============================================================================
//
// Maps one IndicatorSet to the fixed, ordered 10-signal battery — once for
// the long-side interpretation and once for the short side. Each signal is
// worth at most one point; warns preserve the flag without the point.

pub mod evaluator;

pub use evaluator::{evaluate_long, evaluate_short, SIGNALS_PER_SIDE};
