pub mod candle;
pub mod series;

// Re-export for convenient access (e.g. `use crate::market_data::Candle`).
pub use candle::Candle;
pub use series::PriceSeries;
