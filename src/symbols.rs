// =============================================================================
// Symbol normalization & asset-class detection
// =============================================================================
//
// Raw user input ("btcusdt", "eurusd", "AAPL") is normalized into the form
// the data providers expect before any candles are fetched:
//
// - crypto: uppercased pair ending in a known quote asset, used verbatim
// - forex:  six-letter pair, fetched with a "=X" suffix, displayed without
// - stock:  everything else, used verbatim
//
// The scoring core never looks at the symbol again after this point.

use serde::{Deserialize, Serialize};

use crate::types::AssetClass;

/// Quote assets that mark a symbol as a crypto pair.
const CRYPTO_QUOTES: [&str; 5] = ["USDT", "BUSD", "BTCB", "ETHB", "BNB"];

/// A symbol in the three forms the system needs: the provider-facing fetch
/// symbol, the human-facing display symbol, and the detected asset class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSymbol {
    /// Symbol as sent to the data provider (forex carries the `=X` suffix).
    pub symbol: String,
    /// Symbol as shown in the UI (suffix stripped).
    pub display: String,
    pub asset_class: AssetClass,
}

/// Classify a raw symbol string.
///
/// A crypto pair must have a nonempty base before the quote asset, so a bare
/// `"USDT"` is not crypto. A forex pair is exactly six ASCII uppercase
/// letters, optionally already carrying the `=X` suffix. Anything else is
/// treated as a stock ticker.
pub fn detect_asset_class(raw: &str) -> AssetClass {
    let sym = raw.trim().to_uppercase();

    if CRYPTO_QUOTES
        .iter()
        .any(|q| sym.len() > q.len() && sym.ends_with(q))
    {
        return AssetClass::Crypto;
    }

    let base = sym.strip_suffix("=X").unwrap_or(&sym);
    if base.len() == 6 && base.bytes().all(|b| b.is_ascii_uppercase()) {
        return AssetClass::Forex;
    }

    AssetClass::Stock
}

/// Normalize a raw symbol into its fetch form, display form, and class.
pub fn normalize_symbol(raw: &str) -> NormalizedSymbol {
    let sym = raw.trim().to_uppercase();
    let asset_class = detect_asset_class(&sym);

    if asset_class == AssetClass::Forex && !sym.ends_with("=X") {
        return NormalizedSymbol {
            symbol: format!("{sym}=X"),
            display: sym,
            asset_class,
        };
    }

    NormalizedSymbol {
        display: sym.replace("=X", ""),
        symbol: sym,
        asset_class,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_crypto_pairs() {
        assert_eq!(detect_asset_class("BTCUSDT"), AssetClass::Crypto);
        assert_eq!(detect_asset_class("dogeusdt"), AssetClass::Crypto);
        assert_eq!(detect_asset_class("SOLBNB"), AssetClass::Crypto);
        assert_eq!(detect_asset_class("ETHBUSD"), AssetClass::Crypto);
    }

    #[test]
    fn bare_quote_asset_is_not_crypto() {
        // "USDT" alone has no base asset; it falls through to the stock rule.
        assert_eq!(detect_asset_class("USDT"), AssetClass::Stock);
        assert_eq!(detect_asset_class("BNB"), AssetClass::Stock);
    }

    #[test]
    fn detects_forex_pairs() {
        assert_eq!(detect_asset_class("EURUSD"), AssetClass::Forex);
        assert_eq!(detect_asset_class("GBPJPY=X"), AssetClass::Forex);
        assert_eq!(detect_asset_class("eurusd"), AssetClass::Forex);
    }

    #[test]
    fn everything_else_is_stock() {
        assert_eq!(detect_asset_class("AAPL"), AssetClass::Stock);
        assert_eq!(detect_asset_class("TSLA"), AssetClass::Stock);
        assert_eq!(detect_asset_class("BRK.B"), AssetClass::Stock);
    }

    #[test]
    fn forex_gains_fetch_suffix() {
        let norm = normalize_symbol("eurusd");
        assert_eq!(norm.symbol, "EURUSD=X");
        assert_eq!(norm.display, "EURUSD");
        assert_eq!(norm.asset_class, AssetClass::Forex);
    }

    #[test]
    fn forex_with_suffix_keeps_it() {
        let norm = normalize_symbol("GBPJPY=X");
        assert_eq!(norm.symbol, "GBPJPY=X");
        assert_eq!(norm.display, "GBPJPY");
    }

    #[test]
    fn crypto_and_stock_pass_through_uppercased() {
        let norm = normalize_symbol(" btcusdt ");
        assert_eq!(norm.symbol, "BTCUSDT");
        assert_eq!(norm.display, "BTCUSDT");
        assert_eq!(norm.asset_class, AssetClass::Crypto);

        let norm = normalize_symbol("aapl");
        assert_eq!(norm.symbol, "AAPL");
        assert_eq!(norm.display, "AAPL");
        assert_eq!(norm.asset_class, AssetClass::Stock);
    }
}
