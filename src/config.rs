// =============================================================================
// Scan Configuration — persisted watchlist and scan settings
// =============================================================================
//
// The explicit configuration object handed to the scan cycle: which symbols
// to watch and how to scan them. Persistence uses an atomic tmp + rename
// pattern to prevent corruption on crash, and every field carries a serde
// default so adding new fields never breaks loading an older config file.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_symbols() -> Vec<String> {
    [
        "BTCUSDT", "ETHUSDT", "SOLUSDT", "XRPUSDT", "BNBUSDT", "AVAXUSDT", "LINKUSDT", "DOGEUSDT",
        "LTCUSDT", "DOTUSDT",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_interval() -> String {
    "15m".to_string()
}

fn default_limit() -> usize {
    100
}

fn default_min_score() -> u8 {
    4
}

fn default_refresh_secs() -> u64 {
    60
}

// =============================================================================
// ScanConfig
// =============================================================================

/// Scan-cycle settings.
///
/// `interval` is an opaque label (`"5m"`, `"15m"`, `"1h"`, `"4h"`) forwarded
/// to the candle source unchanged; the scoring core performs no
/// interval-specific branching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Watchlist, as raw user-entered symbols.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Candle interval label, forwarded verbatim to the data provider.
    #[serde(default = "default_interval")]
    pub interval: String,

    /// Number of candles requested per symbol.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Results below this score are hidden from the default view.
    #[serde(default = "default_min_score")]
    pub min_score: u8,

    /// Seconds between scan cycles when running the rescan loop.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            interval: default_interval(),
            limit: default_limit(),
            min_score: default_min_score(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scan config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse scan config from {}", path.display()))?;

        info!(
            path = %path.display(),
            symbols = ?config.symbols,
            interval = %config.interval,
            "scan config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content =
            serde_json::to_string_pretty(self).context("failed to serialise scan config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "scan config saved (atomic)");
        Ok(())
    }

    /// Add a symbol to the watchlist; duplicates are ignored.
    pub fn add_symbol(&mut self, symbol: impl Into<String>) {
        let symbol = symbol.into();
        if !self.symbols.contains(&symbol) {
            self.symbols.push(symbol);
        }
    }

    /// Remove a symbol from the watchlist.
    pub fn remove_symbol(&mut self, symbol: &str) {
        self.symbols.retain(|s| s != symbol);
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.symbols.len(), 10);
        assert_eq!(cfg.symbols[0], "BTCUSDT");
        assert_eq!(cfg.symbols[9], "DOTUSDT");
        assert_eq!(cfg.interval, "15m");
        assert_eq!(cfg.limit, 100);
        assert_eq!(cfg.min_score, 4);
        assert_eq!(cfg.refresh_secs, 60);
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.symbols.len(), 10);
        assert_eq!(cfg.interval, "15m");
        assert_eq!(cfg.min_score, 4);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "interval": "1h", "symbols": ["ETHUSDT"] }"#;
        let cfg: ScanConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.interval, "1h");
        assert_eq!(cfg.symbols, vec!["ETHUSDT"]);
        assert_eq!(cfg.limit, 100);
        assert_eq!(cfg.refresh_secs, 60);
    }

    #[test]
    fn roundtrip_serialisation() {
        let mut cfg = ScanConfig::default();
        cfg.interval = "4h".to_string();
        cfg.min_score = 6;
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.symbols, cfg2.symbols);
        assert_eq!(cfg2.interval, "4h");
        assert_eq!(cfg2.min_score, 6);
    }

    #[test]
    fn watchlist_add_and_remove() {
        let mut cfg = ScanConfig::default();
        let before = cfg.symbols.len();

        cfg.add_symbol("ADAUSDT");
        assert_eq!(cfg.symbols.len(), before + 1);

        // Duplicate is a no-op.
        cfg.add_symbol("ADAUSDT");
        assert_eq!(cfg.symbols.len(), before + 1);

        cfg.remove_symbol("ADAUSDT");
        assert_eq!(cfg.symbols.len(), before);
        assert!(!cfg.symbols.iter().any(|s| s == "ADAUSDT"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("wavescan-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scan_config.json");

        let mut cfg = ScanConfig::default();
        cfg.symbols = vec!["BTCUSDT".to_string()];
        cfg.refresh_secs = 120;
        cfg.save(&path).unwrap();

        let loaded = ScanConfig::load(&path).unwrap();
        assert_eq!(loaded.symbols, vec!["BTCUSDT"]);
        assert_eq!(loaded.refresh_secs, 120);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(ScanConfig::load("/nonexistent/scan_config.json").is_err());
    }
}
