// =============================================================================
// Shared types used across the Wavescan scoring engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// Broad instrument category. Determines which upstream data provider a
/// candle source should route the symbol to; the scoring core itself treats
/// every class identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Crypto,
    Forex,
    Stock,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crypto => write!(f, "crypto"),
            Self::Forex => write!(f, "forex"),
            Self::Stock => write!(f, "stock"),
        }
    }
}

/// Trade direction chosen by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Select the dominant direction from the two sub-scores.
    ///
    /// Ties resolve to `Long`. This is a documented tie-break, not an
    /// accidental default: a symmetric setup is reported from the long side.
    pub fn pick(long_score: u8, short_score: u8) -> Self {
        if long_score >= short_score {
            Self::Long
        } else {
            Self::Short
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

/// Tri-state outcome of a single scoring rule.
///
/// `Warn` scores zero points, same as `Miss`, but is preserved so the
/// dashboard can flag overbought/oversold conditions on an otherwise
/// passing setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalState {
    Hit,
    Warn,
    Miss,
}

/// One evaluated scoring rule, labelled with the values actually observed
/// (e.g. the RSI reading is embedded in the label, not just the threshold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub label: String,
    pub state: SignalState,
}

impl Signal {
    pub fn hit(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: SignalState::Hit,
        }
    }

    pub fn warn(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: SignalState::Warn,
        }
    }

    pub fn miss(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: SignalState::Miss,
        }
    }

    /// Whether this signal contributes a point to its side's score.
    pub fn is_hit(&self) -> bool {
        self.state == SignalState::Hit
    }
}

/// Named grade band derived from the winning direction's score.
///
/// Bands are closed-open intervals, inclusive on the lower bound only:
/// `>= 8` STRONG, `6..8` VALID, `4..6` WEAK, `< 4` SKIP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Strong,
    Valid,
    Weak,
    Skip,
}

impl Grade {
    /// Map a 0-10 score to its grade band.
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            Self::Strong
        } else if score >= 6 {
            Self::Valid
        } else if score >= 4 {
            Self::Weak
        } else {
            Self::Skip
        }
    }

    /// Display name shown in the grade column.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strong => "STRONG",
            Self::Valid => "VALID",
            Self::Weak => "WEAK",
            Self::Skip => "SKIP",
        }
    }

    /// CSS class the dashboard uses to colour the grade badge.
    pub fn class(self) -> &'static str {
        match self {
            Self::Strong => "fire",
            Self::Valid => "valid",
            Self::Weak => "weak",
            Self::Skip => "skip",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
