use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted label length
pub const MAX_LABEL_LEN: usize = 64;

/// Discrete market regime tag produced by the upstream labeler.
///
/// The vocabulary is open: any upper-case `[A-Z0-9_]` tag is accepted, and the
/// ordering used for matrix rows is decided per matrix, never here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegimeLabel(String);

impl RegimeLabel {
    pub const LIQUIDITY_EXPANSION: &'static str = "LIQUIDITY_EXPANSION";
    pub const RISK_OFF_STRESS: &'static str = "RISK_OFF_STRESS";
    pub const TIGHTENING_USD_SUPPORTIVE: &'static str = "TIGHTENING_USD_SUPPORTIVE";

    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let s: String = value.into();
        let s = s.trim();
        if s.is_empty() {
            return Err("Regime label cannot be empty");
        }
        if s.len() > MAX_LABEL_LEN {
            return Err("Regime label too long (max 64 chars)");
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err("Regime label must be alphanumeric or underscore");
        }
        Ok(RegimeLabel(s.to_ascii_uppercase()))
    }

    pub fn liquidity_expansion() -> Self {
        RegimeLabel(Self::LIQUIDITY_EXPANSION.to_string())
    }

    pub fn risk_off_stress() -> Self {
        RegimeLabel(Self::RISK_OFF_STRESS.to_string())
    }

    pub fn tightening_usd_supportive() -> Self {
        RegimeLabel(Self::TIGHTENING_USD_SUPPORTIVE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RegimeLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for RegimeLabel {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        RegimeLabel::new(value)
    }
}

impl TryFrom<String> for RegimeLabel {
    type Error = &'static str;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        RegimeLabel::new(value)
    }
}

impl From<RegimeLabel> for String {
    fn from(label: RegimeLabel) -> Self {
        label.0
    }
}
