//! Rule engine outputs: risk entries, screening panels, supplements
//!
//! All three are immutable value objects rebuilt on every evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk level attached to a risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One identified risk factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub factor: String,
    pub level: RiskLevel,
}

impl RiskEntry {
    pub fn new(factor: impl Into<String>, level: RiskLevel) -> Self {
        Self {
            factor: factor.into(),
            level,
        }
    }
}

/// A group of tests recommended together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningPanel {
    pub category: String,
    pub timing: String,
    pub tests: Vec<String>,
}

impl ScreeningPanel {
    /// Whether the panel lists a test with exactly this text
    pub fn has_test(&self, test: &str) -> bool {
        self.tests.iter().any(|t| t == test)
    }
}

/// A supplement or prophylactic medication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementRecommendation {
    pub name: String,
    pub dose: String,
    pub timing: String,
    pub notes: String,
}
