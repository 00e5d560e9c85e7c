//! Gestational age value types

use super::errors::PrenatalError;
use super::result::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Gestational age expressed in whole days, with the week/day split
///
/// Spans are non-negative by construction; a negative span is not an
/// estimate at all and is represented by `None` at the call site.
///
/// # Examples
///
/// ```
/// use prenatrack::domain::estimate::AgeEstimate;
///
/// let aog = AgeEstimate::from_days(93);
/// assert_eq!(aog.weeks, 13);
/// assert_eq!(aog.days, 2);
/// assert_eq!(aog.to_string(), "13w 2d");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgeEstimate {
    /// Total elapsed days
    pub total_days: u32,

    /// Completed weeks (`total_days / 7`)
    pub weeks: u32,

    /// Remaining days (`total_days % 7`)
    pub days: u32,
}

impl AgeEstimate {
    /// Creates an estimate from a total day count
    pub fn from_days(total_days: u32) -> Self {
        Self {
            total_days,
            weeks: total_days / 7,
            days: total_days % 7,
        }
    }

    /// Converts a signed day span, rejecting negative spans
    pub fn from_signed_days(total_days: i64) -> Option<Self> {
        u32::try_from(total_days).ok().map(Self::from_days)
    }
}

impl fmt::Display for AgeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}w {}d", self.weeks, self.days)
    }
}

/// Which dating source a reconciled estimate came from
///
/// Serializes as its provenance tag, e.g. `"UTZ (discrepancy > 5d)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AogSource {
    /// Only an LMP estimate was available
    Lmp,

    /// Only an ultrasound estimate was available
    Utz,

    /// Both were available and their difference exceeded the threshold
    UtzDiscrepancy { threshold_days: u32 },

    /// Both were available and agreed within the threshold
    LmpConcordant,
}

impl AogSource {
    /// Whether the selected estimate is ultrasound-based
    pub fn is_ultrasound(&self) -> bool {
        matches!(self, Self::Utz | Self::UtzDiscrepancy { .. })
    }
}

const DISCREPANCY_PREFIX: &str = "UTZ (discrepancy > ";

impl FromStr for AogSource {
    type Err = PrenatalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LMP" => Ok(Self::Lmp),
            "UTZ" => Ok(Self::Utz),
            "LMP (concordant with UTZ)" => Ok(Self::LmpConcordant),
            other => other
                .strip_prefix(DISCREPANCY_PREFIX)
                .and_then(|rest| rest.strip_suffix("d)"))
                .and_then(|n| n.parse().ok())
                .map(|threshold_days| Self::UtzDiscrepancy { threshold_days })
                .ok_or_else(|| PrenatalError::invalid_input("aog_source", s)),
        }
    }
}

impl Serialize for AogSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AogSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for AogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lmp => write!(f, "LMP"),
            Self::Utz => write!(f, "UTZ"),
            Self::UtzDiscrepancy { threshold_days } => {
                write!(f, "{DISCREPANCY_PREFIX}{threshold_days}d)")
            }
            Self::LmpConcordant => write!(f, "LMP (concordant with UTZ)"),
        }
    }
}

/// Authoritative gestational age with provenance
///
/// Only produced by [`crate::core::reconcile::reconcile_aog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestAog {
    pub estimate: AgeEstimate,
    pub source: AogSource,
}

impl BestAog {
    pub fn weeks(&self) -> u32 {
        self.estimate.weeks
    }

    pub fn days(&self) -> u32 {
        self.estimate.days
    }

    pub fn total_days(&self) -> u32 {
        self.estimate.total_days
    }
}

impl fmt::Display for BestAog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.estimate, self.source)
    }
}

/// Pregnancy trimester, serialized as `First` / `Second` / `Third`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "First"),
            Self::Second => write!(f, "Second"),
            Self::Third => write!(f, "Third"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_days_splits_weeks() {
        let aog = AgeEstimate::from_days(0);
        assert_eq!((aog.weeks, aog.days), (0, 0));

        let aog = AgeEstimate::from_days(91);
        assert_eq!((aog.weeks, aog.days), (13, 0));

        let aog = AgeEstimate::from_days(286);
        assert_eq!((aog.weeks, aog.days), (40, 6));
    }

    #[test]
    fn test_from_signed_days_rejects_negative() {
        assert!(AgeEstimate::from_signed_days(-1).is_none());
        assert_eq!(
            AgeEstimate::from_signed_days(15),
            Some(AgeEstimate::from_days(15))
        );
    }

    #[test]
    fn test_source_display() {
        assert_eq!(AogSource::Lmp.to_string(), "LMP");
        assert_eq!(AogSource::Utz.to_string(), "UTZ");
        assert_eq!(
            AogSource::UtzDiscrepancy { threshold_days: 7 }.to_string(),
            "UTZ (discrepancy > 7d)"
        );
        assert_eq!(
            AogSource::LmpConcordant.to_string(),
            "LMP (concordant with UTZ)"
        );
    }

    #[test]
    fn test_source_serializes_as_tag() {
        let json = serde_json::to_string(&AogSource::UtzDiscrepancy { threshold_days: 14 }).unwrap();
        assert_eq!(json, r#""UTZ (discrepancy > 14d)""#);
        assert_eq!(
            serde_json::to_string(&AogSource::LmpConcordant).unwrap(),
            r#""LMP (concordant with UTZ)""#
        );
    }

    #[test]
    fn test_source_parses_tags() {
        for source in [
            AogSource::Lmp,
            AogSource::Utz,
            AogSource::LmpConcordant,
            AogSource::UtzDiscrepancy { threshold_days: 21 },
        ] {
            assert_eq!(source.to_string().parse::<AogSource>().unwrap(), source);
        }
        assert!("UTZ (discrepancy > xd)".parse::<AogSource>().is_err());
        assert!("lmp".parse::<AogSource>().is_err());
    }

    #[test]
    fn test_trimester_serializes_label() {
        assert_eq!(serde_json::to_string(&Trimester::Second).unwrap(), r#""Second""#);
    }

    #[test]
    fn test_concordant_source_is_not_ultrasound() {
        assert!(!AogSource::LmpConcordant.is_ultrasound());
        assert!(!AogSource::Lmp.is_ultrasound());
        assert!(AogSource::Utz.is_ultrasound());
        assert!(AogSource::UtzDiscrepancy { threshold_days: 5 }.is_ultrasound());
    }

    #[test]
    fn test_best_aog_display() {
        let best = BestAog {
            estimate: AgeEstimate::from_days(100),
            source: AogSource::LmpConcordant,
        };
        assert_eq!(best.to_string(), "14w 2d (LMP (concordant with UTZ))");
    }
}
