//! Obstetric score (GTPAL) and lenient count parsing
//!
//! Counts typed into a form arrive as text. The policy is:
//! - surrounding whitespace is ignored
//! - blank text means the count is absent
//! - a non-negative integer is accepted
//! - anything else is rejected with [`PrenatalError::InvalidInput`]

use super::errors::PrenatalError;
use super::result::Result;
use serde::{Deserialize, Serialize};

/// Parses a raw count field
///
/// # Examples
///
/// ```
/// use prenatrack::domain::obstetric::parse_count;
///
/// assert_eq!(parse_count("gravidity", "  ").unwrap(), None);
/// assert_eq!(parse_count("gravidity", " 3").unwrap(), Some(3));
/// assert!(parse_count("gravidity", "three").is_err());
/// assert!(parse_count("gravidity", "-1").is_err());
/// ```
pub fn parse_count(field: &str, raw: &str) -> Result<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| PrenatalError::invalid_input(field, raw))
}

/// A count as it appears in a patient file, before the lenient policy runs
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCount {
    Number(i64),
    Fraction(f64),
    Text(String),
}

impl RawCount {
    /// Applies the count policy, naming `field` on failure
    pub(crate) fn resolve(self, field: &str) -> Result<Option<u32>> {
        match self {
            RawCount::Number(n) => u32::try_from(n)
                .map(Some)
                .map_err(|_| PrenatalError::invalid_input(field, n.to_string())),
            RawCount::Fraction(n) => Err(PrenatalError::invalid_input(field, n.to_string())),
            RawCount::Text(s) => parse_count(field, &s),
        }
    }
}

pub(crate) fn resolve_count(raw: Option<RawCount>, field: &str) -> Result<Option<u32>> {
    raw.map_or(Ok(None), |r| r.resolve(field))
}

/// File form of [`ObstetricScore`]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ObstetricRecord {
    gravidity: Option<RawCount>,
    parity: Option<RawCount>,
    term: Option<RawCount>,
    preterm: Option<RawCount>,
    abortion: Option<RawCount>,
    living: Option<RawCount>,
}

impl TryFrom<ObstetricRecord> for ObstetricScore {
    type Error = PrenatalError;

    fn try_from(record: ObstetricRecord) -> Result<Self> {
        Ok(Self {
            gravidity: resolve_count(record.gravidity, "gravidity")?,
            parity: resolve_count(record.parity, "parity")?,
            term: resolve_count(record.term, "term")?,
            preterm: resolve_count(record.preterm, "preterm")?,
            abortion: resolve_count(record.abortion, "abortion")?,
            living: resolve_count(record.living, "living")?,
        })
    }
}

/// Gravidity/parity with the term/preterm/abortion/living breakdown
///
/// Deserializes from integers or strings under the lenient count policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ObstetricRecord")]
pub struct ObstetricScore {
    pub gravidity: Option<u32>,
    pub parity: Option<u32>,
    pub term: Option<u32>,
    pub preterm: Option<u32>,
    pub abortion: Option<u32>,
    pub living: Option<u32>,
}

impl ObstetricScore {
    /// Parses all six components from raw text fields (G, P, T, P, A, L)
    pub fn parse(
        gravidity: &str,
        parity: &str,
        term: &str,
        preterm: &str,
        abortion: &str,
        living: &str,
    ) -> Result<Self> {
        Ok(Self {
            gravidity: parse_count("gravidity", gravidity)?,
            parity: parse_count("parity", parity)?,
            term: parse_count("term", term)?,
            preterm: parse_count("preterm", preterm)?,
            abortion: parse_count("abortion", abortion)?,
            living: parse_count("living", living)?,
        })
    }

    /// Renders `G{g}P{p} ({t}-{pt}-{a}-{l})`
    ///
    /// Absent components after gravidity render as 0. Without gravidity
    /// there is no score to show.
    pub fn notation(&self) -> Option<String> {
        let gravidity = self.gravidity?;
        Some(format!(
            "G{}P{} ({}-{}-{}-{})",
            gravidity,
            self.parity.unwrap_or(0),
            self.term.unwrap_or(0),
            self.preterm.unwrap_or(0),
            self.abortion.unwrap_or(0),
            self.living.unwrap_or(0),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_policy() {
        assert_eq!(parse_count("parity", "").unwrap(), None);
        assert_eq!(parse_count("parity", "0").unwrap(), Some(0));
        assert_eq!(parse_count("parity", "\t2\n").unwrap(), Some(2));
        assert!(parse_count("parity", "1.5").is_err());
        assert!(parse_count("parity", "NaN").is_err());
    }

    #[test]
    fn test_parse_count_error_names_field() {
        let err = parse_count("utz_weeks", "abc").unwrap_err();
        assert!(err.to_string().contains("utz_weeks"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_notation() {
        let score = ObstetricScore::parse("3", "2", "1", "1", "0", "2").unwrap();
        assert_eq!(score.notation().as_deref(), Some("G3P2 (1-1-0-2)"));
    }

    #[test]
    fn test_notation_defaults_missing_components() {
        let score = ObstetricScore::parse("1", "", "", "", "", "").unwrap();
        assert_eq!(score.notation().as_deref(), Some("G1P0 (0-0-0-0)"));
    }

    #[test]
    fn test_notation_requires_gravidity() {
        let score = ObstetricScore::parse("", "2", "", "", "", "").unwrap();
        assert_eq!(score.notation(), None);
    }

    #[test]
    fn test_deserialize_integers_and_strings() {
        let score: ObstetricScore =
            serde_json::from_str(r#"{"gravidity": 2, "parity": "1", "term": ""}"#).unwrap();
        assert_eq!(score.gravidity, Some(2));
        assert_eq!(score.parity, Some(1));
        assert_eq!(score.term, None);
        assert_eq!(score.living, None);
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<ObstetricScore>(r#"{"gravidity": "two"}"#).is_err());
        assert!(serde_json::from_str::<ObstetricScore>(r#"{"gravidity": -2}"#).is_err());
        assert!(serde_json::from_str::<ObstetricScore>(r#"{"gravidity": 1.5}"#).is_err());
    }

    #[test]
    fn test_record_error_names_field() {
        let record: ObstetricRecord =
            serde_json::from_str(r#"{"gravidity": 2, "parity": "two"}"#).unwrap();
        let err = ObstetricScore::try_from(record).unwrap_err();
        assert!(matches!(
            &err,
            PrenatalError::InvalidInput { field, value } if field == "parity" && value == "two"
        ));
    }

    #[test]
    fn test_record_negative_number_names_field() {
        let record: ObstetricRecord = serde_json::from_str(r#"{"living": -1}"#).unwrap();
        let err = ObstetricScore::try_from(record).unwrap_err();
        assert!(matches!(
            &err,
            PrenatalError::InvalidInput { field, .. } if field == "living"
        ));
    }
}
