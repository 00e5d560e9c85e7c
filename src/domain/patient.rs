//! Patient input snapshot
//!
//! A [`PatientInput`] holds the raw facts entered for one patient at one
//! point in time. It carries no derived values; everything is recomputed
//! from it by [`crate::core::assessment::Assessment::evaluate`].

use super::comorbidity::{Comorbidity, ComorbiditySet};
use super::danger::DangerSign;
use super::errors::PrenatalError;
use super::obstetric::{resolve_count, ObstetricRecord, ObstetricScore, RawCount};
use super::result::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Raw patient facts
///
/// # Examples
///
/// ```
/// use prenatrack::domain::patient::PatientInputBuilder;
/// use prenatrack::domain::comorbidity::Comorbidity;
/// use chrono::NaiveDate;
///
/// let patient = PatientInputBuilder::new()
///     .lmp(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .gravidity(1)
///     .parity(0)
///     .comorbidity(Comorbidity::RhNegative)
///     .build()
///     .unwrap();
///
/// assert_eq!(patient.obstetric.notation().as_deref(), Some("G1P0 (0-0-0-0)"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PatientRecord")]
pub struct PatientInput {
    /// Date of birth
    pub birth_date: Option<NaiveDate>,

    /// First day of the last menstrual period
    pub lmp: Option<NaiveDate>,

    /// Date the dating ultrasound was performed
    pub utz_date: Option<NaiveDate>,

    /// Completed weeks reported by the ultrasound
    pub utz_weeks: Option<u32>,

    /// Extra days on top of `utz_weeks` (0-6)
    pub utz_days: Option<u32>,

    /// GTPAL obstetric score
    pub obstetric: ObstetricScore,

    pub comorbidities: ComorbiditySet,

    /// Danger signs flagged at this visit
    pub danger_signs: BTreeSet<DangerSign>,
}

/// File form of [`PatientInput`], with counts still raw
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PatientRecord {
    birth_date: Option<NaiveDate>,
    lmp: Option<NaiveDate>,
    utz_date: Option<NaiveDate>,
    utz_weeks: Option<RawCount>,
    utz_days: Option<RawCount>,
    obstetric: ObstetricRecord,
    comorbidities: ComorbiditySet,
    danger_signs: BTreeSet<DangerSign>,
}

impl TryFrom<PatientRecord> for PatientInput {
    type Error = PrenatalError;

    fn try_from(record: PatientRecord) -> Result<Self> {
        Ok(Self {
            birth_date: record.birth_date,
            lmp: record.lmp,
            utz_date: record.utz_date,
            utz_weeks: resolve_count(record.utz_weeks, "utz_weeks")?,
            utz_days: resolve_count(record.utz_days, "utz_days")?,
            obstetric: ObstetricScore::try_from(record.obstetric)?,
            comorbidities: record.comorbidities,
            danger_signs: record.danger_signs,
        })
    }
}

impl PatientInput {
    /// Creates a new builder for constructing a PatientInput
    pub fn builder() -> PatientInputBuilder {
        PatientInputBuilder::default()
    }

    /// Checks the snapshot for values no form could legitimately produce
    ///
    /// # Errors
    ///
    /// Returns [`PrenatalError::Validation`] if `utz_days` is above 6.
    pub fn validate(&self) -> Result<()> {
        if let Some(days) = self.utz_days {
            if days > 6 {
                return Err(PrenatalError::Validation(format!(
                    "utz_days must be between 0 and 6, got {days}"
                )));
            }
        }
        Ok(())
    }
}

/// Loads a patient snapshot from a TOML or JSON file
///
/// The format is chosen by extension: `.json` is parsed as JSON, anything
/// else as TOML.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or fails
/// [`PatientInput::validate`].
pub fn load_patient(path: impl AsRef<Path>) -> Result<PatientInput> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        PrenatalError::Io(format!(
            "Failed to read patient file {}: {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    // Counts are resolved after parsing so a bad one is reported by field name
    let record: PatientRecord = if is_json {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents)?
    };
    let patient = PatientInput::try_from(record)?;

    patient.validate()?;

    tracing::debug!(
        path = %path.display(),
        comorbidities = patient.comorbidities.len(),
        danger_signs = patient.danger_signs.len(),
        "Loaded patient file"
    );

    Ok(patient)
}

/// Builder for constructing PatientInput instances
#[derive(Debug, Default)]
pub struct PatientInputBuilder {
    input: PatientInput,
}

impl PatientInputBuilder {
    /// Creates a new PatientInputBuilder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.input.birth_date = Some(date);
        self
    }

    pub fn lmp(mut self, date: NaiveDate) -> Self {
        self.input.lmp = Some(date);
        self
    }

    /// Sets the dating ultrasound: scan date and gestational age at scan
    pub fn ultrasound(mut self, date: NaiveDate, weeks: u32, days: u32) -> Self {
        self.input.utz_date = Some(date);
        self.input.utz_weeks = Some(weeks);
        self.input.utz_days = Some(days);
        self
    }

    pub fn gravidity(mut self, gravidity: u32) -> Self {
        self.input.obstetric.gravidity = Some(gravidity);
        self
    }

    pub fn parity(mut self, parity: u32) -> Self {
        self.input.obstetric.parity = Some(parity);
        self
    }

    /// Replaces the whole obstetric score
    pub fn obstetric(mut self, score: ObstetricScore) -> Self {
        self.input.obstetric = score;
        self
    }

    pub fn comorbidity(mut self, comorbidity: Comorbidity) -> Self {
        self.input.comorbidities.insert(comorbidity);
        self
    }

    pub fn comorbidities(mut self, comorbidities: impl IntoIterator<Item = Comorbidity>) -> Self {
        for c in comorbidities {
            self.input.comorbidities.insert(c);
        }
        self
    }

    pub fn danger_sign(mut self, sign: DangerSign) -> Self {
        self.input.danger_signs.insert(sign);
        self
    }

    /// Builds the PatientInput
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot fails [`PatientInput::validate`]
    pub fn build(self) -> Result<PatientInput> {
        self.input.validate()?;
        Ok(self.input)
    }
}
