//! Comorbidity reference table
//!
//! Comorbidities form a closed enumeration. Declaration order is the
//! reference table order, and `Ord` follows it, so a [`ComorbiditySet`]
//! iterates (and reports labels) in table order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Maternal comorbidity or obstetric history flag
///
/// Serialized with descriptive snake_case ids. The short
/// clinic ids (`cht`, `gdm`, `rh_neg`, ...) are accepted as
/// aliases when parsing.
///
/// # Examples
///
/// ```
/// use prenatrack::domain::comorbidity::Comorbidity;
/// use std::str::FromStr;
///
/// let c = Comorbidity::from_str("rh_neg").unwrap();
/// assert_eq!(c, Comorbidity::RhNegative);
/// assert_eq!(c.id(), "rh_negative");
/// assert_eq!(c.label(), "Rh-negative");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comorbidity {
    #[serde(alias = "cht")]
    ChronicHypertension,
    #[serde(alias = "gdm")]
    GestationalDiabetes,
    #[serde(alias = "pdm")]
    PregestationalDiabetes,
    #[serde(alias = "thyroid")]
    ThyroidDisorder,
    Asthma,
    Anemia,
    #[serde(alias = "uti_recurrent")]
    RecurrentUti,
    #[serde(alias = "cardiac")]
    CardiacDisease,
    Epilepsy,
    #[serde(alias = "tb")]
    Tuberculosis,
    Hiv,
    HepatitisB,
    Sle,
    Obesity,
    #[serde(alias = "prev_cs")]
    PreviousCesarean,
    #[serde(alias = "prev_preeclampsia")]
    PreviousPreeclampsia,
    #[serde(alias = "prev_preterm")]
    PreviousPreterm,
    #[serde(alias = "prev_stillbirth")]
    PreviousStillbirth,
    #[serde(alias = "rh_neg")]
    RhNegative,
    MultipleGestation,
}

impl Comorbidity {
    /// Every comorbidity, in reference table order
    pub const ALL: [Comorbidity; 20] = [
        Comorbidity::ChronicHypertension,
        Comorbidity::GestationalDiabetes,
        Comorbidity::PregestationalDiabetes,
        Comorbidity::ThyroidDisorder,
        Comorbidity::Asthma,
        Comorbidity::Anemia,
        Comorbidity::RecurrentUti,
        Comorbidity::CardiacDisease,
        Comorbidity::Epilepsy,
        Comorbidity::Tuberculosis,
        Comorbidity::Hiv,
        Comorbidity::HepatitisB,
        Comorbidity::Sle,
        Comorbidity::Obesity,
        Comorbidity::PreviousCesarean,
        Comorbidity::PreviousPreeclampsia,
        Comorbidity::PreviousPreterm,
        Comorbidity::PreviousStillbirth,
        Comorbidity::RhNegative,
        Comorbidity::MultipleGestation,
    ];

    /// Stable identifier used in patient files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Self::ChronicHypertension => "chronic_hypertension",
            Self::GestationalDiabetes => "gestational_diabetes",
            Self::PregestationalDiabetes => "pregestational_diabetes",
            Self::ThyroidDisorder => "thyroid_disorder",
            Self::Asthma => "asthma",
            Self::Anemia => "anemia",
            Self::RecurrentUti => "recurrent_uti",
            Self::CardiacDisease => "cardiac_disease",
            Self::Epilepsy => "epilepsy",
            Self::Tuberculosis => "tuberculosis",
            Self::Hiv => "hiv",
            Self::HepatitisB => "hepatitis_b",
            Self::Sle => "sle",
            Self::Obesity => "obesity",
            Self::PreviousCesarean => "previous_cesarean",
            Self::PreviousPreeclampsia => "previous_preeclampsia",
            Self::PreviousPreterm => "previous_preterm",
            Self::PreviousStillbirth => "previous_stillbirth",
            Self::RhNegative => "rh_negative",
            Self::MultipleGestation => "multiple_gestation",
        }
    }

    /// Short identifier from the reference table
    pub fn short_id(&self) -> &'static str {
        match self {
            Self::ChronicHypertension => "cht",
            Self::GestationalDiabetes => "gdm",
            Self::PregestationalDiabetes => "pdm",
            Self::ThyroidDisorder => "thyroid",
            Self::Asthma => "asthma",
            Self::Anemia => "anemia",
            Self::RecurrentUti => "uti_recurrent",
            Self::CardiacDisease => "cardiac",
            Self::Epilepsy => "epilepsy",
            Self::Tuberculosis => "tb",
            Self::Hiv => "hiv",
            Self::HepatitisB => "hepatitis_b",
            Self::Sle => "sle",
            Self::Obesity => "obesity",
            Self::PreviousCesarean => "prev_cs",
            Self::PreviousPreeclampsia => "prev_preeclampsia",
            Self::PreviousPreterm => "prev_preterm",
            Self::PreviousStillbirth => "prev_stillbirth",
            Self::RhNegative => "rh_neg",
            Self::MultipleGestation => "multiple_gestation",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ChronicHypertension => "Chronic Hypertension",
            Self::GestationalDiabetes => "Gestational Diabetes",
            Self::PregestationalDiabetes => "Pre-gestational DM (Type 1/2)",
            Self::ThyroidDisorder => "Thyroid disorder",
            Self::Asthma => "Bronchial Asthma",
            Self::Anemia => "Anemia",
            Self::RecurrentUti => "Recurrent UTI",
            Self::CardiacDisease => "Cardiac disease",
            Self::Epilepsy => "Epilepsy",
            Self::Tuberculosis => "Pulmonary TB",
            Self::Hiv => "HIV/AIDS",
            Self::HepatitisB => "Hepatitis B",
            Self::Sle => "SLE / Autoimmune",
            Self::Obesity => "Obesity (BMI ≥30)",
            Self::PreviousCesarean => "Previous Cesarean Section",
            Self::PreviousPreeclampsia => "Previous Preeclampsia",
            Self::PreviousPreterm => "Previous Preterm Delivery",
            Self::PreviousStillbirth => "Previous Stillbirth/IUFD",
            Self::RhNegative => "Rh-negative",
            Self::MultipleGestation => "Multiple Gestation",
        }
    }
}

impl fmt::Display for Comorbidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Comorbidity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id() == needle || c.short_id() == needle)
            .ok_or_else(|| format!("Unknown comorbidity '{}'", s.trim()))
    }
}

/// Set of comorbidities present for one patient
///
/// Membership only: a flag is either present or not, so a rule keyed on a
/// comorbidity can fire at most once per evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComorbiditySet(BTreeSet<Comorbidity>);

impl ComorbiditySet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a comorbidity, returning whether it was newly inserted
    pub fn insert(&mut self, comorbidity: Comorbidity) -> bool {
        self.0.insert(comorbidity)
    }

    /// Removes a comorbidity, returning whether it was present
    pub fn remove(&mut self, comorbidity: Comorbidity) -> bool {
        self.0.remove(&comorbidity)
    }

    /// Whether the comorbidity is present
    pub fn contains(&self, comorbidity: Comorbidity) -> bool {
        self.0.contains(&comorbidity)
    }

    /// Whether any of the listed comorbidities is present
    pub fn contains_any(&self, comorbidities: &[Comorbidity]) -> bool {
        comorbidities.iter().any(|c| self.0.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates in reference table order
    pub fn iter(&self) -> impl Iterator<Item = Comorbidity> + '_ {
        self.0.iter().copied()
    }

    /// Display labels in reference table order
    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|c| c.label()).collect()
    }
}

impl FromIterator<Comorbidity> for ComorbiditySet {
    fn from_iter<I: IntoIterator<Item = Comorbidity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Comorbidity; N]> for ComorbiditySet {
    fn from(items: [Comorbidity; N]) -> Self {
        items.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_both_ids() {
        assert_eq!(
            Comorbidity::from_str("chronic_hypertension").unwrap(),
            Comorbidity::ChronicHypertension
        );
        assert_eq!(
            Comorbidity::from_str("cht").unwrap(),
            Comorbidity::ChronicHypertension
        );
        assert_eq!(
            Comorbidity::from_str(" PREV_CS ").unwrap(),
            Comorbidity::PreviousCesarean
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = Comorbidity::from_str("gout").unwrap_err();
        assert!(err.contains("gout"));
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: BTreeSet<&str> = Comorbidity::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), Comorbidity::ALL.len());
        let short: BTreeSet<&str> = Comorbidity::ALL.iter().map(|c| c.short_id()).collect();
        assert_eq!(short.len(), Comorbidity::ALL.len());
    }

    #[test]
    fn test_id_round_trips_through_from_str() {
        for c in Comorbidity::ALL {
            assert_eq!(Comorbidity::from_str(c.id()).unwrap(), c);
            assert_eq!(Comorbidity::from_str(c.short_id()).unwrap(), c);
        }
    }

    #[test]
    fn test_serde_aliases() {
        let set: ComorbiditySet =
            serde_json::from_str(r#"["rh_neg", "gestational_diabetes", "cht"]"#).unwrap();
        assert!(set.contains(Comorbidity::RhNegative));
        assert!(set.contains(Comorbidity::GestationalDiabetes));
        assert!(set.contains(Comorbidity::ChronicHypertension));

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"["chronic_hypertension","gestational_diabetes","rh_negative"]"#
        );
    }

    #[test]
    fn test_set_iterates_in_table_order() {
        let set = ComorbiditySet::from([
            Comorbidity::MultipleGestation,
            Comorbidity::Anemia,
            Comorbidity::ChronicHypertension,
        ]);
        assert_eq!(
            set.labels(),
            vec!["Chronic Hypertension", "Anemia", "Multiple Gestation"]
        );
    }

    #[test]
    fn test_set_membership_is_idempotent() {
        let mut set = ComorbiditySet::new();
        assert!(set.insert(Comorbidity::Hiv));
        assert!(!set.insert(Comorbidity::Hiv));
        assert_eq!(set.len(), 1);
        assert!(set.contains_any(&[Comorbidity::Sle, Comorbidity::Hiv]));
        assert!(set.remove(Comorbidity::Hiv));
        assert!(set.is_empty());
    }
}
