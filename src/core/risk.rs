//! Risk stratification
//!
//! Output order is fixed: the demographic rules first (age, then
//! gravidity/parity), then comorbidity-driven entries in table order. The
//! order is part of the contract and is not a severity sort.

use super::rules::{evaluate, ClinicalContext, Rule};
use crate::domain::{Comorbidity, ComorbiditySet, RiskEntry, RiskLevel};

static DEMOGRAPHIC_RULES: [Rule<RiskEntry>; 5] = [
    Rule {
        name: "adolescent",
        applies: |ctx| ctx.age_below(18),
        emit: |_| RiskEntry::new("Adolescent pregnancy (<18 years)", RiskLevel::High),
    },
    Rule {
        name: "advanced_maternal_age",
        applies: |ctx| ctx.age_at_least(35),
        emit: |_| RiskEntry::new("Advanced maternal age (≥35 years)", RiskLevel::Moderate),
    },
    Rule {
        name: "very_advanced_maternal_age",
        applies: |ctx| ctx.age_at_least(40),
        emit: |_| RiskEntry::new("Very advanced maternal age (≥40 years)", RiskLevel::High),
    },
    Rule {
        name: "grand_multigravida",
        applies: |ctx| ctx.gravidity.is_some_and(|g| g >= 5),
        emit: |_| RiskEntry::new("Grand multigravida (G≥5)", RiskLevel::Moderate),
    },
    Rule {
        name: "primigravida",
        applies: |ctx| ctx.parity == Some(0) && ctx.gravidity == Some(1),
        emit: |_| RiskEntry::new("Primigravida", RiskLevel::Low),
    },
];

/// Comorbidities that carry a risk entry, in evaluation order
pub const COMORBIDITY_RISKS: [(Comorbidity, &str, RiskLevel); 9] = [
    (
        Comorbidity::PreviousCesarean,
        "Previous cesarean section — assess for VBAC candidacy",
        RiskLevel::Moderate,
    ),
    (
        Comorbidity::PreviousPreeclampsia,
        "Previous preeclampsia — start aspirin prophylaxis at 12–16 weeks",
        RiskLevel::High,
    ),
    (
        Comorbidity::PreviousPreterm,
        "Previous preterm delivery — consider cervical length surveillance, progesterone",
        RiskLevel::High,
    ),
    (
        Comorbidity::PreviousStillbirth,
        "Previous stillbirth — enhanced fetal surveillance",
        RiskLevel::High,
    ),
    (
        Comorbidity::MultipleGestation,
        "Multiple gestation — high-risk pregnancy management",
        RiskLevel::High,
    ),
    (
        Comorbidity::ChronicHypertension,
        "Chronic hypertension — superimposed preeclampsia risk",
        RiskLevel::High,
    ),
    (
        Comorbidity::PregestationalDiabetes,
        "Pre-gestational diabetes — congenital anomaly risk, macrosomia",
        RiskLevel::High,
    ),
    (
        Comorbidity::Hiv,
        "HIV — PMTCT protocol required",
        RiskLevel::High,
    ),
    (
        Comorbidity::CardiacDisease,
        "Cardiac disease — multidisciplinary management",
        RiskLevel::High,
    ),
];

/// Risk factors for the patient, in fixed evaluation order
///
/// Absent age, gravidity or parity leaves the rules that need them silent.
///
/// # Examples
///
/// ```
/// use prenatrack::core::risk::risk_factors;
/// use prenatrack::domain::{ComorbiditySet, RiskLevel};
///
/// let risks = risk_factors(Some(42), Some(2), Some(1), &ComorbiditySet::new());
/// assert_eq!(risks.len(), 2);
/// assert_eq!(risks[0].level, RiskLevel::Moderate);
/// assert_eq!(risks[1].level, RiskLevel::High);
/// ```
pub fn risk_factors(
    age: Option<u32>,
    gravidity: Option<u32>,
    parity: Option<u32>,
    comorbidities: &ComorbiditySet,
) -> Vec<RiskEntry> {
    let ctx = ClinicalContext::new(comorbidities)
        .with_age(age)
        .with_gravidity(gravidity)
        .with_parity(parity);

    let mut risks = evaluate("risk", &DEMOGRAPHIC_RULES, &ctx);
    risks.extend(
        COMORBIDITY_RISKS
            .iter()
            .filter(|(comorbidity, _, _)| comorbidities.contains(*comorbidity))
            .map(|(_, factor, level)| RiskEntry::new(*factor, *level)),
    );
    risks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(risks: &[RiskEntry]) -> Vec<&str> {
        risks.iter().map(|r| r.factor.as_str()).collect()
    }

    #[test]
    fn test_no_data_no_risks() {
        assert!(risk_factors(None, None, None, &ComorbiditySet::new()).is_empty());
    }

    #[test]
    fn test_adolescent() {
        let risks = risk_factors(Some(17), None, None, &ComorbiditySet::new());
        assert_eq!(
            risks,
            vec![RiskEntry::new("Adolescent pregnancy (<18 years)", RiskLevel::High)]
        );
        assert!(risk_factors(Some(18), None, None, &ComorbiditySet::new()).is_empty());
    }

    #[test]
    fn test_age_boundaries() {
        let set = ComorbiditySet::new();
        assert!(risk_factors(Some(34), None, None, &set).is_empty());
        assert_eq!(
            factors(&risk_factors(Some(35), None, None, &set)),
            vec!["Advanced maternal age (≥35 years)"]
        );
        assert_eq!(
            factors(&risk_factors(Some(39), None, None, &set)),
            vec!["Advanced maternal age (≥35 years)"]
        );
    }

    #[test]
    fn test_age_rules_are_additive() {
        let risks = risk_factors(Some(42), None, None, &ComorbiditySet::new());
        assert_eq!(
            factors(&risks),
            vec![
                "Advanced maternal age (≥35 years)",
                "Very advanced maternal age (≥40 years)",
            ]
        );
    }

    #[test]
    fn test_grand_multigravida() {
        let set = ComorbiditySet::new();
        assert!(risk_factors(None, Some(4), None, &set).is_empty());
        assert_eq!(
            risk_factors(None, Some(5), Some(4), &set),
            vec![RiskEntry::new("Grand multigravida (G≥5)", RiskLevel::Moderate)]
        );
    }

    #[test]
    fn test_primigravida_needs_both_counts() {
        let set = ComorbiditySet::new();
        assert_eq!(
            factors(&risk_factors(None, Some(1), Some(0), &set)),
            vec!["Primigravida"]
        );
        assert!(risk_factors(None, Some(1), None, &set).is_empty());
        assert!(risk_factors(None, None, Some(0), &set).is_empty());
        assert!(risk_factors(None, Some(2), Some(0), &set).is_empty());
    }

    #[test]
    fn test_comorbidities_follow_table_order() {
        let set = ComorbiditySet::from([
            Comorbidity::CardiacDisease,
            Comorbidity::PreviousCesarean,
            Comorbidity::ChronicHypertension,
        ]);
        let risks = risk_factors(None, None, None, &set);
        assert_eq!(
            factors(&risks),
            vec![
                "Previous cesarean section — assess for VBAC candidacy",
                "Chronic hypertension — superimposed preeclampsia risk",
                "Cardiac disease — multidisciplinary management",
            ]
        );
        assert_eq!(risks[0].level, RiskLevel::Moderate);
    }

    #[test]
    fn test_comorbidities_without_risk_entry_are_ignored() {
        let set = ComorbiditySet::from([
            Comorbidity::Asthma,
            Comorbidity::RhNegative,
            Comorbidity::GestationalDiabetes,
        ]);
        assert!(risk_factors(Some(25), Some(2), Some(1), &set).is_empty());
    }

    #[test]
    fn test_full_literal_order() {
        let set = ComorbiditySet::from([Comorbidity::Hiv, Comorbidity::PreviousStillbirth]);
        let risks = risk_factors(Some(41), Some(6), Some(5), &set);
        assert_eq!(
            factors(&risks),
            vec![
                "Advanced maternal age (≥35 years)",
                "Very advanced maternal age (≥40 years)",
                "Grand multigravida (G≥5)",
                "Previous stillbirth — enhanced fetal surveillance",
                "HIV — PMTCT protocol required",
            ]
        );
    }
}
