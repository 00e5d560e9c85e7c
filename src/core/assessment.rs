//! End-to-end clinical assessment
//!
//! [`Assessment::evaluate`] runs the full pipeline over one
//! [`PatientInput`]:
//!
//! 1. **Age** from the birth date
//! 2. **Dating** from the LMP and the ultrasound, each independently
//! 3. **Reconciliation** into a single best AOG and EDC
//! 4. **Trimester** from the best AOG
//! 5. **Rule engines** for risks, screenings, supplements and danger signs
//!
//! The result is a plain snapshot. Nothing is cached between calls, so
//! evaluating the same input with the same `today` always gives the same
//! assessment.
//!
//! # Example
//!
//! ```
//! use prenatrack::core::assessment::Assessment;
//! use prenatrack::domain::{PatientInput, Trimester};
//! use chrono::NaiveDate;
//!
//! let patient = PatientInput::builder()
//!     .lmp(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .build()
//!     .unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//!
//! let assessment = Assessment::evaluate(&patient, today);
//! assert_eq!(assessment.dating.best_aog.unwrap().weeks(), 13);
//! assert_eq!(assessment.dating.trimester, Some(Trimester::First));
//! ```

use super::danger::{danger_alerts, requires_urgent_referral};
use super::dating::{age, aog_from_lmp, aog_from_utz, edc_from_lmp, edc_from_utz};
use super::reconcile::reconcile_aog;
use super::risk::risk_factors;
use super::screening::screenings;
use super::supplements::supplements;
use super::trimester::trimester;
use crate::domain::{
    AgeEstimate, BestAog, DangerAlert, PatientInput, RiskEntry, ScreeningPanel,
    SupplementRecommendation, Trimester,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Dating results by source, plus the reconciled values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dating {
    pub lmp_aog: Option<AgeEstimate>,
    pub utz_aog: Option<AgeEstimate>,
    pub edc_lmp: Option<NaiveDate>,
    pub edc_utz: Option<NaiveDate>,
    pub best_aog: Option<BestAog>,
    /// EDC of whichever source the reconciliation selected
    pub best_edc: Option<NaiveDate>,
    pub trimester: Option<Trimester>,
}

impl Dating {
    /// Dates a pregnancy from the LMP and ultrasound fields of `patient`
    pub fn compute(patient: &PatientInput, today: NaiveDate) -> Self {
        let lmp_aog = aog_from_lmp(patient.lmp, today);
        let utz_aog = aog_from_utz(patient.utz_date, patient.utz_weeks, patient.utz_days, today);
        let edc_lmp = edc_from_lmp(patient.lmp);
        let edc_utz = edc_from_utz(patient.utz_date, patient.utz_weeks, patient.utz_days);

        let best_aog = reconcile_aog(lmp_aog, utz_aog, patient.utz_weeks);
        let best_edc = best_aog.and_then(|best| {
            if best.source.is_ultrasound() {
                edc_utz
            } else {
                edc_lmp
            }
        });
        let trimester = best_aog.and_then(|best| trimester(i64::from(best.weeks())));

        Self {
            lmp_aog,
            utz_aog,
            edc_lmp,
            edc_utz,
            best_aog,
            best_edc,
            trimester,
        }
    }

    /// Completed weeks of the reconciled AOG, if any
    pub fn best_weeks(&self) -> Option<u32> {
        self.best_aog.map(|best| best.weeks())
    }
}

/// Everything derived from one patient snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub evaluated_on: NaiveDate,
    pub age: Option<u32>,
    pub dating: Dating,
    pub obstetric_notation: Option<String>,
    pub comorbidities: Vec<&'static str>,
    pub risks: Vec<RiskEntry>,
    pub screenings: Vec<ScreeningPanel>,
    pub supplements: Vec<SupplementRecommendation>,
    pub danger_alerts: Vec<DangerAlert>,
    pub urgent_referral: bool,
}

impl Assessment {
    /// Runs the full pipeline for `patient` as of `today`
    ///
    /// Screenings and supplements stay empty until a gestational age can be
    /// established. Risks and danger alerts never depend on dating.
    pub fn evaluate(patient: &PatientInput, today: NaiveDate) -> Self {
        let age = age(patient.birth_date, today);
        let dating = Dating::compute(patient, today);
        let obstetric = &patient.obstetric;

        let risks = risk_factors(
            age,
            obstetric.gravidity,
            obstetric.parity,
            &patient.comorbidities,
        );

        let (screenings, supplements) = match dating.best_weeks() {
            Some(weeks) => (
                screenings(
                    Some(weeks),
                    &patient.comorbidities,
                    age,
                    obstetric.gravidity,
                ),
                supplements(Some(weeks), &patient.comorbidities),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let danger_alerts = danger_alerts(&patient.danger_signs);
        let urgent_referral = requires_urgent_referral(&danger_alerts);

        tracing::debug!(
            %today,
            best_aog = ?dating.best_aog.map(|b| b.to_string()),
            risks = risks.len(),
            screenings = screenings.len(),
            supplements = supplements.len(),
            danger_alerts = danger_alerts.len(),
            "Assessment evaluated"
        );

        Self {
            evaluated_on: today,
            age,
            dating,
            obstetric_notation: obstetric.notation(),
            comorbidities: patient.comorbidities.labels(),
            risks,
            screenings,
            supplements,
            danger_alerts,
            urgent_referral,
        }
    }

    /// Whether the dating step produced a usable gestational age
    pub fn is_dated(&self) -> bool {
        self.dating.best_aog.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AogSource, Comorbidity, DangerSign};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_patient() {
        let assessment = Assessment::evaluate(&PatientInput::default(), date(2024, 4, 1));
        assert!(!assessment.is_dated());
        assert_eq!(assessment.dating.trimester, None);
        assert!(assessment.risks.is_empty());
        assert!(assessment.screenings.is_empty());
        assert!(assessment.supplements.is_empty());
        assert!(!assessment.urgent_referral);
    }

    #[test]
    fn test_best_edc_follows_lmp_when_concordant() {
        let patient = PatientInput::builder()
            .lmp(date(2024, 1, 1))
            .ultrasound(date(2024, 3, 1), 8, 4)
            .build()
            .unwrap();
        let dating = Dating::compute(&patient, date(2024, 4, 1));
        assert_eq!(dating.best_aog.unwrap().source, AogSource::LmpConcordant);
        assert_eq!(dating.best_edc, dating.edc_lmp);
        assert_eq!(dating.best_edc, Some(date(2024, 10, 7)));
    }

    #[test]
    fn test_best_edc_follows_utz_on_discrepancy() {
        let patient = PatientInput::builder()
            .lmp(date(2024, 1, 1))
            .ultrasound(date(2024, 3, 1), 11, 0)
            .build()
            .unwrap();
        let dating = Dating::compute(&patient, date(2024, 4, 1));
        assert_eq!(
            dating.best_aog.unwrap().source,
            AogSource::UtzDiscrepancy { threshold_days: 5 }
        );
        assert_eq!(dating.best_edc, dating.edc_utz);
        assert_ne!(dating.edc_utz, dating.edc_lmp);
    }

    #[test]
    fn test_danger_signs_do_not_need_dating() {
        let patient = PatientInput::builder()
            .danger_sign(DangerSign::Convulsions)
            .build()
            .unwrap();
        let assessment = Assessment::evaluate(&patient, date(2024, 4, 1));
        assert_eq!(assessment.danger_alerts.len(), 1);
        assert!(assessment.urgent_referral);
    }

    #[test]
    fn test_risks_do_not_need_dating() {
        let patient = PatientInput::builder()
            .birth_date(date(1984, 1, 1))
            .comorbidity(Comorbidity::Hiv)
            .build()
            .unwrap();
        let assessment = Assessment::evaluate(&patient, date(2024, 4, 1));
        assert_eq!(assessment.age, Some(40));
        assert_eq!(assessment.risks.len(), 3);
        assert!(assessment.screenings.is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let patient = PatientInput::builder()
            .lmp(date(2024, 1, 1))
            .build()
            .unwrap();
        let assessment = Assessment::evaluate(&patient, date(2024, 4, 1));
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["evaluated_on"], "2024-04-01");
        assert_eq!(json["dating"]["best_aog"]["source"], "LMP");
        assert_eq!(json["dating"]["trimester"], "First");
    }

    #[test]
    fn test_serializes_discrepancy_tag_to_json() {
        let patient = PatientInput::builder()
            .lmp(date(2024, 1, 1))
            .ultrasound(date(2024, 3, 1), 11, 0)
            .build()
            .unwrap();
        let assessment = Assessment::evaluate(&patient, date(2024, 4, 1));
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["dating"]["best_aog"]["source"], "UTZ (discrepancy > 5d)");
        assert_eq!(json["dating"]["trimester"], "Second");
    }
}
