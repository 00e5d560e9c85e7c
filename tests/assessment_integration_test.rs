//! End-to-end assessment scenarios

use chrono::{Days, NaiveDate};
use prenatrack::core::dating::{aog_from_lmp, aog_from_utz, edc_from_lmp, edc_from_utz};
use prenatrack::core::reconcile::reconcile_aog;
use prenatrack::core::risk::risk_factors;
use prenatrack::core::screening::{category, screenings};
use prenatrack::core::Assessment;
use prenatrack::domain::{
    load_patient, AgeEstimate, AogSource, Comorbidity, ComorbiditySet, DangerSign, PatientInput,
    PrenatalError, Trimester,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_scenario_lmp_dating() {
    let lmp = Some(date(2024, 1, 1));
    let aog = aog_from_lmp(lmp, date(2024, 4, 1)).unwrap();
    assert_eq!((aog.weeks, aog.days), (13, 0));
    assert_eq!(edc_from_lmp(lmp), Some(date(2024, 10, 7)));
}

#[test]
fn test_scenario_utz_dating() {
    let scan = Some(date(2024, 2, 1));
    let aog = aog_from_utz(scan, Some(8), Some(0), date(2024, 2, 1)).unwrap();
    assert_eq!((aog.weeks, aog.days), (8, 0));
    assert_eq!(
        edc_from_utz(scan, Some(8), Some(0)),
        Some(date(2024, 2, 1) + Days::new(224))
    );
}

#[test]
fn test_scenario_discrepancy_switches_to_utz() {
    let best = reconcile_aog(
        Some(AgeEstimate::from_days(100)),
        Some(AgeEstimate::from_days(112)),
        Some(14),
    )
    .unwrap();
    assert_eq!(best.source, AogSource::UtzDiscrepancy { threshold_days: 7 });
    assert_eq!(best.source.to_string(), "UTZ (discrepancy > 7d)");
    assert_eq!(best.total_days(), 112);
}

#[test]
fn test_scenario_rh_negative_at_30_weeks() {
    let set = ComorbiditySet::from([Comorbidity::RhNegative]);
    let panels = screenings(Some(30), &set, Some(28), Some(2));

    let third = panels
        .iter()
        .find(|p| p.category == category::THIRD_TRIMESTER)
        .expect("third trimester panel");
    assert!(third.has_test("Administer anti-D immunoglobulin at 28 weeks if unsensitized"));
    assert!(panels.iter().all(|p| p.category != category::HYPERTENSIVE));
}

#[test]
fn test_screening_overlap_at_26_weeks() {
    let panels = screenings(Some(26), &ComorbiditySet::new(), None, None);
    let names: Vec<_> = panels.iter().map(|p| p.category.as_str()).collect();
    assert!(names.contains(&category::SECOND_TRIMESTER));
    assert!(names.contains(&category::WEEKS_24_28));
}

#[test]
fn test_risk_additivity_at_42() {
    let risks = risk_factors(Some(42), None, None, &ComorbiditySet::new());
    let factors: Vec<_> = risks.iter().map(|r| r.factor.as_str()).collect();
    assert!(factors.contains(&"Advanced maternal age (≥35 years)"));
    assert!(factors.contains(&"Very advanced maternal age (≥40 years)"));
}

#[test]
fn test_full_assessment_from_toml_file() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    write!(
        file,
        r#"
birth_date = "1985-06-01"
lmp = "2024-01-01"
utz_date = "2024-02-15"
utz_weeks = "6"
utz_days = ""
comorbidities = ["cht", "rh_negative"]
danger_signs = ["headache"]

[obstetric]
gravidity = 4
parity = 3
term = 3
living = 3
"#
    )
    .unwrap();

    let patient = load_patient(file.path()).unwrap();
    assert_eq!(patient.utz_days, None);

    let assessment = Assessment::evaluate(&patient, date(2024, 7, 1));

    // LMP 182 days vs UTZ 42 + 137 = 179 days, scan at 6 weeks: concordant
    let best = assessment.dating.best_aog.unwrap();
    assert_eq!(best.source, AogSource::LmpConcordant);
    assert_eq!((best.weeks(), best.days()), (26, 0));
    assert_eq!(assessment.dating.best_edc, Some(date(2024, 10, 7)));
    assert_eq!(assessment.dating.trimester, Some(Trimester::Second));

    assert_eq!(assessment.age, Some(39));
    assert_eq!(assessment.obstetric_notation.as_deref(), Some("G4P3 (3-0-0-3)"));
    assert_eq!(
        assessment.comorbidities,
        vec!["Chronic Hypertension", "Rh-negative"]
    );

    let factors: Vec<_> = assessment.risks.iter().map(|r| r.factor.as_str()).collect();
    assert_eq!(
        factors,
        vec![
            "Advanced maternal age (≥35 years)",
            "Chronic hypertension — superimposed preeclampsia risk",
        ]
    );

    let panels: Vec<_> = assessment
        .screenings
        .iter()
        .map(|p| p.category.as_str())
        .collect();
    assert_eq!(
        panels,
        vec![
            category::FIRST_VISIT,
            category::SECOND_TRIMESTER,
            category::WEEKS_24_28,
            category::HYPERTENSIVE,
        ]
    );

    let supplements: Vec<_> = assessment
        .supplements
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert!(supplements.contains(&"Low-dose Aspirin"));
    assert!(supplements.contains(&"Anti-D Immunoglobulin (RhoGAM)"));
    assert_eq!(supplements.last(), Some(&"Vitamin D"));

    assert!(assessment.urgent_referral);
    assert_eq!(assessment.danger_alerts[0].sign, DangerSign::Headache);
}

#[test]
fn test_json_patient_file_with_bad_count_is_rejected() {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(file, r#"{{"lmp": "2024-01-01", "obstetric": {{"parity": "two"}}}}"#).unwrap();
    let err = load_patient(file.path()).unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(
        &err,
        PrenatalError::InvalidInput { field, value } if field == "parity" && value == "two"
    ));
}

#[test]
fn test_undated_patient_gets_no_recommendations() {
    let patient = PatientInput::builder()
        .birth_date(date(2008, 1, 1))
        .gravidity(1)
        .parity(0)
        .build()
        .unwrap();
    let assessment = Assessment::evaluate(&patient, date(2024, 4, 1));

    assert!(!assessment.is_dated());
    assert!(assessment.screenings.is_empty());
    assert!(assessment.supplements.is_empty());
    let factors: Vec<_> = assessment.risks.iter().map(|r| r.factor.as_str()).collect();
    assert_eq!(factors, vec!["Adolescent pregnancy (<18 years)", "Primigravida"]);
}

#[test]
fn test_evaluation_is_repeatable() {
    let patient = PatientInput::builder()
        .lmp(date(2024, 1, 1))
        .ultrasound(date(2024, 2, 1), 5, 3)
        .comorbidities([Comorbidity::GestationalDiabetes, Comorbidity::Hiv])
        .build()
        .unwrap();
    let today = date(2024, 5, 20);
    assert_eq!(
        Assessment::evaluate(&patient, today),
        Assessment::evaluate(&patient, today)
    );
}
