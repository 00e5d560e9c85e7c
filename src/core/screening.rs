//! Screening and laboratory recommendations
//!
//! Gestational-age windows overlap on purpose. At 26 weeks a patient gets
//! both the second trimester panel and the 24-28 week panel; at 28 weeks
//! the 24-28 week panel and the third trimester panel. Comorbidity panels
//! are independent of gestational age.

use super::rules::{evaluate, ClinicalContext, Rule};
use crate::domain::{Comorbidity, ComorbiditySet, ScreeningPanel};

/// Category names, as they appear on emitted panels
pub mod category {
    pub const FIRST_VISIT: &str = "First Visit Labs";
    pub const FIRST_TRIMESTER: &str = "First Trimester Screening";
    pub const SECOND_TRIMESTER: &str = "Second Trimester Screening";
    pub const WEEKS_24_28: &str = "24–28 Week Screening";
    pub const EARLY_GDM: &str = "Early GDM Screening";
    pub const THIRD_TRIMESTER: &str = "Third Trimester";
    pub const HYPERTENSIVE: &str = "Hypertensive Monitoring";
    pub const DIABETES: &str = "Diabetes Monitoring";
    pub const THYROID: &str = "Thyroid Monitoring";
    pub const HIV: &str = "HIV Monitoring";
    pub const MULTIPLE_GESTATION: &str = "Multiple Gestation Monitoring";
}

const THROUGHOUT: &str = "Throughout pregnancy";

const HYPERTENSIVE_FLAGS: [Comorbidity; 2] = [
    Comorbidity::ChronicHypertension,
    Comorbidity::PreviousPreeclampsia,
];

const DIABETES_FLAGS: [Comorbidity; 2] = [
    Comorbidity::GestationalDiabetes,
    Comorbidity::PregestationalDiabetes,
];

const EARLY_GDM_FLAGS: [Comorbidity; 3] = [
    Comorbidity::PregestationalDiabetes,
    Comorbidity::GestationalDiabetes,
    Comorbidity::Obesity,
];

fn panel(category: &str, timing: &str, tests: Vec<&str>) -> ScreeningPanel {
    ScreeningPanel {
        category: category.to_string(),
        timing: timing.to_string(),
        tests: tests.into_iter().map(str::to_string).collect(),
    }
}

fn first_visit(_: &ClinicalContext<'_>) -> ScreeningPanel {
    panel(
        category::FIRST_VISIT,
        "First prenatal visit",
        vec![
            "Complete Blood Count (CBC)",
            "Blood typing (ABO + Rh)",
            "Urinalysis with microscopy + urine culture (screen for asymptomatic bacteriuria per POGS/WHO)",
            "Hepatitis B surface antigen (HBsAg)",
            "Syphilis screening (RPR/VDRL)",
            "HIV screening (with consent per RA 11166)",
            "Fasting blood sugar or random blood sugar",
            "Blood smear for malaria (endemic areas — ARMM, Palawan, etc.)",
            "Stool exam (if indicated)",
        ],
    )
}

fn first_trimester(ctx: &ClinicalContext<'_>) -> ScreeningPanel {
    let mut tests = vec![
        "Nuchal translucency (NT) ultrasound",
        "First trimester combined screening (NT + PAPP-A + free β-hCG) if available",
        "Dating ultrasound (crown-rump length)",
    ];
    if ctx.age_at_least(35) {
        tests.push("Offer chorionic villus sampling (CVS) if indicated");
    }
    if ctx.has(Comorbidity::ThyroidDisorder) {
        tests.push("TSH, FT4");
    } else {
        tests.push("TSH (universal screening recommended per POGS)");
    }
    panel(category::FIRST_TRIMESTER, "11–14 weeks", tests)
}

fn second_trimester(ctx: &ClinicalContext<'_>) -> ScreeningPanel {
    let mut tests = vec![
        "Congenital anomaly scan / morphology UTZ (18–22 weeks)",
        "Cervical length assessment (18–24 weeks, esp. if history of preterm birth)",
    ];
    if ctx.weeks_within(15, 20) && ctx.age_at_least(35) {
        tests.push("Offer quadruple screen / maternal serum screening");
        tests.push("Offer amniocentesis for karyotyping if indicated");
    }
    panel(category::SECOND_TRIMESTER, "14–27 weeks", tests)
}

fn weeks_24_28(ctx: &ClinicalContext<'_>) -> ScreeningPanel {
    let mut tests = vec![
        "75g OGTT for GDM screening — universal per POGS/IADPSG (diagnostic cutoffs: fasting ≥92, 1hr ≥180, 2hr ≥153 mg/dL)",
        "Repeat CBC (assess for anemia)",
        "Repeat urinalysis",
    ];
    if ctx.has(Comorbidity::RhNegative) {
        tests.push("Indirect Coombs test / antibody screen");
    }
    panel(category::WEEKS_24_28, "24–28 weeks", tests)
}

fn early_gdm(_: &ClinicalContext<'_>) -> ScreeningPanel {
    panel(
        category::EARLY_GDM,
        "First visit if high-risk",
        vec![
            "FBS or 75g OGTT at first visit (if not yet done)",
            "Repeat 75g OGTT at 24–28 weeks if initial screen is normal",
            "HbA1c (if pre-gestational DM suspected)",
        ],
    )
}

fn third_trimester(ctx: &ClinicalContext<'_>) -> ScreeningPanel {
    let mut tests = vec![
        "Repeat CBC",
        "Repeat urinalysis",
        "Growth ultrasound (28–32 weeks)",
        "Non-stress test (NST) — weekly from 32–34 weeks if high-risk",
        "Biophysical profile (BPP) if indicated",
    ];
    if ctx.weeks_within(35, 37) {
        tests.push("Group B Streptococcus (GBS) recto-vaginal culture (35–37 weeks)");
    }
    if ctx.weeks_at_least(36) {
        tests.push("Repeat HBsAg (if high-risk or status unknown)");
        tests.push("Repeat RPR/VDRL");
        tests.push("Repeat HIV screening");
        tests.push("Presentation assessment (Leopold's maneuvers + confirmatory UTZ if breech)");
    }
    if ctx.has(Comorbidity::RhNegative) {
        tests.push("Administer anti-D immunoglobulin at 28 weeks if unsensitized");
    }
    if ctx.has(Comorbidity::PreviousCesarean) {
        tests.push("Assess suitability for TOLAC vs repeat CS");
    }
    panel(category::THIRD_TRIMESTER, "28+ weeks", tests)
}

fn hypertensive(_: &ClinicalContext<'_>) -> ScreeningPanel {
    panel(
        category::HYPERTENSIVE,
        THROUGHOUT,
        vec![
            "BP monitoring every visit (target <140/90)",
            "24-hour urine protein or spot protein:creatinine ratio (baseline & if BP rises)",
            "Serum creatinine, uric acid, LDH, AST/ALT",
            "Platelet count",
            "Low-dose aspirin 81–150 mg/day starting 12–16 weeks (per POGS/ACOG)",
            "Calcium supplementation 1.5–2g/day (WHO recommendation for low-intake populations)",
            "Uterine artery Doppler (if available, 20–24 weeks)",
        ],
    )
}

fn diabetes(_: &ClinicalContext<'_>) -> ScreeningPanel {
    panel(
        category::DIABETES,
        THROUGHOUT,
        vec![
            "Self-monitoring of blood glucose (fasting + 1-2hr postprandial)",
            "HbA1c every trimester",
            "Fundoscopy (if pre-gestational DM)",
            "Renal function tests (if pre-gestational DM)",
            "Growth ultrasound every 4 weeks from 28 weeks",
            "Fetal surveillance (NST/BPP) from 32–34 weeks",
            "Timing of delivery: 39 weeks (diet-controlled GDM), 37–39 weeks (insulin-requiring)",
        ],
    )
}

fn thyroid(_: &ClinicalContext<'_>) -> ScreeningPanel {
    panel(
        category::THYROID,
        THROUGHOUT,
        vec![
            "TSH every 4–6 weeks during 1st half, then at least once per trimester",
            "FT4 if TSH abnormal",
            "Adjust levothyroxine dose (increase 25–30% upon confirmed pregnancy per ATA)",
            "Target TSH: trimester-specific reference ranges or <2.5 mIU/L if unavailable",
        ],
    )
}

fn hiv(_: &ClinicalContext<'_>) -> ScreeningPanel {
    panel(
        category::HIV,
        THROUGHOUT,
        vec![
            "CD4 count and viral load at baseline, then per PMTCT protocol",
            "Initiate/continue ART per DOH PMTCT guidelines",
            "Resistance testing if not on ART",
            "Screen for co-infections (TB, hepatitis, STIs)",
            "Plan delivery mode based on viral load",
        ],
    )
}

fn multiple_gestation(_: &ClinicalContext<'_>) -> ScreeningPanel {
    panel(
        category::MULTIPLE_GESTATION,
        THROUGHOUT,
        vec![
            "Determine chorionicity/amnionicity on first trimester UTZ",
            "Cervical length assessment starting 16 weeks",
            "Growth UTZ every 2–3 weeks (MCDA) or every 4 weeks (DCDA)",
            "MCDA: screen for TTTS from 16 weeks",
            "Earlier GDM screening",
            "Fetal surveillance from 28–32 weeks",
            "Delivery timing: 36–37 weeks (DCDA), 34–36 weeks (MCDA), 32–34 weeks (MCMA)",
        ],
    )
}

static SCREENING_RULES: [Rule<ScreeningPanel>; 11] = [
    Rule {
        name: "first_visit",
        applies: |_| true,
        emit: first_visit,
    },
    Rule {
        name: "first_trimester",
        applies: |ctx| ctx.weeks_at_most(13),
        emit: first_trimester,
    },
    Rule {
        name: "second_trimester",
        applies: |ctx| ctx.weeks_within(14, 27),
        emit: second_trimester,
    },
    Rule {
        name: "weeks_24_28",
        applies: |ctx| ctx.weeks_within(24, 28),
        emit: weeks_24_28,
    },
    Rule {
        name: "early_gdm",
        applies: |ctx| ctx.weeks_below(24) && (ctx.has_any(&EARLY_GDM_FLAGS) || ctx.age_at_least(35)),
        emit: early_gdm,
    },
    Rule {
        name: "third_trimester",
        applies: |ctx| ctx.weeks_at_least(28),
        emit: third_trimester,
    },
    Rule {
        name: "hypertensive",
        applies: |ctx| ctx.has_any(&HYPERTENSIVE_FLAGS),
        emit: hypertensive,
    },
    Rule {
        name: "diabetes",
        applies: |ctx| ctx.has_any(&DIABETES_FLAGS),
        emit: diabetes,
    },
    Rule {
        name: "thyroid",
        applies: |ctx| ctx.has(Comorbidity::ThyroidDisorder),
        emit: thyroid,
    },
    Rule {
        name: "hiv",
        applies: |ctx| ctx.has(Comorbidity::Hiv),
        emit: hiv,
    },
    Rule {
        name: "multiple_gestation",
        applies: |ctx| ctx.has(Comorbidity::MultipleGestation),
        emit: multiple_gestation,
    },
];

/// Screening panels for the patient, in rule-definition order
///
/// With `weeks` unknown only the gestational-age-independent panels (first
/// visit labs and comorbidity monitoring) are returned. `gravidity` is part
/// of the evaluation context but no current rule reads it.
///
/// # Examples
///
/// ```
/// use prenatrack::core::screening::{category, screenings};
/// use prenatrack::domain::ComorbiditySet;
///
/// let panels = screenings(Some(26), &ComorbiditySet::new(), Some(30), Some(1));
/// let names: Vec<_> = panels.iter().map(|p| p.category.as_str()).collect();
/// assert_eq!(
///     names,
///     vec![category::FIRST_VISIT, category::SECOND_TRIMESTER, category::WEEKS_24_28]
/// );
/// ```
pub fn screenings(
    weeks: Option<u32>,
    comorbidities: &ComorbiditySet,
    age: Option<u32>,
    gravidity: Option<u32>,
) -> Vec<ScreeningPanel> {
    let ctx = ClinicalContext::new(comorbidities)
        .with_weeks(weeks)
        .with_age(age)
        .with_gravidity(gravidity);
    evaluate("screening", &SCREENING_RULES, &ctx)
}
