//! Supplement and prophylaxis recommendations

use super::rules::{evaluate, ClinicalContext, Rule};
use crate::domain::{Comorbidity, ComorbiditySet, SupplementRecommendation};

/// Comorbidities that indicate low-dose aspirin for preeclampsia prophylaxis
pub const ASPIRIN_INDICATIONS: [Comorbidity; 6] = [
    Comorbidity::PreviousPreeclampsia,
    Comorbidity::ChronicHypertension,
    Comorbidity::PregestationalDiabetes,
    Comorbidity::Obesity,
    Comorbidity::MultipleGestation,
    Comorbidity::Sle,
];

fn supplement(name: &str, dose: &str, timing: &str, notes: &str) -> SupplementRecommendation {
    SupplementRecommendation {
        name: name.to_string(),
        dose: dose.to_string(),
        timing: timing.to_string(),
        notes: notes.to_string(),
    }
}

static SUPPLEMENT_RULES: [Rule<SupplementRecommendation>; 8] = [
    Rule {
        name: "iron_folic_acid",
        applies: |_| true,
        emit: |_| {
            supplement(
                "Ferrous Sulfate + Folic Acid",
                "60 mg elemental iron + 400 mcg folic acid daily (DOH standard)",
                "Start at first prenatal visit, continue throughout pregnancy and 3 months postpartum",
                "Take on empty stomach with vitamin C for better absorption. Avoid with tea/coffee/milk. If Hgb <11 g/dL, give therapeutic dose: 120 mg elemental iron daily.",
            )
        },
    },
    Rule {
        name: "calcium",
        applies: |_| true,
        emit: |_| {
            supplement(
                "Calcium Carbonate",
                "500 mg elemental calcium BID (total 1g/day; up to 1.5-2g/day per WHO for low-intake populations)",
                "Start at 20 weeks, continue until delivery",
                "Take separately from iron (at least 2 hours apart). Reduces risk of preeclampsia per WHO. Especially important in Philippine setting (low dietary calcium intake).",
            )
        },
    },
    Rule {
        name: "iodine",
        applies: |_| true,
        emit: |_| {
            supplement(
                "Iodine",
                "250 mcg daily (WHO recommendation for pregnant women)",
                "Throughout pregnancy and lactation",
                "May be included in prenatal vitamins. Important for fetal neurodevelopment. Iodized salt alone may be insufficient.",
            )
        },
    },
    Rule {
        name: "deworming",
        applies: |ctx| ctx.weeks_at_least(14),
        emit: |_| {
            supplement(
                "Albendazole (Deworming)",
                "400 mg single oral dose",
                "Once after the 1st trimester (DOH Prenatal Care Package)",
                "DOH-mandated for all pregnant women. Reduces risk of iron-deficiency anemia from soil-transmitted helminthiasis. Single dose only — do not repeat during pregnancy.",
            )
        },
    },
    Rule {
        name: "aspirin",
        applies: |ctx| ctx.has_any(&ASPIRIN_INDICATIONS),
        emit: |_| {
            supplement(
                "Low-dose Aspirin",
                "81–150 mg daily at bedtime",
                "Start at 12–16 weeks, continue until 36 weeks",
                "For preeclampsia prophylaxis in high-risk patients. Take at bedtime for optimal effect (per POGS/ACOG).",
            )
        },
    },
    Rule {
        name: "therapeutic_iron",
        applies: |ctx| ctx.has(Comorbidity::Anemia),
        emit: |_| {
            supplement(
                "Therapeutic Iron",
                "120 mg elemental iron daily (or parenteral iron if intolerant/severe)",
                "Until Hgb normalizes, then continue prophylactic dose",
                "Recheck CBC after 4 weeks. Consider IV iron (ferric carboxymaltose) if Hgb <8 or non-response to oral.",
            )
        },
    },
    Rule {
        name: "anti_d",
        applies: |ctx| ctx.has(Comorbidity::RhNegative),
        emit: |_| {
            supplement(
                "Anti-D Immunoglobulin (RhoGAM)",
                "300 mcg IM",
                "At 28 weeks AOG, and within 72 hours after delivery (if baby is Rh-positive)",
                "Also give after any sensitizing event (bleeding, amniocentesis, version, miscarriage). Check indirect Coombs first.",
            )
        },
    },
    Rule {
        name: "vitamin_d",
        applies: |_| true,
        emit: |_| {
            supplement(
                "Vitamin D",
                "600–1000 IU daily (higher if deficient)",
                "Throughout pregnancy",
                "Consider screening 25-OH vitamin D in high-risk patients. Important for calcium metabolism and fetal bone development.",
            )
        },
    },
];

/// Supplements for the patient
///
/// The three base supplements come first and vitamin D always comes last.
/// Deworming is only offered once past the first trimester, so an unknown
/// gestational age leaves it out.
pub fn supplements(weeks: Option<u32>, comorbidities: &ComorbiditySet) -> Vec<SupplementRecommendation> {
    let ctx = ClinicalContext::new(comorbidities).with_weeks(weeks);
    evaluate("supplements", &SUPPLEMENT_RULES, &ctx)
}
