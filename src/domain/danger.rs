//! DOH ten danger signs in pregnancy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How urgently a positive danger sign must be acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerSeverity {
    Warning,
    Critical,
}

impl fmt::Display for DangerSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A danger sign that can be flagged at a visit
///
/// Declaration order is the reference table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerSign {
    Bleeding,
    Headache,
    BlurredVision,
    Convulsions,
    Edema,
    Fever,
    #[serde(alias = "abd_pain")]
    AbdominalPain,
    Dyspnea,
    #[serde(alias = "fetal_movement")]
    DecreasedFetalMovement,
    WateryDischarge,
}

impl DangerSign {
    /// Every danger sign, in reference table order
    pub const ALL: [DangerSign; 10] = [
        DangerSign::Bleeding,
        DangerSign::Headache,
        DangerSign::BlurredVision,
        DangerSign::Convulsions,
        DangerSign::Edema,
        DangerSign::Fever,
        DangerSign::AbdominalPain,
        DangerSign::Dyspnea,
        DangerSign::DecreasedFetalMovement,
        DangerSign::WateryDischarge,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Bleeding => "bleeding",
            Self::Headache => "headache",
            Self::BlurredVision => "blurred_vision",
            Self::Convulsions => "convulsions",
            Self::Edema => "edema",
            Self::Fever => "fever",
            Self::AbdominalPain => "abdominal_pain",
            Self::Dyspnea => "dyspnea",
            Self::DecreasedFetalMovement => "decreased_fetal_movement",
            Self::WateryDischarge => "watery_discharge",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bleeding => "Vaginal bleeding",
            Self::Headache => "Severe, persistent headache",
            Self::BlurredVision => "Blurred vision or scotomata",
            Self::Convulsions => "Convulsions / seizures",
            Self::Edema => "Edema of face, hands, or generalized",
            Self::Fever => "Fever (≥38°C)",
            Self::AbdominalPain => "Severe abdominal pain",
            Self::Dyspnea => "Difficulty of breathing",
            Self::DecreasedFetalMovement => "Decreased or absent fetal movement",
            Self::WateryDischarge => "Watery vaginal discharge (PROM)",
        }
    }

    pub fn severity(&self) -> DangerSeverity {
        match self {
            Self::Edema | Self::Fever | Self::Dyspnea | Self::DecreasedFetalMovement => {
                DangerSeverity::Warning
            }
            Self::Bleeding
            | Self::Headache
            | Self::BlurredVision
            | Self::Convulsions
            | Self::AbdominalPain
            | Self::WateryDischarge => DangerSeverity::Critical,
        }
    }

    /// Recommended action when the sign is positive
    pub fn action(&self) -> &'static str {
        match self {
            Self::Bleeding => "Refer immediately. Rule out placenta previa, abruption, ectopic.",
            Self::Headache => {
                "Check BP. Evaluate for preeclampsia. Urine protein. Refer if BP ≥140/90."
            }
            Self::BlurredVision => "Evaluate for severe preeclampsia/eclampsia. Urgent referral.",
            Self::Convulsions => {
                "Eclampsia until proven otherwise. Stabilize (MgSO4), emergent referral."
            }
            Self::Edema => "Check BP, urinalysis for proteinuria. Evaluate for preeclampsia.",
            Self::Fever => {
                "Rule out UTI, URTI, malaria (endemic areas), chorioamnionitis. Treat cause."
            }
            Self::AbdominalPain => {
                "Rule out ectopic, abruption, preterm labor, appendicitis, HELLP."
            }
            Self::Dyspnea => {
                "Assess for cardiac disease, severe anemia, PE. Check vitals, O2 sat."
            }
            Self::DecreasedFetalMovement => {
                "Non-stress test. Kick count monitoring. UTZ for biophysical profile."
            }
            Self::WateryDischarge => {
                "Sterile speculum exam. Nitrazine/ferning test. Avoid digital exam. Manage per AOG."
            }
        }
    }
}

impl fmt::Display for DangerSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for DangerSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        let needle = match needle.as_str() {
            "abd_pain" => "abdominal_pain",
            "fetal_movement" => "decreased_fetal_movement",
            other => other,
        };
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.id() == needle)
            .ok_or_else(|| format!("Unknown danger sign '{}'", s.trim()))
    }
}

/// A flagged danger sign together with what to do about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerAlert {
    pub sign: DangerSign,
    pub label: String,
    pub severity: DangerSeverity,
    pub action: String,
}

impl From<DangerSign> for DangerAlert {
    fn from(sign: DangerSign) -> Self {
        Self {
            sign,
            label: sign.label().to_string(),
            severity: sign.severity(),
            action: sign.action().to_string(),
        }
    }
}
