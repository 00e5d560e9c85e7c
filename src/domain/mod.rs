//! Domain models and types for PrenaTrack.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Patient input** ([`PatientInput`], [`ObstetricScore`], [`ComorbiditySet`])
//! - **Dating values** ([`AgeEstimate`], [`BestAog`], [`Trimester`])
//! - **Rule outputs** ([`RiskEntry`], [`ScreeningPanel`], [`SupplementRecommendation`], [`DangerAlert`])
//! - **Error types** ([`PrenatalError`]) and the [`Result`] alias
//!
//! # Closed enumerations
//!
//! Comorbidities and danger signs are enums rather than strings, so every
//! rule table that matches on them is checked for exhaustiveness:
//!
//! ```rust
//! use prenatrack::domain::{Comorbidity, ComorbiditySet};
//!
//! let set: ComorbiditySet = ["cht", "rh_neg"]
//!     .iter()
//!     .map(|id| id.parse::<Comorbidity>())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert!(set.contains(Comorbidity::ChronicHypertension));
//! assert!(!set.contains(Comorbidity::GestationalDiabetes));
//! ```

pub mod comorbidity;
pub mod danger;
pub mod errors;
pub mod estimate;
pub mod obstetric;
pub mod patient;
pub mod recommendation;
pub mod result;

// Re-export commonly used types for convenience
pub use comorbidity::{Comorbidity, ComorbiditySet};
pub use danger::{DangerAlert, DangerSeverity, DangerSign};
pub use errors::PrenatalError;
pub use estimate::{AgeEstimate, AogSource, BestAog, Trimester};
pub use obstetric::{parse_count, ObstetricScore};
pub use patient::{load_patient, PatientInput, PatientInputBuilder};
pub use recommendation::{RiskEntry, RiskLevel, ScreeningPanel, SupplementRecommendation};
pub use result::Result;
