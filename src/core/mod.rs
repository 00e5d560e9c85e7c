//! Clinical decision logic for PrenaTrack.
//!
//! Everything here is a pure function of its inputs and an explicit
//! "today" date. No module reads the system clock or touches I/O.
//!
//! # Modules
//!
//! - [`dating`] - Age, AOG and EDC from LMP or ultrasound
//! - [`reconcile`] - Choosing between LMP and ultrasound dating
//! - [`trimester`] - Trimester classification
//! - [`rules`] - Shared ordered rule-table evaluation
//! - [`risk`] - Risk stratification
//! - [`screening`] - Screening and laboratory panels
//! - [`supplements`] - Supplement and prophylaxis recommendations
//! - [`danger`] - Danger sign triage
//! - [`assessment`] - The end-to-end pipeline tying the above together
//!
//! # Data flow
//!
//! 1. **Age** from birth date
//! 2. **AOG/EDC** from LMP and from ultrasound, independently
//! 3. **Reconcile** into the best AOG, then the best EDC and trimester
//! 4. **Rule engines** on (best AOG weeks, age, G/P, comorbidities)
//! 5. **Danger alerts** from the flagged signs

pub mod assessment;
pub mod danger;
pub mod dating;
pub mod reconcile;
pub mod risk;
pub mod rules;
pub mod screening;
pub mod supplements;
pub mod trimester;

pub use assessment::{Assessment, Dating};
