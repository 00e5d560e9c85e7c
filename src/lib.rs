// PrenaTrack - Prenatal Clinical Decision Support
// Copyright (c) 2025 PrenaTrack Contributors
// Licensed under the MIT License

//! # PrenaTrack - Prenatal Clinical Decision Support
//!
//! PrenaTrack turns a small set of prenatal facts (birth date, LMP,
//! ultrasound dating, obstetric history, comorbidities and danger signs)
//! into gestational age, due date, risk factors and care recommendations.
//!
//! ## Overview
//!
//! This library provides:
//! - **Dating** of a pregnancy by LMP (Naegele's rule) and by ultrasound
//! - **Reconciliation** of the two into one authoritative gestational age
//! - **Risk stratification** from age, gravidity/parity and history
//! - **Screening and supplement** recommendations by gestational age
//! - **Danger sign** triage with urgent-referral detection
//!
//! Every clinical computation is a pure function of the patient snapshot
//! and an explicit evaluation date.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Clinical decision logic (dating, reconciliation, rule engines)
//! - [`domain`] - Value types, errors and the patient snapshot
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use prenatrack::core::Assessment;
//! use prenatrack::domain::{Comorbidity, PatientInput};
//! use chrono::NaiveDate;
//!
//! let patient = PatientInput::builder()
//!     .birth_date(NaiveDate::from_ymd_opt(1986, 2, 1).unwrap())
//!     .lmp(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .gravidity(3)
//!     .parity(2)
//!     .comorbidity(Comorbidity::ChronicHypertension)
//!     .build()?;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! let assessment = Assessment::evaluate(&patient, today);
//!
//! println!("AOG: {}", assessment.dating.best_aog.unwrap());
//! for risk in &assessment.risks {
//!     println!("{} [{}]", risk.factor, risk.level);
//! }
//! # Ok::<(), prenatrack::domain::PrenatalError>(())
//! ```
//!
//! ## Error Handling
//!
//! Errors only arise at the edges (files, configuration, free-text counts)
//! and use [`domain::PrenatalError`]. The clinical core never fails; data it
//! cannot compute comes back as `None`.
//!
//! ```rust
//! use prenatrack::domain::{parse_count, PrenatalError};
//!
//! assert_eq!(parse_count("parity", " ").unwrap(), None);
//! assert!(matches!(
//!     parse_count("parity", "two"),
//!     Err(PrenatalError::InvalidInput { .. })
//! ));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
