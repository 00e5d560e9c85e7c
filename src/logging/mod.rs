//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use prenatrack::logging::init_logging;
//! use prenatrack::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an assessment
///
/// # Example
///
/// ```no_run
/// use prenatrack::log_assessment_start;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// log_assessment_start!("patient.toml", today);
/// ```
#[macro_export]
macro_rules! log_assessment_start {
    ($source:expr, $today:expr) => {
        tracing::info!(
            source = %$source,
            today = %$today,
            "Starting assessment"
        );
    };
}

/// Log the completion of an assessment
///
/// # Example
///
/// ```no_run
/// use prenatrack::log_assessment_complete;
/// use prenatrack::core::Assessment;
/// use prenatrack::domain::PatientInput;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let assessment = Assessment::evaluate(&PatientInput::default(), today);
/// log_assessment_complete!(&assessment);
/// ```
#[macro_export]
macro_rules! log_assessment_complete {
    ($assessment:expr) => {
        tracing::info!(
            dated = $assessment.is_dated(),
            risks = $assessment.risks.len(),
            screenings = $assessment.screenings.len(),
            supplements = $assessment.supplements.len(),
            danger_alerts = $assessment.danger_alerts.len(),
            urgent_referral = $assessment.urgent_referral,
            "Assessment completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use prenatrack::log_error_with_context;
/// use prenatrack::domain::PrenatalError;
///
/// let error = PrenatalError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
