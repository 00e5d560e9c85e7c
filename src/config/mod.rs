//! Configuration management for PrenaTrack.
//!
//! # Overview
//!
//! PrenaTrack reads an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PRENATRACK_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use prenatrack::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("prenatrack.toml")?;
//!
//! println!("Log level: {}", config.application.log_level);
//! println!("Output: {}", config.assessment.output_format);
//! if let Some(as_of) = config.assessment.as_of {
//!     println!("Evaluating as of {}", as_of);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`AssessmentConfig`] - Output format and fixed evaluation date
//! - [`LoggingConfig`] - Local JSON log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [assessment]
//! output_format = "text"
//! as_of = "2024-04-01"
//!
//! [logging]
//! local_enabled = true
//! local_path = "${PRENATRACK_LOG_DIR}"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, AssessmentConfig, LoggingConfig, OutputFormat, PrenatalConfig,
};
