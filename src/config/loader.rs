//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{OutputFormat, PrenatalConfig};
use crate::domain::errors::PrenatalError;
use crate::domain::result::Result;
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PrenatalConfig
/// 4. Applies environment variable overrides (PRENATRACK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use prenatrack::config::loader::load_config;
///
/// let config = load_config("prenatrack.toml").expect("Failed to load config");
/// println!("{}", config.assessment.output_format);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PrenatalConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PrenatalError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PrenatalError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PrenatalConfig = toml::from_str(&contents)
        .map_err(|e| PrenatalError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration, falling back to defaults when the file does not exist
///
/// Environment overrides and validation still apply to the defaults. A file
/// that exists but is broken is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PrenatalConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = PrenatalConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut PrenatalConfig) -> Result<()> {
    apply_env_overrides(config)?;
    config.validate().map_err(|e| {
        PrenatalError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PrenatalError::Other(format!("Invalid substitution pattern: {}", e)))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        lines.push(processed.into_owned());
    }

    if !missing_vars.is_empty() {
        return Err(PrenatalError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using PRENATRACK_* prefix
///
/// Environment variables follow the pattern: PRENATRACK_<SECTION>_<KEY>
/// For example: PRENATRACK_ASSESSMENT_AS_OF, PRENATRACK_LOGGING_LOCAL_PATH
fn apply_env_overrides(config: &mut PrenatalConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PRENATRACK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Assessment overrides
    if let Ok(val) = std::env::var("PRENATRACK_ASSESSMENT_OUTPUT_FORMAT") {
        config.assessment.output_format = val
            .parse::<OutputFormat>()
            .map_err(PrenatalError::Configuration)?;
    }
    if let Ok(val) = std::env::var("PRENATRACK_ASSESSMENT_AS_OF") {
        let trimmed = val.trim();
        config.assessment.as_of = if trimmed.is_empty() {
            None
        } else {
            Some(NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
                PrenatalError::Configuration(format!(
                    "Invalid PRENATRACK_ASSESSMENT_AS_OF '{}': {}",
                    trimmed, e
                ))
            })?)
        };
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PRENATRACK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PRENATRACK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PRENATRACK_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
