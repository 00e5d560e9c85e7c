//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the PrenaTrack configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Output Format: {}", config.assessment.output_format);
        match config.assessment.as_of {
            Some(as_of) => println!("  Evaluation Date: {as_of} (fixed)"),
            None => println!("  Evaluation Date: system clock"),
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_config_error() {
        let code = ValidateArgs {}
            .execute("definitely-missing-prenatrack.toml")
            .unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_bad_rotation_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlocal_rotation = \"weekly\"").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(ValidateArgs {}.execute(&path).unwrap(), 2);
    }
}
