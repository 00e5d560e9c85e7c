//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file and, optionally, a sample patient file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "prenatrack.toml")]
    pub output: String,

    /// Also write a sample patient file to this path
    #[arg(long, value_name = "FILE")]
    pub patient_template: Option<String>,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing PrenaTrack configuration");
        println!();

        let mut targets = vec![(self.output.as_str(), SAMPLE_CONFIG)];
        if let Some(ref patient) = self.patient_template {
            targets.push((patient.as_str(), SAMPLE_PATIENT));
        }

        if !self.force {
            if let Some((path, _)) = targets.iter().find(|(path, _)| Path::new(path).exists()) {
                println!("❌ File already exists: {path}");
                println!("   Use --force to overwrite");
                return Ok(2);
            }
        }

        for (path, contents) in &targets {
            if let Err(e) = fs::write(path, contents) {
                println!("❌ Failed to write {path}");
                println!("   Error: {e}");
                return Ok(5);
            }
            println!("✅ Created: {path}");
        }

        println!();
        println!("Next steps:");
        println!("  1. Edit {} with your settings", self.output);
        println!("  2. Validate configuration: prenatrack validate-config");
        match self.patient_template {
            Some(ref patient) => println!("  3. Run an assessment: prenatrack assess --patient {patient}"),
            None => println!("  3. Run an assessment: prenatrack assess --patient <FILE>"),
        }
        println!();
        Ok(0)
    }
}

/// Sample configuration written by `init`
pub const SAMPLE_CONFIG: &str = r#"# PrenaTrack Configuration File
# Prenatal Clinical Decision Support

[application]
log_level = "info"  # trace | debug | info | warn | error

[assessment]
output_format = "text"  # text | json
# Fix the evaluation date instead of using the system clock
# as_of = "2024-04-01"

[logging]
local_enabled = false
local_path = "/var/log/prenatrack"
local_rotation = "daily"  # daily | hourly
"#;

/// Sample patient file written by `init --patient-template`
pub const SAMPLE_PATIENT: &str = r#"# PrenaTrack patient file
# Dates are YYYY-MM-DD. Leave a field out if it is unknown.

birth_date = "1992-03-14"
lmp = "2024-01-01"

# Dating ultrasound (optional)
utz_date = "2024-03-01"
utz_weeks = 8
utz_days = 4

# Comorbidity ids, e.g. chronic_hypertension, gestational_diabetes,
# rh_negative, previous_cesarean (short ids like cht, gdm, rh_neg also work)
comorbidities = ["rh_negative"]

# Danger signs flagged at this visit, e.g. bleeding, headache, fever
danger_signs = []

[obstetric]
gravidity = 2
parity = 1
term = 1
preterm = 0
abortion = 0
living = 1
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::domain::{load_patient, Comorbidity};
    use tempfile::TempDir;

    #[test]
    fn test_sample_files_load() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("prenatrack.toml");
        let patient_path = dir.path().join("patient.toml");

        let args = InitArgs {
            output: config_path.to_string_lossy().to_string(),
            patient_template: Some(patient_path.to_string_lossy().to_string()),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 0);

        let config = load_config(&config_path).unwrap();
        assert!(config.assessment.as_of.is_none());

        let patient = load_patient(&patient_path).unwrap();
        assert!(patient.comorbidities.contains(Comorbidity::RhNegative));
        assert_eq!(
            patient.obstetric.notation().as_deref(),
            Some("G2P1 (1-0-0-1)")
        );
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("prenatrack.toml");
        fs::write(&config_path, "# existing").unwrap();

        let mut args = InitArgs {
            output: config_path.to_string_lossy().to_string(),
            patient_template: None,
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# existing");

        args.force = true;
        assert_eq!(args.execute().unwrap(), 0);
        assert_eq!(fs::read_to_string(&config_path).unwrap(), SAMPLE_CONFIG);
    }
}
