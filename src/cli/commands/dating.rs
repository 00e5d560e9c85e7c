//! Dating command implementation
//!
//! Quick AOG/EDC calculator that needs no patient file.

use crate::cli::resolve_today;
use crate::config::load_config_or_default;
use crate::core::Dating;
use crate::domain::{parse_count, PatientInput, PrenatalError};
use chrono::NaiveDate;
use clap::Args;

/// Arguments for the dating command
#[derive(Args, Debug)]
pub struct DatingArgs {
    /// First day of the last menstrual period (YYYY-MM-DD)
    #[arg(long)]
    pub lmp: Option<NaiveDate>,

    /// Date of the dating ultrasound (YYYY-MM-DD)
    #[arg(long)]
    pub utz_date: Option<NaiveDate>,

    /// Completed weeks reported by the ultrasound
    #[arg(long)]
    pub utz_weeks: Option<String>,

    /// Extra days reported by the ultrasound (0-6)
    #[arg(long)]
    pub utz_days: Option<String>,

    /// Evaluation date (YYYY-MM-DD), defaults to assessment.as_of or today
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl DatingArgs {
    /// Builds the patient snapshot the dating step needs
    fn to_patient(&self) -> crate::domain::Result<PatientInput> {
        let patient = PatientInput {
            lmp: self.lmp,
            utz_date: self.utz_date,
            utz_weeks: parse_optional("utz_weeks", self.utz_weeks.as_deref())?,
            utz_days: parse_optional("utz_days", self.utz_days.as_deref())?,
            ..PatientInput::default()
        };
        patient.validate()?;
        Ok(patient)
    }

    /// Execute the dating command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        let patient = match self.to_patient() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("❌ Invalid dating input");
                eprintln!("   Error: {e}");
                return Ok(3);
            }
        };

        let today = resolve_today(self.today, &config);
        let dating = Dating::compute(&patient, today);
        tracing::info!(%today, best_aog = ?dating.best_aog.map(|b| b.to_string()), "Dating computed");

        println!("📅 Dating as of {today}");
        println!();
        print_source("LMP", dating.lmp_aog.map(|a| a.to_string()), dating.edc_lmp);
        print_source("UTZ", dating.utz_aog.map(|a| a.to_string()), dating.edc_utz);
        println!();

        match dating.best_aog {
            Some(best) => {
                println!("✅ Best AOG: {best}");
                if let Some(edc) = dating.best_edc {
                    println!("   Best EDC: {edc}");
                }
                if let Some(trimester) = dating.trimester {
                    println!("   Trimester: {trimester}");
                }
            }
            None => {
                println!("ℹ️  Not enough information to date the pregnancy");
                println!("   Provide --lmp, or --utz-date with --utz-weeks");
            }
        }

        Ok(0)
    }
}

fn parse_optional(field: &str, raw: Option<&str>) -> Result<Option<u32>, PrenatalError> {
    match raw {
        Some(raw) => parse_count(field, raw),
        None => Ok(None),
    }
}

fn print_source(name: &str, aog: Option<String>, edc: Option<NaiveDate>) {
    match (aog, edc) {
        (Some(aog), Some(edc)) => println!("  {name}: {aog}  (EDC {edc})"),
        (None, Some(edc)) => println!("  {name}: not yet dated  (EDC {edc})"),
        _ => println!("  {name}: -"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> DatingArgs {
        DatingArgs {
            lmp: None,
            utz_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            utz_weeks: Some("8".to_string()),
            utz_days: None,
            today: None,
        }
    }

    #[test]
    fn test_to_patient_lenient_counts() {
        let mut args = args();
        args.utz_days = Some("  ".to_string());
        let patient = args.to_patient().unwrap();
        assert_eq!(patient.utz_weeks, Some(8));
        assert_eq!(patient.utz_days, None);
    }

    #[test]
    fn test_to_patient_rejects_garbage() {
        let mut args = args();
        args.utz_weeks = Some("eight".to_string());
        let err = args.to_patient().unwrap_err();
        assert!(err.to_string().contains("utz_weeks"));
    }

    #[test]
    fn test_to_patient_rejects_seven_days() {
        let mut args = args();
        args.utz_days = Some("7".to_string());
        assert!(matches!(
            args.to_patient(),
            Err(PrenatalError::Validation(_))
        ));
    }
}
