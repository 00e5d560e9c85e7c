//! Assess command implementation
//!
//! This module implements the `assess` command, which loads a patient file
//! and prints the full clinical assessment.

use crate::cli::resolve_today;
use crate::config::{load_config_or_default, OutputFormat};
use crate::core::Assessment;
use crate::domain::{load_patient, DangerSeverity, DangerSign, RiskLevel};
use crate::{log_assessment_complete, log_assessment_start, log_error_with_context};
use chrono::NaiveDate;
use clap::Args;
use std::fmt::Write as _;

/// Arguments for the assess command
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Patient file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    pub patient: String,

    /// Evaluation date (YYYY-MM-DD), defaults to assessment.as_of or today
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Output format (text, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Additional danger sign flagged at this visit (repeatable)
    #[arg(long = "danger-sign", value_name = "ID")]
    pub danger_signs: Vec<DangerSign>,
}

impl AssessArgs {
    /// Execute the assess command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        let today = resolve_today(self.today, &config);
        log_assessment_start!(self.patient, today);

        let mut patient = match load_patient(&self.patient) {
            Ok(p) => p,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load patient file");
                eprintln!("❌ Failed to load patient file: {}", self.patient);
                eprintln!("   Error: {e}");
                if e.is_input_error() {
                    eprintln!("   Dates are YYYY-MM-DD and counts are whole numbers or blank");
                }
                return Ok(3);
            }
        };
        patient.danger_signs.extend(self.danger_signs.iter().copied());

        let assessment = Assessment::evaluate(&patient, today);
        log_assessment_complete!(&assessment);

        let format = self.format.unwrap_or(config.assessment.output_format);
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
            OutputFormat::Text => print!("{}", render_text(&assessment)),
        }

        Ok(0)
    }
}

fn risk_marker(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "🔴",
        RiskLevel::Moderate => "🟠",
        RiskLevel::Low => "🟢",
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Renders an assessment as a plain-text report
pub fn render_text(assessment: &Assessment) -> String {
    let mut out = String::new();
    let dating = &assessment.dating;

    // Writing to a String cannot fail
    let _ = writeln!(out, "🤰 Prenatal Assessment ({})", assessment.evaluated_on);
    let _ = writeln!(out);

    if assessment.urgent_referral {
        let _ = writeln!(out, "🚨 URGENT REFERRAL: critical danger sign present");
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Patient:");
    let _ = writeln!(out, "  Age: {}", or_dash(assessment.age));
    let _ = writeln!(
        out,
        "  Obstetric score: {}",
        or_dash(assessment.obstetric_notation.as_ref())
    );
    if !assessment.comorbidities.is_empty() {
        let _ = writeln!(out, "  Comorbidities: {}", assessment.comorbidities.join(", "));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Dating:");
    let _ = writeln!(
        out,
        "  AOG by LMP: {}  (EDC {})",
        or_dash(dating.lmp_aog),
        or_dash(dating.edc_lmp)
    );
    let _ = writeln!(
        out,
        "  AOG by UTZ: {}  (EDC {})",
        or_dash(dating.utz_aog),
        or_dash(dating.edc_utz)
    );
    let _ = writeln!(out, "  Best AOG: {}", or_dash(dating.best_aog));
    let _ = writeln!(out, "  Best EDC: {}", or_dash(dating.best_edc));
    let _ = writeln!(out, "  Trimester: {}", or_dash(dating.trimester));
    let _ = writeln!(out);

    if !assessment.danger_alerts.is_empty() {
        let _ = writeln!(out, "Danger signs:");
        for alert in &assessment.danger_alerts {
            let marker = match alert.severity {
                DangerSeverity::Critical => "🚨",
                DangerSeverity::Warning => "⚠️ ",
            };
            let _ = writeln!(out, "  {} {} ({})", marker, alert.label, alert.severity);
            let _ = writeln!(out, "     {}", alert.action);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Risk factors:");
    if assessment.risks.is_empty() {
        let _ = writeln!(out, "  None identified");
    }
    for risk in &assessment.risks {
        let _ = writeln!(out, "  {} {} [{}]", risk_marker(risk.level), risk.factor, risk.level);
    }
    let _ = writeln!(out);

    if !assessment.is_dated() {
        let _ = writeln!(
            out,
            "ℹ️  Enter an LMP or ultrasound to get screening and supplement recommendations"
        );
        return out;
    }

    let _ = writeln!(out, "Screenings:");
    for panel in &assessment.screenings {
        let _ = writeln!(out, "  {} ({})", panel.category, panel.timing);
        for test in &panel.tests {
            let _ = writeln!(out, "    - {}", test);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Supplements:");
    for supplement in &assessment.supplements {
        let _ = writeln!(out, "  💊 {}: {}", supplement.name, supplement.dose);
        let _ = writeln!(out, "     {}", supplement.timing);
        let _ = writeln!(out, "     {}", supplement.notes);
    }

    out
}
