//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for PrenaTrack using clap.

pub mod commands;

use crate::config::PrenatalConfig;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// PrenaTrack - Prenatal Clinical Decision Support
#[derive(Parser, Debug)]
#[command(name = "prenatrack")]
#[command(version, about, long_about = None)]
#[command(author = "PrenaTrack Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "prenatrack.toml", env = "PRENATRACK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PRENATRACK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full assessment for a patient file
    Assess(commands::assess::AssessArgs),

    /// Compute AOG and EDC from LMP and/or ultrasound
    Dating(commands::dating::DatingArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a sample configuration and patient file
    Init(commands::init::InitArgs),
}

/// Picks the evaluation date: explicit flag, then `assessment.as_of`, then the local clock
pub fn resolve_today(flag: Option<NaiveDate>, config: &PrenatalConfig) -> NaiveDate {
    flag.or(config.assessment.as_of)
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}
