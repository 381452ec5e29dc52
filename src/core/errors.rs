/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input record errors, raised before the simulation starts
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum LoadError {
    #[error("Invalid record on line {line}: {reason}")]
    #[diagnostic(
        code(loader::invalid_record),
        help("Each record must be `name totalService arrival` with non-negative integers.")
    )]
    InvalidRecord { line: usize, reason: String },

    #[error("Failed to read input: {0}")]
    #[diagnostic(
        code(loader::io_error),
        help("Check that the input file exists and is readable.")
    )]
    Io(String),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

/// Scheduler configuration errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid quantum: {0}")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("The quantum must be a positive number of ticks.")
    )]
    InvalidQuantum(u64),

    #[error("Failed to parse configuration: {0}")]
    #[diagnostic(
        code(config::parse_error),
        help("Valid keys: new_increment, accepted_increment, quantum, max_ticks.")
    )]
    Parse(String),

    #[error("Failed to read configuration: {0}")]
    #[diagnostic(code(config::io_error))]
    Io(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Trace output errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ReportError {
    #[error("Failed to write trace: {0}")]
    #[diagnostic(
        code(report::io_error),
        help("Check the output path and available disk space.")
    )]
    Io(String),

    #[error("Failed to encode trace record: {0}")]
    #[diagnostic(code(report::encode_error))]
    Encode(String),
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Encode(err.to_string())
    }
}

/// Errors that abort a running simulation
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Reporter failed: {0}")]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),

    #[error("Simulation did not finish within {limit} ticks")]
    #[diagnostic(
        code(simulation::tick_limit_exceeded),
        help("Raise or remove max_ticks in the scheduler configuration.")
    )]
    TickLimitExceeded { limit: u64 },
}

/// Unified error type for the command line front end
#[derive(Error, Debug, Diagnostic)]
pub enum AppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Simulation(#[from] SimulationError),

    #[error("Invalid output mode answer: {0:?}")]
    #[diagnostic(
        code(cli::invalid_output_mode),
        help("Answer c (console), f (file) or b (both).")
    )]
    InvalidOutputMode(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(cli::io_error))]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
