/*!
 * Reporting Types
 * Per-tick snapshot and output selection
 */

use crate::core::types::Tick;
use crate::process::ProcessStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of every process, in registration order, at one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: Tick,
    pub statuses: Vec<ProcessStatus>,
}

impl Snapshot {
    pub fn new(time: Tick, statuses: Vec<ProcessStatus>) -> Self {
        Self { time, statuses }
    }

    pub fn running(&self) -> impl Iterator<Item = usize> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .filter(|(_, status)| **status == ProcessStatus::Running)
            .map(|(pid, _)| pid)
    }
}

/// Renders `<time> <s1> ... <sn>`
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        for status in &self.statuses {
            write!(f, " {}", status)?;
        }
        Ok(())
    }
}

/// Where the trace goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    Console,
    File,
    Both,
}

impl OutputMode {
    /// Parse an interactive answer (`c`, `f`, `b` or the full word)
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "" | "c" | "console" => Some(Self::Console),
            "f" | "file" => Some(Self::File),
            "b" | "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub const fn writes_console(&self) -> bool {
        matches!(self, Self::Console | Self::Both)
    }

    pub const fn writes_file(&self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Trace encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TraceFormat {
    #[default]
    Text,
    Json,
}
