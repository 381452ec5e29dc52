/*!
 * Scheduler Configuration
 * Aging increments and the shared quantum, loadable from TOML
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{DEFAULT_ACCEPTED_INCREMENT, DEFAULT_NEW_INCREMENT, DEFAULT_QUANTUM};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters consumed by the admission engine and tick loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Priority gained per tick by each New-queue member
    pub new_increment: u64,
    /// Priority gained per tick by each Accepted-queue member
    pub accepted_increment: u64,
    /// Ticks a process may hold the Accepted head before rotating
    pub quantum: u64,
    /// Optional safety stop; `None` runs until every process finishes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            new_increment: DEFAULT_NEW_INCREMENT,
            accepted_increment: DEFAULT_ACCEPTED_INCREMENT,
            quantum: DEFAULT_QUANTUM,
            max_ticks: None,
        }
    }
}

impl SchedulerConfig {
    pub fn new(new_increment: u64, accepted_increment: u64) -> Self {
        Self {
            new_increment,
            accepted_increment,
            ..Self::default()
        }
    }

    pub fn with_new_increment(mut self, increment: u64) -> Self {
        self.new_increment = increment;
        self
    }

    pub fn with_accepted_increment(mut self, increment: u64) -> Self {
        self.accepted_increment = increment;
        self
    }

    pub fn with_quantum(mut self, quantum: u64) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.quantum == 0 {
            return Err(ConfigError::InvalidQuantum(self.quantum));
        }
        Ok(self)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
