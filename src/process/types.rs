/*!
 * Process Types
 * Input records, run-time process state and status symbols
 */

use crate::core::types::{Priority, ServiceUnits, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process status as reported in every trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Arrival tick not reached yet
    NotArrived,
    /// Sitting in the New or Accepted queue without the CPU
    Waiting,
    /// Head of the Accepted queue and serviced this tick
    Running,
    /// Retired; never re-enters a queue
    Finished,
}

impl ProcessStatus {
    /// Single-character trace symbol
    #[inline]
    pub const fn symbol(&self) -> char {
        match self {
            Self::NotArrived => '-',
            Self::Waiting => 'W',
            Self::Running => 'R',
            Self::Finished => 'F',
        }
    }

    #[inline]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One validated input record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub name: String,
    pub total_service: ServiceUnits,
    pub arrival: Tick,
}

impl ProcessRecord {
    pub fn new(name: impl Into<String>, total_service: ServiceUnits, arrival: Tick) -> Self {
        Self {
            name: name.into(),
            total_service,
            arrival,
        }
    }
}

/// Registry entry: static attributes plus the mutable run-time counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pub name: String,
    pub total_service: ServiceUnits,
    pub arrival: Tick,
    pub remaining_service: ServiceUnits,
    pub priority: Priority,
    pub quantum_remaining: u64,
    pub status: ProcessStatus,
    /// First tick this process was serviced
    pub first_run: Option<Tick>,
    /// Tick at which the process was retired
    pub finished_at: Option<Tick>,
}

impl Process {
    /// Build the initial run-time state for a record.
    ///
    /// A record with no service owed is finished at registration and never
    /// enters either queue.
    pub fn from_record(record: ProcessRecord, quantum: u64) -> Self {
        let finished = record.total_service == 0;
        Self {
            remaining_service: record.total_service,
            total_service: record.total_service,
            arrival: record.arrival,
            name: record.name,
            priority: 0,
            quantum_remaining: quantum,
            status: if finished {
                ProcessStatus::Finished
            } else {
                ProcessStatus::NotArrived
            },
            first_run: None,
            finished_at: finished.then_some(record.arrival),
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }
}
