/*!
 * Admission Scheduler Library
 * Round-robin CPU scheduling simulation with a two-stage admission policy
 *
 * Arriving processes wait in a New queue and are promoted into the
 * round-robin Accepted queue once their accrued priority reaches that of
 * some accepted process. The tick loop produces a deterministic per-tick
 * trace of process states.
 */

pub mod cli;
pub mod core;
pub mod loader;
pub mod monitoring;
pub mod process;
pub mod reporting;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{AppError, ConfigError, LoadError, ReportError, SimulationError};
pub use loader::{load_records, parse_records};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessRecord, ProcessRegistry, ProcessStatus};
pub use reporting::{Reporter, Snapshot, TraceRecorder};
pub use scheduler::{simulate, SchedulerConfig, Simulation, SimulationSummary};
