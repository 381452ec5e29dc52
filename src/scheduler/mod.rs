/*!
 * Scheduler Module
 * Two-stage admission round-robin scheduling and the discrete-time driver
 */

pub mod admission;
pub mod config;
pub mod queue;
pub mod simulation;
pub mod stats;

// Re-export public API
pub use admission::{AdmissionEngine, AdmitOutcome, PromoteOutcome};
pub use config::SchedulerConfig;
pub use queue::ProcessQueue;
pub use simulation::{simulate, Simulation, SimulationState};
pub use stats::{ProcessSummary, SimulationStats, SimulationSummary};
