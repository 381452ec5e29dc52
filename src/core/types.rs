/*!
 * Core Types
 * Common scalar types shared by the registry, the admission engine and the tick loop
 */

/// Stable process identifier (index into the registry, never reused)
pub type ProcessId = usize;

/// One unit of simulated time
pub type Tick = u64;

/// Accrued aging counter, only ever grows
pub type Priority = u64;

/// Units of CPU service owed or consumed
pub type ServiceUnits = u64;
