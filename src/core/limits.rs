/*!
 * Defaults and Constants
 *
 * Centralized location for configuration defaults and environment variable names.
 */

// =============================================================================
// SCHEDULER DEFAULTS
// =============================================================================

/// Shared quantum when none is configured
/// Every accepted process may hold the CPU for one tick before rotating
pub const DEFAULT_QUANTUM: u64 = 1;

/// Priority gained per tick while waiting in the New queue
pub const DEFAULT_NEW_INCREMENT: u64 = 0;

/// Priority gained per tick while sitting in the Accepted queue
pub const DEFAULT_ACCEPTED_INCREMENT: u64 = 0;

// =============================================================================
// OUTPUT
// =============================================================================

/// Trace file written when file output is selected without an explicit path
pub const DEFAULT_TRACE_FILE: &str = "scheduler_trace.txt";

/// First column label of the trace header
pub const TRACE_TIME_LABEL: &str = "time";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Enables JSON log output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "SCHED_TRACE_JSON";
