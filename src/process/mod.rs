/*!
 * Process Module
 * Process records, run-time state and the registry that owns them
 */

pub mod registry;
pub mod types;

// Re-export public API
pub use registry::ProcessRegistry;
pub use types::{Process, ProcessRecord, ProcessStatus};
