/*!
 * Reporting Module
 * Trace sinks fed by the tick loop
 */

pub mod json;
pub mod recorder;
pub mod tee;
pub mod text;
pub mod traits;
pub mod types;

// Re-export public API
pub use json::JsonLinesWriter;
pub use recorder::TraceRecorder;
pub use tee::TeeReporter;
pub use text::TraceWriter;
pub use traits::Reporter;
pub use types::{OutputMode, Snapshot, TraceFormat};
