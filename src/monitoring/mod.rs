/*!
 * Monitoring
 * Structured logging setup
 */

mod tracer;

pub use tracer::{generate_run_id, init_tracing};
