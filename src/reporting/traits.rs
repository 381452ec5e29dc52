/*!
 * Reporter Trait
 * Sink for the header and the per-tick snapshots
 */

use super::types::Snapshot;
use crate::core::errors::ReportError;

/// Receives the trace synchronously from the tick loop.
///
/// Any error aborts the simulation.
pub trait Reporter {
    /// Called once, before the first tick, with names in registration order
    fn header(&mut self, names: &[&str]) -> Result<(), ReportError>;

    /// Called once per tick
    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError>;

    /// Called after the last tick
    fn finish(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn header(&mut self, names: &[&str]) -> Result<(), ReportError> {
        (**self).header(names)
    }

    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        (**self).snapshot(snapshot)
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        (**self).finish()
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn header(&mut self, names: &[&str]) -> Result<(), ReportError> {
        (**self).header(names)
    }

    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        (**self).snapshot(snapshot)
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        (**self).finish()
    }
}
