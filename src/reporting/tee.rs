/*!
 * Tee Reporter
 * Forwards every call to two reporters, first error wins
 */

use super::traits::Reporter;
use super::types::Snapshot;
use crate::core::errors::ReportError;

pub struct TeeReporter<A, B> {
    first: A,
    second: B,
}

impl<A: Reporter, B: Reporter> TeeReporter<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Reporter, B: Reporter> Reporter for TeeReporter<A, B> {
    fn header(&mut self, names: &[&str]) -> Result<(), ReportError> {
        self.first.header(names)?;
        self.second.header(names)
    }

    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        self.first.snapshot(snapshot)?;
        self.second.snapshot(snapshot)
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.first.finish()?;
        self.second.finish()
    }
}
