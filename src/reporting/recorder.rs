/*!
 * In-Memory Trace Recorder
 */

use super::traits::Reporter;
use super::types::Snapshot;
use crate::core::errors::ReportError;

/// Keeps the header and every snapshot for later inspection
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    names: Vec<String>,
    snapshots: Vec<Snapshot>,
    finished: bool,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }

    /// Trace lines without the header
    pub fn lines(&self) -> Vec<String> {
        self.snapshots.iter().map(ToString::to_string).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Reporter for TraceRecorder {
    fn header(&mut self, names: &[&str]) -> Result<(), ReportError> {
        self.names = names.iter().map(|name| name.to_string()).collect();
        Ok(())
    }

    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.finished = true;
        Ok(())
    }
}
