/*!
 * Process Registry
 * Arena of processes addressed by stable integer id
 *
 * Static attributes are fixed at registration. Only the run-time counters
 * (remaining service, quantum, priority, status) change afterwards, and only
 * through the methods below.
 *
 * # Panics
 * Every id-taking method panics on an out-of-range id. Ids are handed out by
 * the registry itself, so an unknown id is a programming error.
 */

use super::types::{Process, ProcessRecord, ProcessStatus};
use crate::core::types::{Priority, ProcessId, Tick};
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Register records in order; the record index becomes the process id
    pub fn new(records: impl IntoIterator<Item = ProcessRecord>, quantum: u64) -> Self {
        let processes = records
            .into_iter()
            .map(|record| Process::from_record(record, quantum))
            .collect();
        Self { processes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ProcessId) -> &Process {
        &self.processes[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProcessId, &Process)> {
        self.processes.iter().enumerate()
    }

    /// Names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.processes.iter().map(|p| p.name.as_str()).collect()
    }

    /// Statuses in registration order
    pub fn statuses(&self) -> Vec<ProcessStatus> {
        self.processes.iter().map(|p| p.status).collect()
    }

    /// Termination predicate; vacuously true for an empty registry
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }

    /// Ids arriving at `time` that still need service, ascending
    pub fn arrivals_at(&self, time: Tick) -> Vec<ProcessId> {
        self.iter()
            .filter(|(_, p)| p.arrival == time && p.status == ProcessStatus::NotArrived)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn set_status(&mut self, id: ProcessId, status: ProcessStatus) {
        let process = &mut self.processes[id];
        if process.status != status {
            trace!(pid = id, from = ?process.status, to = ?status, "status change");
            process.status = status;
        }
    }

    pub fn decrement_service(&mut self, id: ProcessId) {
        let process = &mut self.processes[id];
        debug_assert!(process.remaining_service > 0, "serviced a drained process");
        process.remaining_service = process.remaining_service.saturating_sub(1);
    }

    pub fn decrement_quantum(&mut self, id: ProcessId) {
        let process = &mut self.processes[id];
        process.quantum_remaining = process.quantum_remaining.saturating_sub(1);
    }

    pub fn reset_quantum(&mut self, id: ProcessId, value: u64) {
        self.processes[id].quantum_remaining = value;
    }

    pub fn add_priority(&mut self, id: ProcessId, delta: Priority) {
        let process = &mut self.processes[id];
        process.priority = process.priority.saturating_add(delta);
    }

    /// Remember the first tick of service; later calls are ignored
    pub fn record_first_run(&mut self, id: ProcessId, time: Tick) {
        self.processes[id].first_run.get_or_insert(time);
    }

    /// Mark retired at `time`
    pub fn mark_finished(&mut self, id: ProcessId, time: Tick) {
        self.set_status(id, ProcessStatus::Finished);
        self.processes[id].finished_at = Some(time);
    }
}
