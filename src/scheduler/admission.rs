/*!
 * Queue & Admission Engine
 * New/Accepted queues and the rules that move process ids between them
 *
 * Arriving processes wait in New until their priority catches up with some
 * member of Accepted. Accepted is served round-robin from its head. Every
 * operation mutates only the two queues and the registry counters.
 */

use super::config::SchedulerConfig;
use super::queue::ProcessQueue;
use crate::core::types::{ProcessId, Tick};
use crate::process::{ProcessRegistry, ProcessStatus};
use tracing::{debug, trace};

/// Where arrivals went during one `admit` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdmitOutcome {
    pub direct: u64,
    pub queued: u64,
}

/// New -> Accepted moves during one `promote_eligible` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromoteOutcome {
    pub by_priority: u64,
    pub fallback: u64,
}

impl PromoteOutcome {
    pub fn total(&self) -> u64 {
        self.by_priority + self.fallback
    }
}

#[derive(Debug, Clone)]
pub struct AdmissionEngine {
    new_queue: ProcessQueue,
    accepted: ProcessQueue,
    new_increment: u64,
    accepted_increment: u64,
    quantum: u64,
}

impl AdmissionEngine {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            new_queue: ProcessQueue::new(),
            accepted: ProcessQueue::new(),
            new_increment: config.new_increment,
            accepted_increment: config.accepted_increment,
            quantum: config.quantum,
        }
    }

    /// Holding queue, in admission order
    pub fn new_queue(&self) -> &ProcessQueue {
        &self.new_queue
    }

    /// Round-robin queue; head is the process being served
    pub fn accepted(&self) -> &ProcessQueue {
        &self.accepted
    }

    pub fn head(&self) -> Option<ProcessId> {
        self.accepted.front()
    }

    /// Place every process arriving at `time`, in ascending id order.
    ///
    /// The empty-queues check is repeated per arrival, so only the first
    /// arrival of a tick can take the direct path.
    pub fn admit(&mut self, registry: &mut ProcessRegistry, time: Tick) -> AdmitOutcome {
        let mut outcome = AdmitOutcome::default();
        for pid in registry.arrivals_at(time) {
            if self.new_queue.is_empty() && self.accepted.is_empty() {
                self.accepted.push_back(pid);
                registry.set_status(pid, ProcessStatus::Running);
                outcome.direct += 1;
                debug!(pid, tick = time, "admitted directly to accepted queue");
            } else {
                self.new_queue.push_back(pid);
                registry.set_status(pid, ProcessStatus::Waiting);
                outcome.queued += 1;
                debug!(pid, tick = time, "admitted to new queue");
            }
        }
        outcome
    }

    /// Apply one tick of aging to every queued process, Accepted head included
    pub fn age_queues(&self, registry: &mut ProcessRegistry) {
        for pid in self.new_queue.iter() {
            registry.add_priority(pid, self.new_increment);
        }
        for pid in self.accepted.iter() {
            registry.add_priority(pid, self.accepted_increment);
        }
    }

    /// Single pass over New in its current order.
    ///
    /// A New member moves to the Accepted tail as soon as any Accepted member
    /// (including ones promoted earlier in this pass) has priority less than
    /// or equal to its own. If Accepted is still empty afterwards, the New
    /// front is promoted unconditionally.
    pub fn promote_eligible(&mut self, registry: &ProcessRegistry) -> PromoteOutcome {
        let mut outcome = PromoteOutcome::default();

        for pid in self.new_queue.take_all() {
            let priority = registry.get(pid).priority;
            let eligible = self
                .accepted
                .iter()
                .any(|accepted| registry.get(accepted).priority <= priority);

            if eligible {
                self.accepted.push_back(pid);
                outcome.by_priority += 1;
                debug!(pid, priority, "promoted to accepted queue");
            } else {
                self.new_queue.push_back(pid);
            }
        }

        if self.accepted.is_empty() {
            if let Some(pid) = self.new_queue.pop_front() {
                self.accepted.push_back(pid);
                outcome.fallback += 1;
                debug!(pid, "promoted into empty accepted queue");
            }
        }

        outcome
    }

    /// Give the Accepted head one tick of CPU. Returns the serviced id.
    ///
    /// A head that reaches zero remaining service stays queued until the
    /// next tick's retirement step.
    pub fn service_head(&self, registry: &mut ProcessRegistry, time: Tick) -> Option<ProcessId> {
        let pid = self.accepted.front()?;
        registry.decrement_service(pid);
        registry.decrement_quantum(pid);
        registry.set_status(pid, ProcessStatus::Running);
        registry.record_first_run(pid, time);
        trace!(
            pid,
            tick = time,
            remaining = registry.get(pid).remaining_service,
            quantum = registry.get(pid).quantum_remaining,
            "serviced"
        );
        Some(pid)
    }

    /// Drop every Accepted member with no service left and mark it finished
    pub fn retire_finished(&mut self, registry: &mut ProcessRegistry, time: Tick) -> u64 {
        let mut retired = 0;
        self.accepted.retain(|&pid| {
            if registry.get(pid).remaining_service > 0 {
                return true;
            }
            registry.mark_finished(pid, time);
            retired += 1;
            debug!(pid, tick = time, "retired");
            false
        });
        retired
    }

    /// Requeue the head at the tail once its quantum is used up
    pub fn rotate_if_expired(&mut self, registry: &mut ProcessRegistry) -> Option<ProcessId> {
        let head = self.accepted.front()?;
        if registry.get(head).quantum_remaining != 0 {
            return None;
        }
        registry.reset_quantum(head, self.quantum);
        self.accepted.rotate();
        registry.set_status(head, ProcessStatus::Waiting);
        trace!(pid = head, "quantum expired, rotated to tail");
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessRecord;

    fn setup(
        records: Vec<ProcessRecord>,
        config: SchedulerConfig,
    ) -> (AdmissionEngine, ProcessRegistry) {
        let registry = ProcessRegistry::new(records, config.quantum);
        (AdmissionEngine::new(&config), registry)
    }

    #[test]
    fn test_first_arrival_takes_direct_path() {
        let (mut engine, mut registry) = setup(
            vec![
                ProcessRecord::new("A", 2, 0),
                ProcessRecord::new("B", 2, 0),
                ProcessRecord::new("C", 2, 0),
            ],
            SchedulerConfig::default(),
        );

        let outcome = engine.admit(&mut registry, 0);
        assert_eq!(outcome, AdmitOutcome { direct: 1, queued: 2 });
        assert_eq!(engine.accepted().to_vec(), vec![0]);
        assert_eq!(engine.new_queue().to_vec(), vec![1, 2]);
        assert_eq!(registry.get(0).status, ProcessStatus::Running);
        assert_eq!(registry.get(1).status, ProcessStatus::Waiting);
    }

    #[test]
    fn test_arrival_queues_behind_waiting_new_members() {
        let (mut engine, mut registry) = setup(
            vec![
                ProcessRecord::new("A", 1, 0),
                ProcessRecord::new("B", 1, 0),
                ProcessRecord::new("C", 1, 1),
            ],
            SchedulerConfig::default(),
        );
        engine.admit(&mut registry, 0);
        registry.decrement_service(0);
        engine.retire_finished(&mut registry, 1);
        assert!(engine.accepted().is_empty());

        // Accepted is empty but New is not, so no direct path
        let outcome = engine.admit(&mut registry, 1);
        assert_eq!(outcome, AdmitOutcome { direct: 0, queued: 1 });
        assert_eq!(engine.new_queue().to_vec(), vec![1, 2]);
        assert_eq!(registry.get(2).status, ProcessStatus::Waiting);
    }

    #[test]
    fn test_aging_hits_both_queues() {
        let (mut engine, mut registry) = setup(
            vec![ProcessRecord::new("A", 3, 0), ProcessRecord::new("B", 3, 0)],
            SchedulerConfig::new(3, 1),
        );
        engine.admit(&mut registry, 0);
        engine.age_queues(&mut registry);
        engine.age_queues(&mut registry);
        assert_eq!(registry.get(0).priority, 2);
        assert_eq!(registry.get(1).priority, 6);
    }

    #[test]
    fn test_promotion_requires_priority_to_catch_up() {
        let (mut engine, mut registry) = setup(
            vec![ProcessRecord::new("A", 9, 0), ProcessRecord::new("B", 9, 0)],
            SchedulerConfig::new(1, 2),
        );
        engine.admit(&mut registry, 0);
        registry.add_priority(0, 5);
        registry.add_priority(1, 4);
        assert_eq!(engine.promote_eligible(&registry).total(), 0);
        assert_eq!(engine.new_queue().to_vec(), vec![1]);

        // Equal priority is enough
        registry.add_priority(1, 1);
        let outcome = engine.promote_eligible(&registry);
        assert_eq!(outcome, PromoteOutcome { by_priority: 1, fallback: 0 });
        assert_eq!(engine.accepted().to_vec(), vec![0, 1]);
        assert!(engine.new_queue().is_empty());
    }

    #[test]
    fn test_ineligible_members_keep_their_order() {
        let (mut engine, mut registry) = setup(
            vec![
                ProcessRecord::new("A", 9, 0),
                ProcessRecord::new("B", 9, 0),
                ProcessRecord::new("C", 9, 0),
                ProcessRecord::new("D", 9, 0),
            ],
            SchedulerConfig::default(),
        );
        engine.admit(&mut registry, 0);
        registry.add_priority(0, 5);
        registry.add_priority(1, 2);
        registry.add_priority(2, 7);
        registry.add_priority(3, 1);

        let outcome = engine.promote_eligible(&registry);
        assert_eq!(outcome.by_priority, 1);
        assert_eq!(engine.accepted().to_vec(), vec![0, 2]);
        assert_eq!(engine.new_queue().to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_fallback_promotes_only_the_front() {
        let (mut engine, mut registry) = setup(
            vec![
                ProcessRecord::new("A", 1, 0),
                ProcessRecord::new("B", 5, 0),
                ProcessRecord::new("C", 5, 0),
            ],
            SchedulerConfig::default(),
        );
        engine.admit(&mut registry, 0);
        registry.add_priority(0, 100);
        registry.decrement_service(0);
        engine.retire_finished(&mut registry, 1);

        let outcome = engine.promote_eligible(&registry);
        assert_eq!(outcome, PromoteOutcome { by_priority: 0, fallback: 1 });
        assert_eq!(engine.accepted().to_vec(), vec![1]);
        assert_eq!(engine.new_queue().to_vec(), vec![2]);
        // Fallback does not mark the promoted process running
        assert_eq!(registry.get(1).status, ProcessStatus::Waiting);
    }

    #[test]
    fn test_service_defers_retirement() {
        let (mut engine, mut registry) = setup(
            vec![ProcessRecord::new("A", 1, 0)],
            SchedulerConfig::default(),
        );
        engine.admit(&mut registry, 0);
        assert_eq!(engine.service_head(&mut registry, 0), Some(0));
        assert_eq!(registry.get(0).remaining_service, 0);
        assert_eq!(registry.get(0).status, ProcessStatus::Running);
        assert_eq!(engine.accepted().to_vec(), vec![0]);

        assert_eq!(engine.retire_finished(&mut registry, 1), 1);
        assert!(engine.accepted().is_empty());
        assert_eq!(registry.get(0).status, ProcessStatus::Finished);
        assert_eq!(registry.get(0).finished_at, Some(1));
    }

    #[test]
    fn test_service_on_empty_queue() {
        let (engine, mut registry) = setup(vec![], SchedulerConfig::default());
        assert_eq!(engine.service_head(&mut registry, 0), None);
    }

    #[test]
    fn test_rotation_resets_quantum() {
        let (mut engine, mut registry) = setup(
            vec![ProcessRecord::new("A", 5, 0), ProcessRecord::new("B", 5, 0)],
            SchedulerConfig::new(1, 0).with_quantum(2),
        );
        engine.admit(&mut registry, 0);
        engine.age_queues(&mut registry);
        engine.promote_eligible(&registry);

        engine.service_head(&mut registry, 0);
        assert_eq!(engine.rotate_if_expired(&mut registry), None);
        engine.service_head(&mut registry, 1);
        assert_eq!(engine.rotate_if_expired(&mut registry), Some(0));

        assert_eq!(engine.accepted().to_vec(), vec![1, 0]);
        assert_eq!(registry.get(0).quantum_remaining, 2);
        assert_eq!(registry.get(0).status, ProcessStatus::Waiting);
    }
}
