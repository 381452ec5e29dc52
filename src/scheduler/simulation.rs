/*!
 * Scheduler Tick Loop
 * Drives the admission engine one tick at a time and emits a snapshot per tick
 *
 * Per-tick order (load-bearing):
 * 1. retire processes drained during the previous tick; stop if all are finished
 * 2. admit arrivals
 * 3. age both queues
 * 4. promote eligible New members (empty-Accepted fallback included)
 * 5. service the Accepted head
 * 6. emit the snapshot
 * 7. rotate the head if its quantum is used up
 * 8. advance time
 */

use super::admission::AdmissionEngine;
use super::config::SchedulerConfig;
use super::stats::{SimulationStats, SimulationSummary};
use crate::core::errors::SimulationError;
use crate::core::types::Tick;
use crate::monitoring::generate_run_id;
use crate::process::{ProcessRecord, ProcessRegistry};
use crate::reporting::{Reporter, Snapshot, TraceRecorder};
use tracing::{debug, info, info_span};

/// Everything that changes while the simulation runs
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub time: Tick,
    pub registry: ProcessRegistry,
    pub engine: AdmissionEngine,
    pub stats: SimulationStats,
}

impl SimulationState {
    pub fn new(records: impl IntoIterator<Item = ProcessRecord>, config: &SchedulerConfig) -> Self {
        Self {
            time: 0,
            registry: ProcessRegistry::new(records, config.quantum),
            engine: AdmissionEngine::new(config),
            stats: SimulationStats::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    config: SchedulerConfig,
    state: SimulationState,
}

impl Simulation {
    pub fn new(records: impl IntoIterator<Item = ProcessRecord>, config: SchedulerConfig) -> Self {
        let state = SimulationState::new(records, &config);
        Self { config, state }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// True once every process is finished (immediately for an empty workload)
    pub fn is_complete(&self) -> bool {
        self.state.registry.all_finished()
    }

    /// Execute one tick and return its snapshot.
    ///
    /// Returns `None` without advancing time when the tick's retirement step
    /// leaves every process finished.
    pub fn step(&mut self) -> Option<Snapshot> {
        if self.retire() {
            return None;
        }
        Some(self.advance())
    }

    /// Tick step 1; returns whether the run is complete afterwards
    fn retire(&mut self) -> bool {
        let state = &mut self.state;
        state.stats.retirements += state.engine.retire_finished(&mut state.registry, state.time);
        state.registry.all_finished()
    }

    /// Tick steps 2 through 8
    fn advance(&mut self) -> Snapshot {
        let state = &mut self.state;
        let time = state.time;

        let admitted = state.engine.admit(&mut state.registry, time);
        state.stats.direct_admissions += admitted.direct;

        state.engine.age_queues(&mut state.registry);

        let promoted = state.engine.promote_eligible(&state.registry);
        state.stats.promotions += promoted.by_priority;
        state.stats.fallback_promotions += promoted.fallback;

        match state.engine.service_head(&mut state.registry, time) {
            Some(_) => state.stats.busy_ticks += 1,
            None => state.stats.idle_ticks += 1,
        }

        let snapshot = Snapshot::new(time, state.registry.statuses());

        if state.engine.rotate_if_expired(&mut state.registry).is_some() {
            state.stats.rotations += 1;
        }

        state.stats.ticks += 1;
        state.time += 1;
        snapshot
    }

    /// Run to completion, feeding `reporter` the header and one snapshot per tick
    pub fn run<R: Reporter + ?Sized>(
        &mut self,
        reporter: &mut R,
    ) -> Result<SimulationSummary, SimulationError> {
        let span = info_span!(
            "simulation",
            run_id = %generate_run_id(),
            processes = self.state.registry.len(),
            quantum = self.config.quantum,
        );
        let _entered = span.enter();
        info!(
            new_increment = self.config.new_increment,
            accepted_increment = self.config.accepted_increment,
            "simulation starting"
        );

        reporter.header(&self.state.registry.names())?;

        while !self.retire() {
            if let Some(limit) = self.config.max_ticks {
                if self.state.time >= limit {
                    return Err(SimulationError::TickLimitExceeded { limit });
                }
            }
            let snapshot = self.advance();
            debug!(tick = snapshot.time, trace = %snapshot, "tick");
            reporter.snapshot(&snapshot)?;
        }

        reporter.finish()?;

        let summary = self.summary();
        info!(
            ticks = summary.stats.ticks,
            rotations = summary.stats.rotations,
            avg_turnaround = summary.avg_turnaround,
            "simulation complete"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary::from_registry(self.state.stats, &self.state.registry)
    }
}

/// Run `records` to completion and collect the trace in memory
pub fn simulate(
    records: impl IntoIterator<Item = ProcessRecord>,
    config: SchedulerConfig,
) -> Result<(Vec<Snapshot>, SimulationSummary), SimulationError> {
    let mut recorder = TraceRecorder::new();
    let summary = Simulation::new(records, config).run(&mut recorder)?;
    Ok((recorder.into_snapshots(), summary))
}
