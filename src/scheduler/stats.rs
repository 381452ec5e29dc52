/*!
 * Simulation Statistics
 * Run counters plus per-process turnaround and waiting times
 */

use crate::core::types::{ProcessId, ServiceUnits, Tick};
use crate::process::ProcessRegistry;
use serde::{Deserialize, Serialize};

/// Counters accumulated by the tick loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationStats {
    pub ticks: u64,
    /// Ticks in which some process was serviced
    pub busy_ticks: u64,
    pub idle_ticks: u64,
    /// Arrivals that went straight into an empty Accepted queue
    pub direct_admissions: u64,
    /// New -> Accepted moves won by priority
    pub promotions: u64,
    /// New -> Accepted moves forced by an empty Accepted queue
    pub fallback_promotions: u64,
    /// Quantum expiries
    pub rotations: u64,
    pub retirements: u64,
}

/// Outcome for one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSummary {
    pub pid: ProcessId,
    pub name: String,
    pub arrival: Tick,
    pub total_service: ServiceUnits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_run: Option<Tick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<Tick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnaround: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting: Option<u64>,
}

/// Everything a finished run reports besides the trace itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationSummary {
    pub stats: SimulationStats,
    pub processes: Vec<ProcessSummary>,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
}

impl SimulationSummary {
    pub fn from_registry(stats: SimulationStats, registry: &ProcessRegistry) -> Self {
        let processes: Vec<ProcessSummary> = registry
            .iter()
            .map(|(pid, process)| {
                let turnaround = process
                    .finished_at
                    .map(|finished| finished.saturating_sub(process.arrival));
                ProcessSummary {
                    pid,
                    name: process.name.clone(),
                    arrival: process.arrival,
                    total_service: process.total_service,
                    first_run: process.first_run,
                    finished_at: process.finished_at,
                    turnaround,
                    waiting: turnaround.map(|t| t.saturating_sub(process.total_service)),
                }
            })
            .collect();

        let avg_turnaround = mean(processes.iter().filter_map(|p| p.turnaround));
        let avg_waiting = mean(processes.iter().filter_map(|p| p.waiting));

        Self {
            stats,
            processes,
            avg_turnaround,
            avg_waiting,
        }
    }
}

fn mean(values: impl Iterator<Item = u64>) -> f64 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessRecord;

    #[test]
    fn test_summary_turnaround_and_waiting() {
        let mut registry = ProcessRegistry::new(
            vec![ProcessRecord::new("A", 4, 0), ProcessRecord::new("B", 2, 1)],
            1,
        );
        registry.record_first_run(0, 0);
        registry.mark_finished(0, 6);
        registry.record_first_run(1, 2);
        registry.mark_finished(1, 5);

        let summary = SimulationSummary::from_registry(SimulationStats::default(), &registry);
        assert_eq!(summary.processes[0].turnaround, Some(6));
        assert_eq!(summary.processes[0].waiting, Some(2));
        assert_eq!(summary.processes[1].turnaround, Some(4));
        assert_eq!(summary.processes[1].waiting, Some(2));
        assert_eq!(summary.avg_turnaround, 5.0);
        assert_eq!(summary.avg_waiting, 2.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary =
            SimulationSummary::from_registry(SimulationStats::default(), &ProcessRegistry::default());
        assert!(summary.processes.is_empty());
        assert_eq!(summary.avg_turnaround, 0.0);
    }

    #[test]
    fn test_summary_serializes_without_empty_fields() {
        let registry = ProcessRegistry::new(vec![ProcessRecord::new("A", 1, 0)], 1);
        let summary = SimulationSummary::from_registry(SimulationStats::default(), &registry);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["processes"][0].get("finished_at").is_none());
        assert_eq!(json["processes"][0]["name"], "A");
    }
}
