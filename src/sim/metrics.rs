//! Turnaround derivation and per-policy metric aggregation.

use crate::core::{Pid, ProcessRecord, Ticks};
use average::{Estimate, Mean};

/// Set `turnaround = burst + waiting` for every record.
///
/// Pure pass over an already-scheduled list; no ordering dependency.
pub fn apply_turnaround(records: &mut [ProcessRecord]) {
    for record in records {
        record.turnaround = record.burst + record.waiting;
    }
}

/// Per-process row of a policy report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub burst: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
}

/// Aggregated results of one policy run.
#[derive(Debug, Clone)]
pub struct PolicyMetrics {
    /// Report heading, e.g. `FCFS` or `RR (quantum = 2)`.
    pub label: String,
    /// One row per process, in the order the policy left the records.
    pub processes: Vec<ProcessMetrics>,
    pub total_waiting: Ticks,
    pub total_turnaround: Ticks,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl PolicyMetrics {
    /// Read-only aggregation over a fully computed record list.
    pub fn collect(label: String, records: &[ProcessRecord]) -> Self {
        let processes = records
            .iter()
            .map(|record| ProcessMetrics {
                pid: record.pid,
                burst: record.burst,
                waiting: record.waiting,
                turnaround: record.turnaround,
            })
            .collect();

        Self {
            label,
            processes,
            total_waiting: records.iter().map(|record| record.waiting).sum(),
            total_turnaround: records.iter().map(|record| record.turnaround).sum(),
            avg_waiting: mean(records.iter().map(|record| record.waiting as f64)),
            avg_turnaround: mean(records.iter().map(|record| record.turnaround as f64)),
        }
    }

    /// Total burst time of the workload.
    pub fn total_burst(&self) -> Ticks {
        self.processes.iter().map(|row| row.burst).sum()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    values.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computed(pid: Pid, burst: Ticks, waiting: Ticks) -> ProcessRecord {
        let mut record = ProcessRecord::new(pid, 0, burst, 0);
        record.waiting = waiting;
        record
    }

    #[test]
    fn turnaround_is_burst_plus_waiting() {
        let mut records = vec![computed(1, 5, 0), computed(2, 3, 5), computed(3, 8, 8)];
        apply_turnaround(&mut records);

        let turnarounds: Vec<_> = records.iter().map(|r| r.turnaround).collect();
        assert_eq!(turnarounds, [5, 8, 16]);
    }

    #[test]
    fn averages_match_the_reference_workload() {
        let mut records = vec![computed(1, 5, 0), computed(2, 3, 5), computed(3, 8, 8)];
        apply_turnaround(&mut records);
        let metrics = PolicyMetrics::collect("FCFS".to_string(), &records);

        assert_eq!(metrics.total_waiting, 13);
        assert_eq!(metrics.total_turnaround, 29);
        assert!((metrics.avg_waiting - 13.0 / 3.0).abs() < 1e-9);
        assert!((metrics.avg_turnaround - 29.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn turnaround_identity_holds() {
        let mut records = vec![computed(1, 4, 2), computed(2, 6, 0)];
        apply_turnaround(&mut records);
        let metrics = PolicyMetrics::collect("FCFS".to_string(), &records);

        assert_eq!(
            metrics.total_waiting,
            metrics.total_turnaround - metrics.total_burst()
        );
    }
}
