use super::metrics::{apply_turnaround, PolicyMetrics};
use crate::core::{Observer, ProcessRecord};
use crate::scheduler::Scheduler;
use tracing::debug;

/// Batch simulation over one workload.
///
/// Owns the pristine record list; every policy run operates on a fresh
/// clone, so one policy's in-place mutation never leaks into another's.
pub struct Sim {
    source: Vec<ProcessRecord>,
    observer: Observer,
}

impl Sim {
    pub fn new(source: Vec<ProcessRecord>) -> Self {
        Self {
            source,
            observer: Observer::new(),
        }
    }

    /// Number of processes in the workload.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Run one policy over a fresh copy of the workload and aggregate its
    /// metrics: schedule, turnaround pass, observer checks, collect.
    pub fn run<S: Scheduler>(&self, scheduler: &S) -> PolicyMetrics {
        let label = scheduler.label();
        let mut records = self.source.clone();
        let events = scheduler.schedule(&mut records);

        for event in &events {
            debug!(policy = %label, ?event);
        }

        apply_turnaround(&mut records);
        self.observer.observe(&records, &events);

        PolicyMetrics::collect(label, &records)
    }
}
