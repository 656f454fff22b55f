//! Scheduling policies.
//!
//! The three non-preemptive policies share one sort-then-sweep engine and
//! differ only in ready-queue order; round-robin simulates quantum slicing.

pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use crate::core::{ProcessRecord, ReadyQueue, SchedEvent, Ticks};

/// A scheduling policy over a fixed workload.
pub trait Scheduler {
    /// Label used as the report heading.
    fn label(&self) -> String;

    /// Compute `waiting` for every record, returning the execution trace.
    ///
    /// Record order after the call is policy-defined: the non-preemptive
    /// policies permute the list into their scheduling order.
    fn schedule(&self, records: &mut Vec<ProcessRecord>) -> Vec<SchedEvent>;
}

/// Shared non-preemptive engine.
///
/// Drains `queue` to fix the scheduling order, permutes `records` into it,
/// then runs the cumulative sweep: the first process waits 0, each later
/// one waits for every burst scheduled before it.
pub(crate) fn sweep(records: &mut Vec<ProcessRecord>, mut queue: ReadyQueue) -> Vec<SchedEvent> {
    debug_assert_eq!(
        queue.len(),
        records.len(),
        "ready queue must cover the whole workload"
    );

    let mut order = Vec::with_capacity(records.len());
    while let Some(index) = queue.pop() {
        order.push(index);
    }

    let mut scheduled: Vec<ProcessRecord> = order
        .into_iter()
        .map(|index| records[index].clone())
        .collect();

    let mut events = Vec::with_capacity(scheduled.len() * 2);
    let mut clock: Ticks = 0;
    for record in &mut scheduled {
        record.waiting = clock;
        events.push(SchedEvent::Dispatched {
            pid: record.pid,
            at: clock,
        });
        clock += record.burst;
        events.push(SchedEvent::Completed {
            pid: record.pid,
            at: clock,
        });
    }

    *records = scheduled;
    events
}
