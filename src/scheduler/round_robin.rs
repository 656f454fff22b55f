use super::Scheduler;
use crate::core::{ProcessRecord, ReadyQueue, SchedEvent, Ticks};
use crate::error::{Result, SchedError};

/// Round-robin with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    /// Create a round-robin policy. `quantum` must be at least 1.
    pub fn new(quantum: Ticks) -> Result<Self> {
        if quantum == 0 {
            return Err(SchedError::InvalidQuantum);
        }
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn label(&self) -> String {
        format!("RR (quantum = {})", self.quantum)
    }

    fn schedule(&self, records: &mut Vec<ProcessRecord>) -> Vec<SchedEvent> {
        let mut remaining: Vec<Ticks> = records.iter().map(|record| record.burst).collect();
        let mut queue = ReadyQueue::fifo(0..records.len());
        let mut events = Vec::new();
        let mut clock: Ticks = 0;

        // Tail requeue keeps the visiting order among unfinished processes
        // identical from pass to pass.
        while let Some(index) = queue.pop() {
            let record = &mut records[index];
            events.push(SchedEvent::Dispatched {
                pid: record.pid,
                at: clock,
            });

            if remaining[index] > self.quantum {
                clock += self.quantum;
                remaining[index] -= self.quantum;
                events.push(SchedEvent::Preempted {
                    pid: record.pid,
                    at: clock,
                    remaining: remaining[index],
                });
                queue.push_fifo(index);
            } else {
                clock += remaining[index];
                remaining[index] = 0;
                record.waiting = clock - record.burst;
                events.push(SchedEvent::Completed {
                    pid: record.pid,
                    at: clock,
                });
            }
        }

        debug_assert!(
            remaining.iter().all(|&left| left == 0),
            "ready queue drained with work remaining"
        );
        events
    }
}
