use super::{sweep, Scheduler};
use crate::core::{ProcessRecord, ReadyQueue, SchedEvent};

/// Shortest-job-first, non-preemptive: ascending burst time, ties broken
/// by earlier arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn label(&self) -> String {
        "SJF".to_string()
    }

    fn schedule(&self, records: &mut Vec<ProcessRecord>) -> Vec<SchedEvent> {
        let queue = ReadyQueue::ranked(records, |record| {
            (
                i64::try_from(record.burst).unwrap_or(i64::MAX),
                record.arrival,
            )
        });
        sweep(records, queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_by_ascending_burst() {
        let mut records = vec![
            ProcessRecord::new(1, 0, 5, 0),
            ProcessRecord::new(2, 0, 3, 0),
            ProcessRecord::new(3, 0, 8, 0),
        ];
        Sjf.schedule(&mut records);

        let pids: Vec<_> = records.iter().map(|r| r.pid).collect();
        let waits: Vec<_> = records.iter().map(|r| r.waiting).collect();
        assert_eq!(pids, [2, 1, 3]);
        assert_eq!(waits, [0, 3, 8]);
    }

    #[test]
    fn equal_bursts_run_in_arrival_order() {
        let mut records = vec![
            ProcessRecord::new(1, 4, 6, 0),
            ProcessRecord::new(2, 1, 6, 0),
        ];
        Sjf.schedule(&mut records);

        assert_eq!(records[0].pid, 2);
        assert_eq!(records[1].pid, 1);
        assert_eq!(records[1].waiting, 6);
    }

    #[test]
    fn single_process_waits_zero() {
        let mut records = vec![ProcessRecord::new(1, 0, 4, 0)];
        Sjf.schedule(&mut records);
        assert_eq!(records[0].waiting, 0);
    }
}
