use super::{sweep, Scheduler};
use crate::core::{ProcessRecord, ReadyQueue, SchedEvent};

/// Priority scheduling, non-preemptive.
///
/// A numerically larger priority value is scheduled first; ties are broken
/// by earlier arrival. Many references treat smaller as higher, so the
/// direction is pinned by tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl Scheduler for Priority {
    fn label(&self) -> String {
        "Priority".to_string()
    }

    fn schedule(&self, records: &mut Vec<ProcessRecord>) -> Vec<SchedEvent> {
        let queue =
            ReadyQueue::ranked(records, |record| (-i64::from(record.priority), record.arrival));
        sweep(records, queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_larger_value_first() {
        let mut records = vec![
            ProcessRecord::new(1, 0, 5, 1),
            ProcessRecord::new(2, 0, 3, 3),
            ProcessRecord::new(3, 0, 8, 2),
        ];
        Priority.schedule(&mut records);

        let pids: Vec<_> = records.iter().map(|r| r.pid).collect();
        assert_eq!(pids, [2, 3, 1]);
        let waits: Vec<_> = records.iter().map(|r| r.waiting).collect();
        assert_eq!(waits, [0, 3, 11]);
    }

    #[test]
    fn equal_priorities_run_in_arrival_order() {
        let mut records = vec![
            ProcessRecord::new(1, 9, 5, 4),
            ProcessRecord::new(2, 2, 3, 4),
            ProcessRecord::new(3, 5, 8, 4),
        ];
        Priority.schedule(&mut records);

        let pids: Vec<_> = records.iter().map(|r| r.pid).collect();
        assert_eq!(pids, [2, 3, 1]);
    }

    #[test]
    fn negative_priorities_schedule_last() {
        let mut records = vec![
            ProcessRecord::new(1, 0, 2, -3),
            ProcessRecord::new(2, 0, 4, 0),
        ];
        Priority.schedule(&mut records);

        assert_eq!(records[0].pid, 2);
        assert_eq!(records[1].pid, 1);
    }
}
