use super::{sweep, Scheduler};
use crate::core::{ProcessRecord, ReadyQueue, SchedEvent};

/// First-come-first-served: processes run in input order, no sorting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn label(&self) -> String {
        "FCFS".to_string()
    }

    fn schedule(&self, records: &mut Vec<ProcessRecord>) -> Vec<SchedEvent> {
        let queue = ReadyQueue::fifo(0..records.len());
        sweep(records, queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 0, 5, 0),
            ProcessRecord::new(2, 0, 3, 0),
            ProcessRecord::new(3, 0, 8, 0),
        ]
    }

    #[test]
    fn waits_accumulate_in_input_order() {
        let mut records = workload();
        Fcfs.schedule(&mut records);

        let pids: Vec<_> = records.iter().map(|r| r.pid).collect();
        let waits: Vec<_> = records.iter().map(|r| r.waiting).collect();
        assert_eq!(pids, [1, 2, 3]);
        assert_eq!(waits, [0, 5, 8]);
    }

    #[test]
    fn single_process_waits_zero() {
        let mut records = vec![ProcessRecord::new(1, 0, 9, 0)];
        Fcfs.schedule(&mut records);
        assert_eq!(records[0].waiting, 0);
    }

    #[test]
    fn emits_one_completion_per_process() {
        let mut records = workload();
        let events = Fcfs.schedule(&mut records);

        let completions: Vec<_> = events
            .iter()
            .filter(|event| matches!(event, SchedEvent::Completed { .. }))
            .collect();
        assert_eq!(completions.len(), 3);
        assert_eq!(
            events.last(),
            Some(&SchedEvent::Completed { pid: 3, at: 16 })
        );
    }
}
