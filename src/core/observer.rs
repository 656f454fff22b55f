use super::event::SchedEvent;
use super::state::{Pid, ProcessRecord, Ticks};
use rustc_hash::FxHashMap;

/// Validates the bookkeeping of a finished policy run.
///
/// All checks are `debug_assert`s: debug builds verify every run, release
/// builds compile the checks away.
#[derive(Debug, Default)]
pub struct Observer;

impl Observer {
    pub fn new() -> Self {
        Self
    }

    pub fn observe(&self, records: &[ProcessRecord], events: &[SchedEvent]) {
        let mut completions: FxHashMap<Pid, Ticks> = FxHashMap::default();
        for event in events {
            if let SchedEvent::Completed { pid, at } = event {
                let previous = completions.insert(*pid, *at);
                debug_assert!(previous.is_none(), "process {pid} completed twice");
            }
        }

        debug_assert_eq!(
            completions.len(),
            records.len(),
            "every process must complete exactly once"
        );

        let total_burst: Ticks = records.iter().map(|record| record.burst).sum();
        for record in records {
            match completions.get(&record.pid) {
                Some(&at) => {
                    debug_assert_eq!(
                        at,
                        record.waiting + record.burst,
                        "process {} completion time must equal waiting + burst",
                        record.pid
                    );
                    debug_assert!(
                        at <= total_burst,
                        "process {} completed after the total burst time",
                        record.pid
                    );
                }
                None => debug_assert!(false, "process {} never completed", record.pid),
            }
        }

        let last_completion = completions.values().copied().max().unwrap_or(0);
        debug_assert_eq!(
            last_completion, total_burst,
            "simulated clock must end at the total burst time"
        );
    }
}
