use crate::core::{Pid, Ticks};

/// Trace of the scheduling decisions made during a single policy run.
///
/// Every policy emits one `Completed` per process; round-robin additionally
/// emits a `Preempted` for each expired quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    /// Process was given the CPU.
    Dispatched { pid: Pid, at: Ticks },
    /// Quantum expired with work left; process requeued.
    Preempted { pid: Pid, at: Ticks, remaining: Ticks },
    /// Process finished its burst.
    Completed { pid: Pid, at: Ticks },
}
