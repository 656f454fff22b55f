//! Batch CPU-scheduling simulator.
//!
//! Computes per-process waiting and turnaround times for a fixed workload
//! under FCFS, SJF, Priority and Round-Robin, and aggregates per-policy
//! metrics.

pub mod core;
pub mod error;
pub mod input;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Pid, ProcessRecord, SchedEvent, Ticks};
pub use error::{Result, SchedError};
pub use scheduler::{Fcfs, Priority, RoundRobin, Scheduler, Sjf};
pub use sim::{PolicyMetrics, Sim};
