pub mod event;
pub mod observer;
pub mod state;

pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{Pid, ProcessRecord, ReadyQueue, Ticks};
