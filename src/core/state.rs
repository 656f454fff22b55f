use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Process identifier as given in the input file.
pub type Pid = u32;
/// Simulated time unit.
pub type Ticks = u64;

/// A single process in the workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    /// Unique, positive process id.
    pub pid: Pid,
    /// Time the process becomes ready. All processes are known at time 0,
    /// so this only serves as a tie-break for the ranked policies.
    pub arrival: Ticks,
    /// Total CPU time required, at least 1.
    pub burst: Ticks,
    /// Scheduling priority. A larger value is scheduled first.
    pub priority: i32,
    /// Time spent ready but not executing. Zero until a scheduler runs.
    pub waiting: Ticks,
    /// `burst + waiting`. Zero until the turnaround pass runs.
    pub turnaround: Ticks,
}

impl ProcessRecord {
    /// Create a record with unset output fields.
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks, priority: i32) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
            waiting: 0,
            turnaround: 0,
        }
    }
}

/// Ordering key for ranked ready queues: `primary` ascending, ties broken
/// by `arrival` ascending, then by insertion slot so the order is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    primary: i64,
    arrival: Ticks,
    slot: usize,
}

// KeyedPriorityQueue is a max-heap, so we need to flip SortKey's Ord
impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .primary
            .cmp(&self.primary)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ready queue holding indices into a workload's record list.
#[derive(Debug)]
pub enum ReadyQueue {
    /// Visit in insertion order.
    Fifo { procs: VecDeque<usize> },
    /// Visit in key order.
    Priq { procs: KeyedPriorityQueue<usize, SortKey> },
}

impl ReadyQueue {
    /// FIFO queue over a fixed visiting order.
    pub fn fifo(order: impl IntoIterator<Item = usize>) -> Self {
        Self::Fifo {
            procs: order.into_iter().collect(),
        }
    }

    /// Ranked queue over all of `records`.
    ///
    /// `key` maps a record to `(primary, arrival-tie-break)`; smaller keys
    /// pop first.
    pub fn ranked<F>(records: &[ProcessRecord], key: F) -> Self
    where
        F: Fn(&ProcessRecord) -> (i64, Ticks),
    {
        let mut procs = KeyedPriorityQueue::new();
        for (index, record) in records.iter().enumerate() {
            let (primary, arrival) = key(record);
            procs.push(
                index,
                SortKey {
                    primary,
                    arrival,
                    slot: index,
                },
            );
        }
        Self::Priq { procs }
    }

    /// Next process index in policy order.
    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Fifo { procs } => procs.pop_front(),
            Self::Priq { procs } => procs.pop().map(|entry| entry.0),
        }
    }

    /// Requeue a preempted process at the tail.
    ///
    /// Only FIFO queues support requeueing; the ranked policies are
    /// non-preemptive.
    pub fn push_fifo(&mut self, index: usize) {
        match self {
            Self::Fifo { procs } => procs.push_back(index),
            Self::Priq { .. } => panic!("attempted a FIFO requeue on a ranked queue"),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::Fifo { procs } => procs.contains(&index),
            Self::Priq { procs } => procs.iter().any(|entry| *entry.0 == index),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo { procs } => procs.len(),
            Self::Priq { procs } => procs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
