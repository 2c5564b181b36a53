//! Helpers shared by the integration tests.
#![allow(dead_code)]


use sorted_queue::{DiagnosticSink, Prioritized, SortedQueue};

/// An entry type the generic tests can be instantiated with.
pub trait TestEntry: Prioritized + Send + Sync + 'static {
    fn with_priority(priority: u64) -> Self;
}

impl TestEntry for u64 {
    fn with_priority(priority: u64) -> Self {
        priority
    }
}

/// Priorities of the queue's entries, in queue order.
pub fn priorities<E: TestEntry, S: DiagnosticSink>(q: &SortedQueue<E, S>) -> Vec<u64> {
    q.to_vec().iter().map(|e| e.priority()).collect()
}

pub fn is_sorted(ps: &[u64]) -> bool {
    ps.windows(2).all(|w| w[0] <= w[1])
}
