//! Where a [`SortedQueue`](crate::SortedQueue) reports out-of-range positional access.
//!
//! Invalid access is not an error: [`SortedQueue::get()`](crate::SortedQueue::get) simply returns
//! `None`. The report is informational, and goes to whatever sink the queue was built with.

/// A positional access that did not land on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidAccess {
    /// Length of the queue at the time of the access.
    pub len: usize,
    /// Position that was requested.
    pub pos: isize,
}

/// Receives reports of invalid positional access.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per invalid access, while the queue's read lock is held.
    fn invalid_access(&self, access: InvalidAccess);
}

/// Forwards reports to [`tracing`] as INFO events, with `len` and `pos` as fields.
///
/// This is the default sink. Nothing is printed unless the application installs a subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn invalid_access(&self, access: InvalidAccess) {
        tracing::info!(
            len = access.len,
            pos = access.pos,
            "empty queue or invalid position"
        );
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    #[inline]
    fn invalid_access(&self, _access: InvalidAccess) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(InvalidAccess) + Send + Sync,
{
    fn invalid_access(&self, access: InvalidAccess) {
        self(access)
    }
}
