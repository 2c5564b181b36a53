use crate::search::{binary_search, SearchResult};
use crate::sink::{DiagnosticSink, InvalidAccess, TracingSink};
use crate::Prioritized;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A thread-safe sequence of entries, kept sorted by [`Prioritized::priority()`].
///
/// Unlike a heap, the whole sequence is kept in order, so the queue supports binary search, range
/// checks, and positional access in addition to constant-time access to the minimum and maximum.
/// Insertion takes linear time.
///
/// All operations go through a single reader/writer lock: reads share the lock, while insertion and
/// clearing take it exclusively. Every call holds the lock for its full duration, so no reader ever
/// observes a partially inserted entry.
///
/// Entries are stored behind [`Arc`]; accessors hand out clones of that handle rather than
/// references into the queue.
///
/// ## Usage
///
/// ```rust
/// # use sorted_queue::SortedQueue;
/// let q = SortedQueue::new(8);
/// q.insert_many([1u64, 2, 3, 5, 4]);
///
/// assert_eq!(q.to_string(), "[0:1 1] [1:2 2] [2:3 3] [3:4 4] [4:5 5] ");
/// assert_eq!(*q.front().unwrap(), 1);
/// assert_eq!(*q.back().unwrap(), 5);
///
/// let r = q.search(4);
/// assert!(r.found());
/// assert_eq!(r.index, Some(3));
/// ```
///
/// ## Ties
///
/// Priorities need not be unique, and the placement of a new entry among equal priorities depends
/// on where it lands:
///
/// -   an entry equal to the current minimum goes *before* it;
/// -   an entry equal to the current maximum goes *after* it;
/// -   otherwise, the entry goes right before the first entry with a strictly greater priority,
///     i.e., after all existing entries with an equal priority.
///
/// Consequently, inserting the same entries in a different order may produce a different order
/// among equal priorities.
pub struct SortedQueue<T, S = TracingSink> {
    items: RwLock<Vec<Arc<T>>>,
    sink: S,
}

impl<T: Prioritized> SortedQueue<T> {
    /// Create an empty queue with room for `capacity` entries, reporting invalid access to
    /// [`tracing`].
    pub fn new(capacity: usize) -> Self {
        Self::with_sink(capacity, TracingSink)
    }
}

impl<T: Prioritized, S: DiagnosticSink> SortedQueue<T, S> {
    /// Create an empty queue with room for `capacity` entries, reporting invalid access to `sink`.
    pub fn with_sink(capacity: usize, sink: S) -> Self {
        Self {
            items: RwLock::new(Vec::with_capacity(capacity)),
            sink,
        }
    }

    /// Number of entries in the queue.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Insert a single entry, keeping the queue sorted.
    pub fn insert(&self, entry: T) {
        self.insert_shared(Arc::new(entry))
    }

    /// Insert an entry that may also be held elsewhere.
    pub fn insert_shared(&self, entry: Arc<T>) {
        insert_sorted(&mut self.items.write(), entry)
    }

    /// Insert entries one by one, in iteration order.
    ///
    /// The write lock is held for the whole batch, so readers see either none or all of it.
    pub fn insert_many(&self, entries: impl IntoIterator<Item = T>) {
        let mut items = self.items.write();
        for entry in entries {
            insert_sorted(&mut items, Arc::new(entry));
        }
    }

    /// Insert every entry of `other` into `self`, in ascending order.
    ///
    /// `other` is left unchanged; its entries end up shared between both queues. Merging a queue
    /// into itself duplicates every entry.
    pub fn merge<S2: DiagnosticSink>(&self, other: &SortedQueue<T, S2>) {
        let snapshot = other.to_vec();
        tracing::trace!(count = snapshot.len(), "merging queue");

        let mut items = self.items.write();
        items.reserve(snapshot.len());
        for entry in snapshot {
            insert_sorted(&mut items, entry);
        }
    }

    /// Remove every entry. Capacity is retained.
    pub fn clear(&self) {
        let mut items = self.items.write();
        tracing::trace!(count = items.len(), "clearing queue");
        items.clear();
    }

    /// Binary search for an entry with priority `key`.
    ///
    /// See [`SearchResult`] for what is reported when no such entry exists.
    pub fn search(&self, key: u64) -> SearchResult<T> {
        binary_search(&self.items.read(), key)
    }

    /// The entry with the smallest priority.
    pub fn front(&self) -> Option<Arc<T>> {
        self.items.read().first().cloned()
    }

    /// The entry with the largest priority.
    pub fn back(&self) -> Option<Arc<T>> {
        self.items.read().last().cloned()
    }

    /// The entry at position `pos`, counting from the smallest priority.
    ///
    /// Negative or out-of-range positions yield `None`, and are reported to the queue's
    /// [`DiagnosticSink`].
    pub fn get(&self, pos: isize) -> Option<Arc<T>> {
        let items = self.items.read();
        let entry = usize::try_from(pos)
            .ok()
            .and_then(|i| items.get(i))
            .cloned();

        if entry.is_none() {
            self.sink.invalid_access(InvalidAccess {
                len: items.len(),
                pos,
            });
        }
        entry
    }

    /// Whether `key` falls between the smallest and largest priorities (inclusive).
    ///
    /// This is a range check: it does not mean that an entry with priority `key` exists.
    pub fn contains(&self, key: u64) -> bool {
        let items = self.items.read();
        match (items.first(), items.last()) {
            (Some(first), Some(last)) => first.priority() <= key && key <= last.priority(),
            _ => false,
        }
    }

    /// Call `visit` on every entry and its position, in ascending order, stopping at the first
    /// error.
    ///
    /// The read lock is held throughout, so `visit` must not insert into or clear this queue; doing
    /// so deadlocks.
    pub fn traverse<E>(&self, mut visit: impl FnMut(&T, usize) -> Result<(), E>) -> Result<(), E> {
        let items = self.items.read();
        for (i, entry) in items.iter().enumerate() {
            visit(entry, i)?;
        }
        Ok(())
    }

    /// Snapshot of the entries, in ascending order.
    pub fn to_vec(&self) -> Vec<Arc<T>> {
        self.items.read().clone()
    }
}

/// Insertion sort step; `items` must already be sorted.
fn insert_sorted<T: Prioritized>(items: &mut Vec<Arc<T>>, entry: Arc<T>) {
    let prio = entry.priority();

    let (first, last) = match (items.first(), items.last()) {
        (Some(first), Some(last)) => (first.priority(), last.priority()),
        _ => {
            items.push(entry);
            return;
        }
    };

    if prio <= first {
        items.insert(0, entry);
        return;
    }

    if prio >= last {
        items.push(entry);
        return;
    }

    // first < prio < last, so some entry past the first is strictly greater.
    match items[1..].iter().position(|e| e.priority() > prio) {
        Some(i) => items.insert(i + 1, entry),
        None => items.push(entry),
    }
}

impl<T: Prioritized> Default for SortedQueue<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Prioritized> FromIterator<T> for SortedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let q = Self::new(iter.size_hint().0);
        q.insert_many(iter);
        q
    }
}

impl<T: Prioritized, S: DiagnosticSink> fmt::Display for SortedQueue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.items.read().iter().enumerate() {
            write!(f, "[{}:{} {}] ", i, entry.priority(), entry)?;
        }
        Ok(())
    }
}

impl<T: Prioritized, S> fmt::Debug for SortedQueue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.items.read();
        f.debug_struct("SortedQueue")
            .field("len", &items.len())
            .field(
                "priorities",
                &items.iter().map(|e| e.priority()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
