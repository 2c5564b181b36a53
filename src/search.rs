use crate::Prioritized;
use std::sync::Arc;

/// Outcome of [`SortedQueue::search()`](crate::SortedQueue::search).
///
/// When the key is found, `index` and `entry` point at the match. In either case, `nearest` holds
/// the index of the midpoint visited by the binary search whose priority was closest to the key;
/// only an empty queue leaves it unset.
///
/// Note that `nearest` is a hint, not the true nearest entry: only the midpoints the search
/// actually visits are considered.
#[derive(Debug)]
pub struct SearchResult<T> {
    /// Index of the entry with the requested priority, if any.
    pub index: Option<usize>,
    /// Index of the closest visited entry.
    pub nearest: Option<usize>,
    /// The entry with the requested priority, if any.
    pub entry: Option<Arc<T>>,
}

impl<T> SearchResult<T> {
    const MISSING: isize = -1;

    fn empty() -> Self {
        Self {
            index: None,
            nearest: None,
            entry: None,
        }
    }

    /// Whether an entry with the requested priority was found.
    pub fn found(&self) -> bool {
        self.entry.is_some()
    }

    /// [`index`](Self::index), with `-1` standing in for "not found".
    pub fn exact_index(&self) -> isize {
        Self::to_signed(self.index)
    }

    /// [`nearest`](Self::nearest), with `-1` standing in for "empty queue".
    pub fn nearest_index(&self) -> isize {
        Self::to_signed(self.nearest)
    }

    fn to_signed(i: Option<usize>) -> isize {
        i.and_then(|i| isize::try_from(i).ok())
            .unwrap_or(Self::MISSING)
    }
}

/// Binary search for `target` over `items`, which must be sorted by priority.
///
/// The closest midpoint is tracked as the search narrows: the first midpoint is the initial
/// candidate, and later midpoints only replace it when strictly closer. A matching midpoint is
/// never a candidate itself, so a match past the first midpoint reports the closest of the
/// midpoints visited before it.
pub(crate) fn binary_search<T: Prioritized>(items: &[Arc<T>], target: u64) -> SearchResult<T> {
    if items.is_empty() {
        return SearchResult::empty();
    }

    let mut lo = 0;
    let mut hi = items.len() - 1;
    let mut nearest: Option<(usize, u64)> = None;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let prio = items[mid].priority();

        if prio == target {
            return SearchResult {
                index: Some(mid),
                nearest: Some(nearest.map_or(mid, |(i, _)| i)),
                entry: Some(items[mid].clone()),
            };
        }

        let distance = prio.abs_diff(target);
        match nearest {
            Some((_, best)) if best <= distance => {}
            _ => nearest = Some((mid, distance)),
        }

        if prio < target {
            lo = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            hi = mid - 1;
        }
    }

    SearchResult {
        index: None,
        nearest: nearest.map(|(i, _)| i),
        entry: None,
    }
}
