//! Thread-safe sequences kept sorted by priority.
//!
//! See documentation for [`SortedQueue`].
extern crate self as sorted_queue;

mod queue;
mod search;
pub mod sink;

pub use queue::SortedQueue;
pub use search::SearchResult;
pub use sink::{DiagnosticSink, InvalidAccess, NoopSink, TracingSink};
pub use sorted_queue_macros::Prioritized;

use std::fmt::Display;
use std::sync::Arc;

/// An entry that can be stored in a [`SortedQueue`].
///
/// Entries are ordered by their [`priority()`](Prioritized::priority), and rendered using their
/// [`Display`] implementation. Priorities need not be unique.
///
/// Usually implemented with `#[derive(Prioritized)]`:
///
/// ```rust
/// # use sorted_queue::Prioritized;
/// # use std::fmt;
/// #[derive(Prioritized)]
/// struct Job {
///     #[priority]
///     deadline: u32,
///     name: String,
/// }
///
/// impl fmt::Display for Job {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.name)
///     }
/// }
///
/// let job = Job { deadline: 7, name: "backup".into() };
/// assert_eq!(job.priority(), 7);
/// ```
pub trait Prioritized: Display {
    /// The key this entry is sorted by.
    fn priority(&self) -> u64;
}

macro_rules! impl_prioritized_unsigned {
    () => {};
    ($ty:ty $(, $rest:ty)*) => {
        impl Prioritized for $ty {
            #[inline]
            fn priority(&self) -> u64 {
                u64::from(*self)
            }
        }
        impl_prioritized_unsigned!($($rest),*);
    };
}

impl_prioritized_unsigned!(u8, u16, u32, u64);

impl Prioritized for usize {
    #[inline]
    fn priority(&self) -> u64 {
        *self as u64
    }
}

impl<T: Prioritized + ?Sized> Prioritized for &T {
    fn priority(&self) -> u64 {
        (**self).priority()
    }
}

impl<T: Prioritized + ?Sized> Prioritized for Box<T> {
    fn priority(&self) -> u64 {
        (**self).priority()
    }
}

impl<T: Prioritized + ?Sized> Prioritized for Arc<T> {
    fn priority(&self) -> u64 {
        (**self).priority()
    }
}
