//! Filters a stream by a predicate.

use crate::chain::node::{peek_elem, Elem, NodeKind, Streaming};
use crate::stream::Stream;
use crate::Data;

/// Extension trait for filtering.
pub trait Filter<T: Data> {
    /// Returns the stream restricted to records satisfying `predicate`;
    /// everything else is dropped silently.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let even = Stream::of([0, 1, 2, 3, 4])
    ///     .filter(|x| *x % 2 == 0)
    ///     .collect(to_list())?;
    /// assert_eq!(even, vec![0, 2, 4]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn filter<P: FnMut(&T) -> bool + 'static>(self, predicate: P) -> Stream<T>;
}

impl<T: Data> Filter<T> for Stream<T> {
    fn filter<P: FnMut(&T) -> bool + 'static>(mut self, mut predicate: P) -> Stream<T> {
        self.worker.append(NodeKind::Streaming(Streaming::Filter {
            predicate: Box::new(move |elem: &Elem| predicate(peek_elem::<T>(elem))),
        }));
        self
    }
}
