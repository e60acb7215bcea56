//! Sorts the entire stream before anything flows further.

use std::cmp::Ordering;

use crate::chain::node::{peek_elem, BufferingOp, Elem, NodeKind, Policy};
use crate::stream::Stream;
use crate::Data;

/// Extension trait for sorting.
pub trait Sort<T: Data> {
    /// Reorders the stream into natural ascending order.
    ///
    /// Buffering: every upstream element is accumulated before any flows on.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let ordered = Stream::of([3, 1, 2]).sorted().collect(to_list())?;
    /// assert_eq!(ordered, vec![1, 2, 3]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn sorted(self) -> Stream<T>
    where
        T: Ord;

    /// Reorders the stream under `logic`. The sort is stable: elements the
    /// comparator considers equal keep their original relative order.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let by_length = Stream::of(["tea", "a", "is", "it"])
    ///     .sorted_by(|a, b| a.len().cmp(&b.len()))
    ///     .collect(to_list())?;
    /// assert_eq!(by_length, vec!["a", "is", "it", "tea"]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn sorted_by<L: FnMut(&T, &T) -> Ordering + 'static>(self, logic: L) -> Stream<T>;
}

impl<T: Data> Sort<T> for Stream<T> {
    fn sorted(self) -> Stream<T>
    where
        T: Ord,
    {
        self.sorted_by(|a, b| a.cmp(b))
    }

    fn sorted_by<L: FnMut(&T, &T) -> Ordering + 'static>(mut self, mut logic: L) -> Stream<T> {
        self.worker.append(NodeKind::Buffering(BufferingOp::new(Policy::Sort {
            comparator: Box::new(move |a: &Elem, b: &Elem| {
                logic(peek_elem::<T>(a), peek_elem::<T>(b))
            }),
        })));
        self
    }
}
