//! Removes duplicate elements from a stream.

use std::collections::HashSet;
use std::hash::Hash;

use crate::chain::node::{unwrap_elem, BufferingOp, Elem, NodeKind, Policy};
use crate::stream::Stream;
use crate::Data;

/// Extension trait for deduplication.
pub trait Distinct<T: Data + Eq + Hash> {
    /// Removes duplicates under full-value equality, keeping the first
    /// occurrence of each element in its original position.
    ///
    /// Buffering: every upstream element is accumulated before any flows on.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let unique = Stream::of([1, 2, 2, 3, 1]).distinct().collect(to_list())?;
    /// assert_eq!(unique, vec![1, 2, 3]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn distinct(self) -> Stream<T>;
}

impl<T: Data + Eq + Hash> Distinct<T> for Stream<T> {
    fn distinct(mut self) -> Stream<T> {
        let dedup = Box::new(move |items: Vec<Elem>| {
            let typed: Vec<T> = items.into_iter().map(unwrap_elem::<T>).collect();
            let mut seen = HashSet::new();
            let fresh: Vec<bool> = typed.iter().map(|item| seen.insert(item)).collect();
            drop(seen);
            typed
                .into_iter()
                .zip(fresh)
                .filter_map(|(item, keep)| keep.then_some(item))
                .map(|item| Box::new(item) as Elem)
                .collect()
        });
        self.worker
            .append(NodeKind::Buffering(BufferingOp::new(Policy::Distinct { dedup })));
        self
    }
}
