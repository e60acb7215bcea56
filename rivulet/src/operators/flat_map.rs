//! Expands each element of a stream one level.

use crate::chain::node::{unwrap_elem, BufferingOp, Elem, NodeKind, Policy};
use crate::stream::Stream;
use crate::Data;

/// Extension trait for one-level expansion.
pub trait FlatMap<T: Data> {
    /// Unpacks each element into zero or more outputs via `logic`,
    /// concatenated in input order.
    ///
    /// Buffering: the full expansion is accumulated before any of it flows
    /// on.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let flat = Stream::of([vec![2, 5], vec![4, 6], vec![3, 7]])
    ///     .flat_map(|pair| pair)
    ///     .collect(to_list())?;
    /// assert_eq!(flat, vec![2, 5, 4, 6, 3, 7]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn flat_map<U: Data, I: IntoIterator<Item = U>, L: FnMut(T) -> I + 'static>(
        self,
        logic: L,
    ) -> Stream<U>;
}

impl<T: Data> FlatMap<T> for Stream<T> {
    fn flat_map<U: Data, I: IntoIterator<Item = U>, L: FnMut(T) -> I + 'static>(
        mut self,
        mut logic: L,
    ) -> Stream<U> {
        let unpack = Box::new(move |elem: Elem| {
            logic(unwrap_elem::<T>(elem))
                .into_iter()
                .map(|output| Box::new(output) as Elem)
                .collect::<Vec<_>>()
        });
        self.worker
            .append(NodeKind::Buffering(BufferingOp::new(Policy::Flatten { unpack })));
        self.retype()
    }
}
