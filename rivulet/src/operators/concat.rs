//! Appends extra elements behind everything a stream produces.

use crate::chain::node::{BufferingOp, Elem, NodeKind, Policy};
use crate::stream::Stream;
use crate::Data;

/// Extension trait for appending elements.
pub trait Concat<T: Data> {
    /// Appends `extra` after the last element the stream itself produces.
    ///
    /// Buffering: the stream's own elements are accumulated in full before
    /// the combined sequence flows on. The eager builder draining whole
    /// streams at construction time is
    /// [`Stream::concat`](crate::Stream::concat).
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let joined = Stream::of([1, 2]).concat([3, 4]).collect(to_list())?;
    /// assert_eq!(joined, vec![1, 2, 3, 4]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn concat<I: IntoIterator<Item = T>>(self, extra: I) -> Stream<T>;
}

impl<T: Data> Concat<T> for Stream<T> {
    fn concat<I: IntoIterator<Item = T>>(mut self, extra: I) -> Stream<T> {
        let extra = extra
            .into_iter()
            .map(|element| Box::new(element) as Elem)
            .collect();
        self.worker
            .append(NodeKind::Buffering(BufferingOp::new(Policy::Concat { extra })));
        self
    }
}
