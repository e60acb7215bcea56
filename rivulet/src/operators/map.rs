//! Extension methods for `Stream` based on record-by-record transformation.

use crate::chain::node::{unwrap_elem, Elem, NodeKind, Streaming};
use crate::stream::Stream;
use crate::Data;

/// Extension trait for `Stream`.
pub trait Map<T: Data> {
    /// Consumes each element of the stream and yields a new element.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let repeated = Stream::of(["a", "b", "c"])
    ///     .map(|s| s.repeat(3))
    ///     .collect(to_list())?;
    /// assert_eq!(repeated, vec!["aaa", "bbb", "ccc"]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn map<U: Data, L: FnMut(T) -> U + 'static>(self, logic: L) -> Stream<U>;
}

impl<T: Data> Map<T> for Stream<T> {
    fn map<U: Data, L: FnMut(T) -> U + 'static>(mut self, mut logic: L) -> Stream<U> {
        self.worker.append(NodeKind::Streaming(Streaming::Map {
            logic: Box::new(move |elem: Elem| Box::new(logic(unwrap_elem::<T>(elem))) as Elem),
        }));
        self.retype()
    }
}
