//! Truncates a stream from either end.

use crate::chain::node::{NodeKind, Streaming};
use crate::stream::Stream;
use crate::Data;

/// Extension trait for truncation.
pub trait Limit<T: Data> {
    /// Passes at most the first `limit` elements, then cuts the chain, so
    /// upstream is never pulled for more — an infinite generator feeding a
    /// `limit(k)` is invoked exactly `k` times.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let first = Stream::generate(|| 7).limit(3).collect(to_list())?;
    /// assert_eq!(first, vec![7, 7, 7]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn limit(self, limit: usize) -> Stream<T>;

    /// Drops the first `skip` elements and passes the rest.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let rest = Stream::of([1, 2, 3, 4]).skip(2).collect(to_list())?;
    /// assert_eq!(rest, vec![3, 4]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn skip(self, skip: usize) -> Stream<T>;
}

impl<T: Data> Limit<T> for Stream<T> {
    fn limit(mut self, limit: usize) -> Stream<T> {
        self.worker
            .append(NodeKind::Streaming(Streaming::Limit { remaining: limit }));
        self
    }

    fn skip(mut self, skip: usize) -> Stream<T> {
        self.worker
            .append(NodeKind::Streaming(Streaming::Skip { remaining: skip }));
        self
    }
}
