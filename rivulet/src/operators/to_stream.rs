//! Conversion to the `Stream` type from iterators.

use crate::stream::Stream;
use crate::Data;

/// Converts to a rivulet [`Stream`].
pub trait ToStream<T: Data> {
    /// Converts to a rivulet [`Stream`].
    ///
    /// # Examples
    /// ```
    /// use rivulet::operators::*;
    ///
    /// let doubled = (0..5).to_stream().map(|x| x * 2).collect(to_list())?;
    /// assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn to_stream(self) -> Stream<T>;
}

impl<T: Data, I: IntoIterator<Item = T>> ToStream<T> for I {
    fn to_stream(self) -> Stream<T> {
        Stream::of(self)
    }
}
