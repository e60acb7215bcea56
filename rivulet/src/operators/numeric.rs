//! Aggregations specific to numeric streams.

use crate::chain::sink::Reducer;
use crate::error::Error;
use crate::stream::Stream;

/// Extension trait for numeric terminal operations. Each method runs the
/// chain and closes the handle.
pub trait Numeric {
    /// Sum of all elements. `None` over an empty stream — sum is the
    /// unseeded pairwise reduction, not a fold from zero.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Numeric;
    ///
    /// assert_eq!(Stream::range(1, 4)?.sum()?, Some(10));
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn sum(&mut self) -> Result<Option<i64>, Error>;

    /// Arithmetic mean of all elements; `None` over an empty stream, never
    /// a division by zero.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Numeric;
    ///
    /// assert_eq!(Stream::range(0, 100)?.average()?, Some(50.0));
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn average(&mut self) -> Result<Option<f64>, Error>;
}

impl Numeric for Stream<i64> {
    fn sum(&mut self) -> Result<Option<i64>, Error> {
        let sink = Reducer::new(
            None,
            |acc: Option<i64>, item: i64| Some(acc.map_or(item, |prev| prev + item)),
            |acc| acc,
        );
        self.worker.run("Sum", Box::new(sink))
    }

    fn average(&mut self) -> Result<Option<f64>, Error> {
        let sink = Reducer::new(
            (0i64, 0usize),
            |(total, seen): (i64, usize), item: i64| (total + item, seen + 1),
            |(total, seen)| {
                if seen == 0 {
                    None
                } else {
                    Some(total as f64 / seen as f64)
                }
            },
        );
        self.worker.run("Average", Box::new(sink))
    }
}
