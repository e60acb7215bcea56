//! Terminal accumulation over every element of a stream.

use std::cmp::Ordering;

use crate::chain::sink::Reducer;
use crate::error::Error;
use crate::stream::Stream;
use crate::Data;

/// Extension trait for exhaustive terminal operations. Each method runs the
/// chain to completion and closes the handle.
pub trait Aggregate<T: Data> {
    /// Applies `logic` to every element, in order.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Aggregate;
    ///
    /// Stream::of([3, 1, 4]).for_each(|x| println!("seen: {:?}", x))?;
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn for_each<L: FnMut(T) + 'static>(&mut self, logic: L) -> Result<(), Error>;

    /// Counts the elements that reach the end of the chain.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::{Aggregate, Filter};
    ///
    /// let over_five = Stream::of([1, 10, 100, 1000]).filter(|n| *n > 5).count()?;
    /// assert_eq!(over_five, 3);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn count(&mut self) -> Result<usize, Error>;

    /// Combines elements pairwise with `logic`; `None` over an empty
    /// stream — "nothing seen" is never conflated with a zero-like value.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Aggregate;
    ///
    /// assert_eq!(Stream::of([2, 3, 4]).reduce(|a, b| a * b)?, Some(24));
    /// assert_eq!(Stream::<i64>::empty().reduce(|a, b| a * b)?, None);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn reduce<L: FnMut(T, T) -> T + 'static>(&mut self, logic: L) -> Result<Option<T>, Error>;

    /// Combines elements pairwise with `logic`, starting from `seed`.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Aggregate;
    ///
    /// let product = Stream::range(1, 4)?.fold(5, |a, b| a * b)?;
    /// assert_eq!(product, 120);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn fold<L: FnMut(T, T) -> T + 'static>(&mut self, seed: T, logic: L) -> Result<T, Error>;

    /// The least element under `logic`; the first such element wins ties.
    /// `None` over an empty stream.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Aggregate;
    ///
    /// let least = Stream::of([3, 1, 4]).min_by(|a, b| a.cmp(b))?;
    /// assert_eq!(least, Some(1));
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn min_by<L: FnMut(&T, &T) -> Ordering + 'static>(&mut self, logic: L)
        -> Result<Option<T>, Error>;

    /// The greatest element under `logic`; the first such element wins
    /// ties. `None` over an empty stream.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Aggregate;
    ///
    /// let greatest = Stream::of([3, 1, 4]).max_by(|a, b| a.cmp(b))?;
    /// assert_eq!(greatest, Some(4));
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn max_by<L: FnMut(&T, &T) -> Ordering + 'static>(&mut self, logic: L)
        -> Result<Option<T>, Error>;
}

impl<T: Data> Aggregate<T> for Stream<T> {
    fn for_each<L: FnMut(T) + 'static>(&mut self, logic: L) -> Result<(), Error> {
        let sink = Reducer::new(
            logic,
            |mut action: L, item: T| {
                action(item);
                action
            },
            |_| (),
        );
        self.worker.run("ForEach", Box::new(sink))
    }

    fn count(&mut self) -> Result<usize, Error> {
        let sink = Reducer::new(0usize, |total, _item: T| total + 1, |total| total);
        self.worker.run("Count", Box::new(sink))
    }

    fn reduce<L: FnMut(T, T) -> T + 'static>(&mut self, mut logic: L) -> Result<Option<T>, Error> {
        let sink = Reducer::new(
            None,
            move |acc: Option<T>, item: T| match acc {
                None => Some(item),
                Some(prev) => Some(logic(prev, item)),
            },
            |acc| acc,
        );
        self.worker.run("Reduce", Box::new(sink))
    }

    fn fold<L: FnMut(T, T) -> T + 'static>(&mut self, seed: T, logic: L) -> Result<T, Error> {
        let sink = Reducer::new(seed, logic, |acc| acc);
        self.worker.run("Fold", Box::new(sink))
    }

    fn min_by<L: FnMut(&T, &T) -> Ordering + 'static>(
        &mut self,
        mut logic: L,
    ) -> Result<Option<T>, Error> {
        let sink = Reducer::new(
            None,
            move |acc: Option<T>, item: T| match acc {
                None => Some(item),
                Some(best) => {
                    if logic(&best, &item) == Ordering::Greater {
                        Some(item)
                    } else {
                        Some(best)
                    }
                }
            },
            |acc| acc,
        );
        self.worker.run("MinBy", Box::new(sink))
    }

    fn max_by<L: FnMut(&T, &T) -> Ordering + 'static>(
        &mut self,
        mut logic: L,
    ) -> Result<Option<T>, Error> {
        let sink = Reducer::new(
            None,
            move |acc: Option<T>, item: T| match acc {
                None => Some(item),
                Some(best) => {
                    if logic(&best, &item) == Ordering::Less {
                        Some(item)
                    } else {
                        Some(best)
                    }
                }
            },
            |acc| acc,
        );
        self.worker.run("MaxBy", Box::new(sink))
    }
}
