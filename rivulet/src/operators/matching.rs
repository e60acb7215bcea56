//! Short-circuiting terminal predicates.
//!
//! Each method stops the run the moment one element makes the overall
//! answer determinate; the remaining upstream work is abandoned, not
//! drained.

use crate::chain::sink::Probe;
use crate::error::Error;
use crate::stream::Stream;
use crate::Data;

/// Extension trait for short-circuiting terminal operations. Each method
/// runs the chain and closes the handle.
pub trait Matching<T: Data> {
    /// True iff every element satisfies `predicate`; settles false at the
    /// first counterexample. True over an empty stream.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Matching;
    ///
    /// assert!(Stream::of([1, 2, 3, 4]).all_match(|n| *n > 0)?);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn all_match<P: FnMut(&T) -> bool + 'static>(&mut self, predicate: P) -> Result<bool, Error>;

    /// True iff some element satisfies `predicate`; settles true at the
    /// first witness, and nothing past it is ever observed.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Matching;
    ///
    /// assert!(Stream::of([1, 2, 3, 4]).any_match(|n| *n > 3)?);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn any_match<P: FnMut(&T) -> bool + 'static>(&mut self, predicate: P) -> Result<bool, Error>;

    /// True iff no element satisfies `predicate`; settles false at the
    /// first witness.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Matching;
    ///
    /// assert!(Stream::of([1, 2, 3]).none_match(|n| *n > 9)?);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn none_match<P: FnMut(&T) -> bool + 'static>(&mut self, predicate: P) -> Result<bool, Error>;

    /// The first element satisfying `predicate`, or `None` when nothing
    /// matches.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Matching;
    ///
    /// let hit = Stream::of([1, 2, 3, 4]).find_any(|n| *n % 2 == 0)?;
    /// assert_eq!(hit, Some(2));
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn find_any<P: FnMut(&T) -> bool + 'static>(&mut self, predicate: P)
        -> Result<Option<T>, Error>;
}

impl<T: Data> Matching<T> for Stream<T> {
    fn all_match<P: FnMut(&T) -> bool + 'static>(&mut self, mut predicate: P) -> Result<bool, Error> {
        let sink = Probe::new(true, move |item: T| {
            if predicate(&item) {
                None
            } else {
                Some(false)
            }
        });
        self.worker.run("AllMatch", Box::new(sink))
    }

    fn any_match<P: FnMut(&T) -> bool + 'static>(&mut self, mut predicate: P) -> Result<bool, Error> {
        let sink = Probe::new(false, move |item: T| predicate(&item).then_some(true));
        self.worker.run("AnyMatch", Box::new(sink))
    }

    fn none_match<P: FnMut(&T) -> bool + 'static>(&mut self, mut predicate: P) -> Result<bool, Error> {
        let sink = Probe::new(true, move |item: T| predicate(&item).then_some(false));
        self.worker.run("NoneMatch", Box::new(sink))
    }

    fn find_any<P: FnMut(&T) -> bool + 'static>(
        &mut self,
        mut predicate: P,
    ) -> Result<Option<T>, Error> {
        let sink = Probe::new(None, move |item: T| {
            if predicate(&item) {
                Some(Some(item))
            } else {
                None
            }
        });
        self.worker.run("FindAny", Box::new(sink))
    }
}
