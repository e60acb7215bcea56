//! A handle to a typed chain of operations.
//!
//! Most programming against this crate goes through [`Stream`]: builders
//! construct a chain with a source at its head, the extension traits in
//! [`operators`](crate::operators) append intermediate operations, and a
//! terminal method runs the chain and closes the handle.

use std::cell::RefMut;
use std::fmt;
use std::marker::PhantomData;

use crate::chain::node::Elem;
use crate::chain::source::Source;
use crate::error::Error;
use crate::logging::ChainIdentifier;
use crate::logging_core::Registry;
use crate::operators::collect::{to_list, Collect};
use crate::worker::Worker;
use crate::Data;

/// A single-use handle to a chain of operations over elements of type `T`.
///
/// Intermediate operations consume the handle and return it (possibly under
/// a new element type); terminal methods borrow it, run the chain, and close
/// it. A closed handle rejects every further terminal invocation with
/// [`Error::StreamClosed`].
pub struct Stream<T> {
    pub(crate) worker: Worker,
    marker: PhantomData<T>,
}

impl<T: Data> Stream<T> {
    pub(crate) fn from_worker(worker: Worker) -> Self {
        Stream { worker, marker: PhantomData }
    }

    /// Rebinds the element type after an operation that changes it.
    pub(crate) fn retype<U: Data>(self) -> Stream<U> {
        Stream { worker: self.worker, marker: PhantomData }
    }

    /// A stream over a fixed sequence of elements.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::Aggregate;
    ///
    /// assert_eq!(Stream::of([1, 10, 100, 1000]).count()?, 4);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let items = elements
            .into_iter()
            .map(|element| Box::new(element) as Elem)
            .collect();
        Stream::from_worker(Worker::with_source(Source::items(items)))
    }

    /// A stream over nothing.
    pub fn empty() -> Self {
        Stream::of(std::iter::empty())
    }

    /// An endless stream supplied by `logic`, invoked once per pulled
    /// element. It never terminates on its own; bound it downstream, e.g.
    /// with [`limit`](crate::operators::Limit::limit).
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let mut next = 0;
    /// let squares = Stream::generate(move || { next += 1; next * next })
    ///     .limit(4)
    ///     .collect(to_list())?;
    /// assert_eq!(squares, vec![1, 4, 9, 16]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    pub fn generate<L: FnMut() -> T + 'static>(mut logic: L) -> Self {
        let producer = Box::new(move || Box::new(logic()) as Elem);
        Stream::from_worker(Worker::with_source(Source::generate(producer)))
    }

    /// Eagerly drains `streams`, in order, into one new stream.
    ///
    /// This is a construction-time operation: every operand runs to
    /// completion here, which is why draining a closed operand fails. The
    /// lazy counterpart appending elements to a live chain is
    /// [`concat`](crate::operators::Concat::concat).
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let mut letters = Stream::concat([
    ///     Stream::of(["a", "b"]),
    ///     Stream::of(["c", "d"]),
    /// ])?;
    /// assert_eq!(letters.collect(to_list())?, vec!["a", "b", "c", "d"]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    pub fn concat<I: IntoIterator<Item = Stream<T>>>(streams: I) -> Result<Self, Error> {
        let mut items = Vec::new();
        for mut stream in streams {
            items.extend(stream.collect(to_list())?);
        }
        Ok(Stream::of(items))
    }

    /// Provides access to the handle's logging registry.
    ///
    /// Subscribe before invoking a terminal method; events flow once the
    /// run starts.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::logging::{PipelineEvent, PIPELINE_LOG};
    /// use rivulet::operators::Aggregate;
    ///
    /// let mut stream = Stream::of([1, 2, 3]);
    /// stream
    ///     .log_register()
    ///     .insert::<PipelineEvent, _>(PIPELINE_LOG, |_time, batch| {
    ///         for (time, chain, event) in batch.drain(..) {
    ///             println!("{:?}\t{}\t{:?}", time, chain, event);
    ///         }
    ///     });
    /// stream.count()?;
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    pub fn log_register(&self) -> RefMut<'_, Registry<ChainIdentifier>> {
        self.worker.log_register()
    }
}

impl Stream<i64> {
    /// A numeric stream over the inclusive range `min..=max`.
    ///
    /// Fails fast with [`Error::InvalidRange`] if `min > max`.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let range = Stream::range(1, 5)?.collect(to_list())?;
    /// assert_eq!(range, vec![1, 2, 3, 4, 5]);
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    pub fn range(min: i64, max: i64) -> Result<Self, Error> {
        Stream::range_step(min, max, 1)
    }

    /// A numeric stream over `min..=max`, advancing by `step`.
    ///
    /// The bounds name an ascending interval, so besides the `min > max`
    /// check, a step of zero or less is rejected with
    /// [`Error::InvalidStep`] instead of looping forever.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let odds = Stream::range_step(1, 6, 2)?.collect(to_list())?;
    /// assert_eq!(odds, vec![1, 3, 5]);
    /// assert!(Stream::range_step(0, 10, 0).is_err());
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    pub fn range_step(min: i64, max: i64, step: i64) -> Result<Self, Error> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        if step < 1 {
            return Err(Error::InvalidStep { step });
        }
        Ok(Stream::from_worker(Worker::with_source(Source::range(min, max, step))))
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.worker, f)
    }
}
