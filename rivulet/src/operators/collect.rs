//! Terminal collection of a stream into standard containers.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::chain::sink::{Reducer, Sink};
use crate::error::Error;
use crate::stream::Stream;
use crate::Data;

/// A packaged terminal that gathers elements of type `T` into a container
/// of type `R`. Built by [`to_list`], [`to_set`], or [`to_map`], and handed
/// to [`Collect::collect`].
pub struct Collector<T, R> {
    name: &'static str,
    sink: Box<dyn Sink>,
    marker: PhantomData<fn(T) -> R>,
}

impl<T: Data, R: 'static> Collector<T, R> {
    fn new(name: &'static str, sink: impl Sink + 'static) -> Self {
        Collector { name, sink: Box::new(sink), marker: PhantomData }
    }
}

/// Gathers elements into a `Vec`, preserving stream order.
pub fn to_list<T: Data>() -> Collector<T, Vec<T>> {
    Collector::new(
        "ToList",
        Reducer::new(
            Vec::new(),
            |mut list: Vec<T>, item: T| {
                list.push(item);
                list
            },
            |list| list,
        ),
    )
}

/// Gathers elements into a `HashSet`; duplicates collapse and iteration
/// order is not specified.
pub fn to_set<T: Data + Eq + Hash>() -> Collector<T, HashSet<T>> {
    Collector::new(
        "ToSet",
        Reducer::new(
            HashSet::new(),
            |mut set: HashSet<T>, item: T| {
                set.insert(item);
                set
            },
            |set| set,
        ),
    )
}

/// Gathers elements into a `HashMap` under `key_logic`, storing
/// `value_logic` of each element; the last write wins for a duplicate key.
pub fn to_map<T, K, V>(
    mut key_logic: impl FnMut(&T) -> K + 'static,
    mut value_logic: impl FnMut(T) -> V + 'static,
) -> Collector<T, HashMap<K, V>>
where
    T: Data,
    K: Data + Eq + Hash,
    V: Data,
{
    Collector::new(
        "ToMap",
        Reducer::new(
            HashMap::new(),
            move |mut map: HashMap<K, V>, item: T| {
                let key = key_logic(&item);
                map.insert(key, value_logic(item));
                map
            },
            |map| map,
        ),
    )
}

/// Extension trait for collecting a stream. Runs the chain and closes the
/// handle.
pub trait Collect<T: Data> {
    /// Runs the chain into `collector` and returns the gathered container.
    ///
    /// # Examples
    /// ```
    /// use rivulet::Stream;
    /// use rivulet::operators::*;
    ///
    /// let codes = Stream::of(["a", "b", "c"])
    ///     .collect(to_map(|s: &&str| *s, |s| s.as_bytes()[0]))?;
    /// assert_eq!(codes["b"], b'b');
    /// # Ok::<(), rivulet::Error>(())
    /// ```
    fn collect<R: 'static>(&mut self, collector: Collector<T, R>) -> Result<R, Error>;
}

impl<T: Data> Collect<T> for Stream<T> {
    fn collect<R: 'static>(&mut self, collector: Collector<T, R>) -> Result<R, Error> {
        self.worker.run(collector.name, collector.sink)
    }
}
