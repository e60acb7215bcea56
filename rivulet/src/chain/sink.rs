//! The two terminal families: exhaustive folds and short-circuit probes.

use crate::chain::node::{unwrap_elem, Elem};

/// Whether a terminal wants more input.
pub(crate) enum Verdict {
    /// Keep feeding elements.
    Continue,
    /// The answer is determined; stop the run.
    Settled,
}

/// Capability shared by both terminal families.
pub(crate) trait Sink {
    /// Observes one element.
    fn absorb(&mut self, elem: Elem) -> Verdict;
    /// Consumes the accumulated state into the final, type-erased result.
    fn settle(&mut self) -> Elem;
}

/// The exhaustive family: folds every element into an accumulator, then
/// finishes once upstream drains. Never settles early.
pub(crate) struct Reducer<A, T, R> {
    acc: Option<A>,
    fold: Box<dyn FnMut(A, T) -> A>,
    finish: Box<dyn FnMut(A) -> R>,
}

impl<A: 'static, T: 'static, R: 'static> Reducer<A, T, R> {
    pub fn new(
        seed: A,
        fold: impl FnMut(A, T) -> A + 'static,
        finish: impl FnMut(A) -> R + 'static,
    ) -> Self {
        Reducer {
            acc: Some(seed),
            fold: Box::new(fold),
            finish: Box::new(finish),
        }
    }
}

impl<A: 'static, T: 'static, R: 'static> Sink for Reducer<A, T, R> {
    fn absorb(&mut self, elem: Elem) -> Verdict {
        let item = unwrap_elem::<T>(elem);
        let acc = self.acc.take().expect("accumulator present until settled");
        self.acc = Some((self.fold)(acc, item));
        Verdict::Continue
    }

    fn settle(&mut self) -> Elem {
        let acc = self.acc.take().expect("terminals settle exactly once");
        Box::new((self.finish)(acc))
    }
}

/// The short-circuit family: checks elements until one of them determines
/// the overall answer, then abandons the rest of the upstream.
pub(crate) struct Probe<T, R> {
    result: Option<R>,
    check: Box<dyn FnMut(T) -> Option<R>>,
}

impl<T: 'static, R: 'static> Probe<T, R> {
    /// `check` returns the settled answer, or `None` to keep going;
    /// `default` is the answer when upstream drains undecided.
    pub fn new(default: R, check: impl FnMut(T) -> Option<R> + 'static) -> Self {
        Probe {
            result: Some(default),
            check: Box::new(check),
        }
    }
}

impl<T: 'static, R: 'static> Sink for Probe<T, R> {
    fn absorb(&mut self, elem: Elem) -> Verdict {
        let item = unwrap_elem::<T>(elem);
        match (self.check)(item) {
            Some(answer) => {
                self.result = Some(answer);
                Verdict::Settled
            }
            None => Verdict::Continue,
        }
    }

    fn settle(&mut self) -> Elem {
        let result = self.result.take().expect("terminals settle exactly once");
        Box::new(result)
    }
}
