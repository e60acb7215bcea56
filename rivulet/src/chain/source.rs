//! Chain heads: operations that supply elements on demand.

use std::vec;

use crate::chain::node::Elem;

/// The closed set of element suppliers.
pub(crate) enum Source {
    /// A fixed sequence handed out front to back.
    Items { items: vec::IntoIter<Elem> },
    /// A producer invoked once per pull; never exhausts on its own, so
    /// termination must come from a cut downstream.
    Generate { producer: Box<dyn FnMut() -> Elem> },
    /// An inclusive ascending range of `i64`s.
    Range { current: Option<i64>, max: i64, step: i64 },
}

impl Source {
    pub fn items(items: Vec<Elem>) -> Self {
        Source::Items { items: items.into_iter() }
    }

    pub fn generate(producer: Box<dyn FnMut() -> Elem>) -> Self {
        Source::Generate { producer }
    }

    /// Bounds are validated by the stream builders before this is reached.
    pub fn range(min: i64, max: i64, step: i64) -> Self {
        Source::Range { current: Some(min), max, step }
    }

    /// Supplies the next element, or `None` once exhausted.
    pub fn supply(&mut self) -> Option<Elem> {
        match self {
            Source::Items { items } => items.next(),
            Source::Generate { producer } => Some(producer()),
            Source::Range { current, max, step } => {
                let value = (*current)?;
                if value > *max {
                    *current = None;
                    return None;
                }
                *current = value.checked_add(*step);
                Some(Box::new(value))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::Items { .. } => "Items",
            Source::Generate { .. } => "Generate",
            Source::Range { .. } => "Range",
        }
    }
}
