//! Rivulet is a lazy, pull-driven pipeline for processing sequences.
//!
//! A [`Stream`] is a handle to a chain of operations: one source, any number
//! of intermediate transforms, and exactly one terminal consumer. Elements
//! are pulled through the chain one at a time, so nothing intermediate is
//! materialized unless an operation inherently needs the whole sequence
//! (sorting, deduplication, concatenation, flattening). Those buffering
//! operations accumulate their input and, once upstream is drained, splice a
//! freshly materialized source back into the live chain, after which the
//! chain looks exactly as if a finite source had always been there.
//!
//! **Chain traversal**: internally, operations live in an index-addressed
//! arena walked forward one element per tick, with explicit
//! produced/exhausted/terminated outcomes rather than callback cascades.
//!
//! **Logging**: runs emit typed events (node installation, splices, node
//! completion) through the [`rivulet_logging`] registry; see [`logging`].
//!
//! # Examples
//!
//! The following filters, sorts, and truncates a sequence without the
//! source ever being traversed more than once.
//!
//! ```
//! use rivulet::Stream;
//! use rivulet::operators::*;
//!
//! let top = Stream::of([3, 0, 1, 6, 4, 0, 8, 9, 7])
//!     .filter(|n| *n != 0)
//!     .sorted()
//!     .limit(3)
//!     .collect(to_list())?;
//!
//! assert_eq!(top, vec![1, 3, 4]);
//! # Ok::<(), rivulet::Error>(())
//! ```
//!
//! Terminal methods close the handle; running a second terminal against the
//! same handle reports [`Error::StreamClosed`].

#![forbid(missing_docs)]

pub use crate::error::Error;
pub use crate::stream::Stream;

/// Re-export of the `rivulet_logging` crate.
pub mod logging_core {
    pub use rivulet_logging::*;
}

mod chain;
mod error;
mod worker;

pub mod logging;
pub mod operators;
pub mod stream;

/// A composite trait for types usable as stream elements.
///
/// Elements are moved through the chain by value and recovered at the typed
/// surface, which requires `'static`.
pub trait Data: 'static {}
impl<T: 'static> Data for T {}
