//! Extension traits and collectors for `Stream` handles.

pub use self::aggregate::Aggregate;
pub use self::collect::{to_list, to_map, to_set, Collect, Collector};
pub use self::concat::Concat;
pub use self::distinct::Distinct;
pub use self::filter::Filter;
pub use self::flat_map::FlatMap;
pub use self::limit::Limit;
pub use self::map::Map;
pub use self::matching::Matching;
pub use self::numeric::Numeric;
pub use self::sort::Sort;
pub use self::to_stream::ToStream;

pub mod aggregate;
pub mod collect;
pub mod concat;
pub mod distinct;
pub mod filter;
pub mod flat_map;
pub mod limit;
pub mod map;
pub mod matching;
pub mod numeric;
pub mod sort;
pub mod to_stream;
