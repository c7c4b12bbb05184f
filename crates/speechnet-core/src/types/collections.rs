//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec for speaker/addressee lists (usually one or two identifiers).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
