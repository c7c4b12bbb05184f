//! Edge aggregation: annotation records → weighted directed edges.

pub mod aggregator;
pub mod types;

pub use aggregator::{aggregate, EdgeAggregator};
pub use types::{Edge, EdgeKey};
