//! Network statistics: degree counts, betweenness centrality and PageRank.

pub mod betweenness;
pub mod degree;
pub mod engine;
pub mod pagerank;
pub mod types;

pub use betweenness::Betweenness;
pub use degree::{degree_counts, DegreeCounts};
pub use engine::{compute_stats, Centrality, StatsEngine};
pub use pagerank::{PageRank, PageRankParams};
pub use types::{Metric, NodeStats, StatsRow, StatsTable};
