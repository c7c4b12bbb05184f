//! Speech network engine.
//!
//! Annotation records flow through four stages:
//! edge aggregation ([`edges`]), graph construction ([`network`]),
//! centrality statistics ([`stats`]) and layout ([`layout`]). [`scene`]
//! turns the results into a render-ready description for an external
//! drawing backend, and [`pipeline::SpeechNetwork`] ties the stages together.

pub mod edges;
pub mod format;
pub mod layout;
pub mod network;
pub mod pipeline;
pub mod scene;
pub mod stats;

pub use edges::{aggregate, Edge, EdgeAggregator};
pub use layout::{interpolated_point, Layout, LayoutProvider, Point};
pub use network::{build_network, SpeechGraph};
pub use pipeline::SpeechNetwork;
pub use stats::{compute_stats, Metric, NodeStats, StatsEngine, StatsTable};
