//! Directed weighted speech graph.

pub mod builder;
pub mod types;

pub use builder::build_network;
pub use types::SpeechGraph;
