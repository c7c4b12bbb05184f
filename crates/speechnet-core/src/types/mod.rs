//! Shared types: annotation records, network modes, collection aliases.

pub mod annotation;
pub mod collections;
pub mod network_mode;

pub use annotation::AnnotationRecord;
pub use network_mode::{CorpusKind, NetworkAnnotations, NetworkParams};
