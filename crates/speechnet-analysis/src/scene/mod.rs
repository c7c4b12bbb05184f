//! Render-ready description of a speech network.
//!
//! Everything a drawing backend needs (arrow endpoints, marker sizes,
//! labels, hover text) is computed here; the backend only draws.

pub mod adapter;
pub mod builder;
pub mod types;

pub use adapter::{JsonSceneWriter, RenderAdapter};
pub use builder::build_scene;
pub use types::{EdgeGlyph, NetworkScene, NodeGlyph, SceneOptions};
