//! Scene types.

use serde::{Deserialize, Serialize};
use speechnet_core::config::PlotConfig;
use speechnet_core::errors::StatsError;

use crate::format::HOVER_TEXT_LIMIT;
use crate::layout::Point;
use crate::stats::Metric;

/// How a scene is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    /// Metric whose share sizes the nodes.
    pub node_size: Metric,
    pub node_factor: f64,
    /// Minimal node size.
    pub node_alpha: f64,
    /// Characters of edge evidence kept in hover text.
    pub hover_text_limit: usize,
    /// Scene title, usually the text name.
    pub title: Option<String>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            node_size: Metric::Betweenness,
            node_factor: 100.0,
            node_alpha: 3.0,
            hover_text_limit: HOVER_TEXT_LIMIT,
            title: None,
        }
    }
}

impl SceneOptions {
    /// Options from plot configuration. `title` is only kept when the
    /// configuration asks for titles.
    pub fn from_config(config: &PlotConfig, title: Option<&str>) -> Result<Self, StatsError> {
        Ok(Self {
            node_size: config.effective_node_size().parse()?,
            node_factor: config.effective_node_factor(),
            node_alpha: config.effective_node_alpha(),
            hover_text_limit: config.effective_hover_text_limit(),
            title: title
                .filter(|_| config.effective_show_title())
                .map(str::to_string),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// One directed arc as drawn: an arrow from near the speaker to near the
/// addressee plus a hover marker on the line between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeGlyph {
    /// `speaker → addressee`.
    pub label: String,
    pub speaker: String,
    pub addressee: String,
    pub weight: u32,
    /// Arrow head, just off the addressee.
    pub head: Point,
    /// Arrow tail, just off the speaker.
    pub tail: Point,
    pub hover_point: Point,
    /// Arrow width and hover marker size: share of all weight × 100 + 1.
    pub width: f64,
    pub hover_text: String,
}

/// One character as drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeGlyph {
    pub character: String,
    pub position: Point,
    pub size: f64,
    pub label: String,
    pub hover_text: String,
}

/// Everything a render adapter draws for one network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkScene {
    pub title: Option<String>,
    pub edges: Vec<EdgeGlyph>,
    /// Nodes in statistics table order.
    pub nodes: Vec<NodeGlyph>,
}
