//! Plot configuration consumed by scene assembly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlotConfig {
    /// Metric used for node size. Default: "betweenness".
    pub node_size: Option<String>,
    /// Multiplier applied to the node's metric share. Default: 100.0.
    pub node_factor: Option<f64>,
    /// Minimal node size. Default: 3.0.
    pub node_alpha: Option<f64>,
    /// Characters of edge evidence shown on hover. Default: 500.
    pub hover_text_limit: Option<usize>,
    /// Whether to title the scene with the text name. Default: false.
    pub show_title: Option<bool>,
    /// Rows of the stats table shown next to the plot. Default: 5.
    pub top_stats: Option<usize>,
}

impl PlotConfig {
    pub fn effective_node_size(&self) -> &str {
        self.node_size.as_deref().unwrap_or("betweenness")
    }

    pub fn effective_node_factor(&self) -> f64 {
        self.node_factor.unwrap_or(100.0)
    }

    pub fn effective_node_alpha(&self) -> f64 {
        self.node_alpha.unwrap_or(3.0)
    }

    pub fn effective_hover_text_limit(&self) -> usize {
        self.hover_text_limit.unwrap_or(500)
    }

    pub fn effective_show_title(&self) -> bool {
        self.show_title.unwrap_or(false)
    }

    pub fn effective_top_stats(&self) -> usize {
        self.top_stats.unwrap_or(5)
    }
}
