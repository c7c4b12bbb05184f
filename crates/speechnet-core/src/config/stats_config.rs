//! Statistics configuration (PageRank power iteration).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatsConfig {
    /// PageRank damping factor. Default: 0.85.
    pub damping: Option<f64>,
    /// PageRank iteration cap. Default: 100.
    pub max_iterations: Option<usize>,
    /// Per-node convergence tolerance. Default: 1e-6.
    pub tolerance: Option<f64>,
}

impl StatsConfig {
    pub fn effective_damping(&self) -> f64 {
        self.damping.unwrap_or(0.85)
    }

    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations.unwrap_or(100)
    }

    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(1e-6)
    }
}
