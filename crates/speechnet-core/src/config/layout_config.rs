//! Layout configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// "kamada_kawai" or "circular". Default: "kamada_kawai".
    pub algorithm: Option<String>,
    /// Stress-minimization sweeps. Default: 300.
    pub max_iterations: Option<usize>,
    /// Largest absolute coordinate after rescaling. Default: 1.0.
    pub scale: Option<f64>,
}

impl LayoutConfig {
    pub fn effective_algorithm(&self) -> &str {
        self.algorithm.as_deref().unwrap_or("kamada_kawai")
    }

    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations.unwrap_or(300)
    }

    pub fn effective_scale(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }
}
