//! Pipeline errors.

use super::error_code::{self, SpeechnetErrorCode};
use super::{AggregationError, ConfigError, LayoutError, SceneError, StatsError};

/// Errors that can occur while running the full network pipeline.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Render adapter failed: {0}")]
    Render(String),
}

impl SpeechnetErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Aggregation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Stats(e) => e.error_code(),
            Self::Layout(e) => e.error_code(),
            Self::Scene(e) => e.error_code(),
            Self::Render(_) => error_code::RENDER_ERROR,
        }
    }
}
