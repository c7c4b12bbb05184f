//! Error handling for the speech network engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod aggregation_error;
pub mod config_error;
pub mod error_code;
pub mod layout_error;
pub mod pipeline_error;
pub mod scene_error;
pub mod stats_error;

pub use aggregation_error::AggregationError;
pub use config_error::ConfigError;
pub use error_code::SpeechnetErrorCode;
pub use layout_error::LayoutError;
pub use pipeline_error::PipelineError;
pub use scene_error::SceneError;
pub use stats_error::StatsError;
