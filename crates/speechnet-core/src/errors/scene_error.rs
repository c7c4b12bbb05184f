//! Scene assembly errors.

use super::error_code::{self, SpeechnetErrorCode};

/// Errors raised while assembling a scene for a render adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// The graph and the layout were built from different node sets.
    #[error("No layout position for character '{character}'")]
    MissingPosition { character: String },
}

impl SpeechnetErrorCode for SceneError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPosition { .. } => error_code::MISSING_IDENTIFIER,
        }
    }
}
