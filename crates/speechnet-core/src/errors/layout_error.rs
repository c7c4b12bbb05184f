//! Layout errors.

use super::error_code::{self, SpeechnetErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Unknown layout algorithm '{0}': choose either 'kamada_kawai' or 'circular'")]
    UnknownAlgorithm(String),
}

impl SpeechnetErrorCode for LayoutError {
    fn error_code(&self) -> &'static str {
        error_code::LAYOUT_ERROR
    }
}
