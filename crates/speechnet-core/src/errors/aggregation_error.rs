//! Edge aggregation errors.

use super::error_code::{self, SpeechnetErrorCode};

/// Errors raised before any record is aggregated.
///
/// Every variant is an invalid-configuration error: the request itself is
/// malformed or does not fit the corpus, so retrying cannot help.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregationError {
    #[error(
        "Unknown annotation mode '{0}': choose either 'character_speech' or 'embedded_narrations'"
    )]
    UnknownAnnotationMode(String),

    #[error("Unknown corpus '{0}': choose either 'novellas' or 'dramas'")]
    UnknownCorpus(String),

    #[error("The {corpus} corpus has no character speech layer; only embedded narration networks are possible")]
    IncompatibleCorpus { corpus: String },
}

impl SpeechnetErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_CONFIGURATION
    }
}
