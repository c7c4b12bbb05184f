//! Statistics errors.

use super::error_code::{self, SpeechnetErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("Unknown network metric '{0}'")]
    UnknownMetric(String),
}

impl SpeechnetErrorCode for StatsError {
    fn error_code(&self) -> &'static str {
        error_code::STATS_ERROR
    }
}
