//! SpeechnetErrorCode trait for structured error reporting.

/// Trait for mapping errors to stable error code strings.
/// Every error enum implements this so that callers (and render adapters)
/// can branch on a code instead of parsing messages.
pub trait SpeechnetErrorCode {
    /// Returns the error code string (e.g., "INVALID_CONFIGURATION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STATS_ERROR: &str = "STATS_ERROR";
pub const LAYOUT_ERROR: &str = "LAYOUT_ERROR";
pub const MISSING_IDENTIFIER: &str = "MISSING_IDENTIFIER";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
