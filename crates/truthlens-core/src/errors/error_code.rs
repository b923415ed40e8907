//! TruthLensErrorCode trait for surface-level error mapping.

/// Structured error metadata consumed by request-handling surfaces.
/// Every error enum implements this so a surface can render a stable code,
/// choose a status, and decide whether the caller may retry.
pub trait TruthLensErrorCode {
    /// Returns the error code string (e.g., "ENGINE_NOT_READY").
    fn error_code(&self) -> &'static str;

    /// HTTP-style status a surface should answer with.
    fn status_code(&self) -> u16 {
        500
    }

    /// Whether re-attempting the same call later can succeed.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const ENGINE_NOT_READY: &str = "ENGINE_NOT_READY";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LEXICON_ERROR: &str = "LEXICON_ERROR";
