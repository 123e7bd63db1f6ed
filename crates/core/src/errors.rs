use thiserror::Error;

/// Unified error type for the entire expense-tracker-core library.
/// Every fallible operation returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport / Backend ─────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status. `message` is the
    /// plain-text response body, which carries the server's own
    /// explanation (e.g. a server-side validation failure).
    #[error("Backend returned status {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Client-side ─────────────────────────────────────────────────
    /// Form validation failed before any request was issued.
    #[error("Validation failed: {0}")]
    Validation(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
