use thiserror::Error;

/// The two failure classes an API caller can see.
///
/// Client-input problems are detected before any external call; upstream
/// failures are whatever the Generation Service surfaced, never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadInput(String),
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn bad_input(msg: impl Into<String>) -> Self {
        Self::BadInput(msg.into())
    }

    /// Wrap an upstream failure, falling back to a fixed message when the
    /// underlying error text is empty.
    pub fn upstream(err: anyhow::Error) -> Self {
        let msg = err.to_string();
        if msg.trim().is_empty() {
            Self::Upstream("server error".into())
        } else {
            Self::Upstream(msg)
        }
    }

    pub fn is_bad_input(&self) -> bool {
        matches!(self, Self::BadInput(_))
    }
}
