use thiserror::Error;

/// Failure reported by a [`Normalizer`](crate::Normalizer) plugin.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("normalization failed: {message}")]
pub struct NormalizeError {
    message: String,
}

impl NormalizeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors surfaced by training and search.
///
/// `Normalize` is per-item and recoverable: a training run keeps going,
/// a search call returns it to the caller.
/// `Cancelled` and `DeadlineExceeded` end a training run.
///
/// "No match" is not an error. `search` reports it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VsmError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("training cancelled")]
    Cancelled,

    #[error("training deadline exceeded")]
    DeadlineExceeded,
}

impl VsmError {
    /// true for the errors that terminate a training worker
    pub fn is_cancellation(&self) -> bool {
        matches!(self, VsmError::Cancelled | VsmError::DeadlineExceeded)
    }
}
