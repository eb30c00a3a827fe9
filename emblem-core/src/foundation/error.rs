/// Convenience result type used across Emblem.
pub type EmblemResult<T> = Result<T, EmblemError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum EmblemError {
    /// Invalid user-provided artwork or render parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while serializing a pixmap into the image container format.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmblemError {
    /// Build an [`EmblemError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EmblemError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
