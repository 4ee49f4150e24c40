/// Convenience result type used across the keyer.
pub type KeyResult<T> = Result<T, KeyError>;

/// Error taxonomy for the frame-level keying API.
///
/// The per-pixel kernel is total and never produces one of these; errors only come from the
/// boundaries around it (buffer shapes, thread pools, settings documents).
#[derive(thiserror::Error, Debug)]
pub enum KeyError {
    /// Invalid caller-provided data (frame shape, threading options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while running the frame pipeline.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeyError {
    /// Build a [`KeyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeyError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`KeyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KeyError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
