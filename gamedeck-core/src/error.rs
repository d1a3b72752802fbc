use thiserror::Error;

/// Errors a source handler can report for a single data-file entry.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A required field is absent or not a string
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// The entry or its group has an unexpected JSON shape
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
}

impl HandlerError {
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }
}
