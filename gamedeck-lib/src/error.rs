use thiserror::Error;

use gamedeck_core::HandlerError;

/// Errors that can occur while loading or serving the gallery.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error for {url}: status {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the JSON we expected
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (settings file, local data)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// No handler is registered for a data source
    #[error("No handler registered for source '{0}'")]
    UnknownHandler(String),

    /// A source handler rejected an entry
    #[error("Source '{source_name}' group {group} item {item}: {error}")]
    Handler {
        source_name: String,
        group: usize,
        item: usize,
        error: HandlerError,
    },

    /// A source document did not have the expected group layout
    #[error("Malformed source '{source_name}': {message}")]
    Malformed {
        source_name: String,
        message: String,
    },

    /// Settings could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GalleryError {
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
