//! Schedule source error types.

/// Errors that can occur while loading the schedule grid.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("fetching {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Local file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Body was not a grid of cells
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
