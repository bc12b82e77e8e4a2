use std::path::PathBuf;

/// Errors that can occur when acquiring or using a byte stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Failed to open an existing file for reading.
    #[error("failed to open {path} for reading: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create a file for writing.
    #[error("failed to create {path} for writing: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error occurred on the stream.
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StreamError>;
