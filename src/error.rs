//! Error types for the gesture recognition library.

use thiserror::Error;

/// Main error type for the library.
///
/// The classifier itself is total and never errors; this covers the
/// configuration surface and frame-stream I/O around it.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration load or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Frame stream parsing error
    #[error("Frame stream error: {0}")]
    FrameStream(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
