//! Error types for the docloom library.

use std::io;
use thiserror::Error;

/// Result type alias for docloom operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
///
/// Most formatting problems never reach this enum: unparsable lengths,
/// colors and unsupported images degrade to documented neutral defaults so a
/// single bad declaration cannot abort a whole conversion. Only contract
/// violations and I/O surface to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The HTML input could not be read into a DOM.
    #[error("DOM read error: {0}")]
    Dom(String),

    /// Invalid input to the aspect-ratio computation.
    ///
    /// Distinct from the silent degradations: a zero or non-finite dimension
    /// here signals a data-contract violation, not a formatting quirk.
    #[error("invalid aspect ratio input: {width}x{height}")]
    InvalidRatio {
        /// Width passed to the computation
        width: f32,
        /// Height passed to the computation
        height: f32,
    },

    /// Error exporting the document model.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRatio {
            width: 200.0,
            height: 0.0,
        };
        assert_eq!(err.to_string(), "invalid aspect ratio input: 200x0");

        let err = Error::Dom("unexpected EOF".to_string());
        assert_eq!(err.to_string(), "DOM read error: unexpected EOF");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
