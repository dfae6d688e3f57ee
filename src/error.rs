//! Error types for tts-dispatch
//!
//! Every variant's `Display` text is the diagnostic printed to stderr.

use std::io;
use thiserror::Error;

/// Main error type for a dispatch run
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Error: Text cannot be empty.")]
    EmptyInput,

    #[error("Sorry! Only English and Hindi are supported currently.")]
    UnsupportedCulture(String),

    #[error("Unsupported OS for Text-to-Speech.")]
    UnsupportedPlatform(String),

    #[error("Windows version too old for TTS.")]
    VersionTooOld(u32),

    /// The speech host process could not be started
    #[error("{message} {source}")]
    Spawn {
        message: &'static str,
        source: io::Error,
    },

    /// The speech host ran but reported failure
    #[error("{hint}")]
    NonZeroExit {
        hint: &'static str,
        code: Option<i32>,
    },

    /// Waiting on the speech host was interrupted
    #[error("{0}")]
    Interrupted(&'static str),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("An unexpected error occurred: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_message_includes_os_error() {
        let err = DispatchError::Spawn {
            message: "Error running 'say' command:",
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "Error running 'say' command: No such file or directory"
        );
    }

    #[test]
    fn test_interrupted_message_is_backend_specific() {
        assert_eq!(
            DispatchError::Interrupted("Operation interrupted.").to_string(),
            "Operation interrupted."
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            DispatchError::EmptyInput.to_string(),
            "Error: Text cannot be empty."
        );
        assert_eq!(
            DispatchError::VersionTooOld(5).to_string(),
            "Windows version too old for TTS."
        );
    }
}
