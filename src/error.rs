//! Error handling module for UFO Burgers
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The interactive core never fails (inputs are clamped or ignored); these
//! types cover the shell around it: terminal, audio device, configuration.

use thiserror::Error;

/// Main error type for the UFO Burgers experience
#[derive(Error, Debug)]
pub enum UfoError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Audio device errors (no output device, stream setup)
    #[error("Audio error: {0}")]
    Audio(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for UFO Burgers operations
pub type Result<T> = std::result::Result<T, UfoError>;

// Convenient error constructors
impl UfoError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UfoError::config("volume out of range");
        assert_eq!(err.to_string(), "Configuration error: volume out of range");

        let err = UfoError::audio("no default output device");
        assert_eq!(err.to_string(), "Audio error: no default output device");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: UfoError = io_err.into();
        assert!(matches!(err, UfoError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = UfoError::terminal("raw mode unavailable");
        assert!(matches!(err, UfoError::Terminal(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: UfoError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
