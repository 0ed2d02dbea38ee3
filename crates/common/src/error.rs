//! Error types shared across Spectator crates.

use std::path::PathBuf;

/// Top-level error type for Spectator operations.
#[derive(Debug, thiserror::Error)]
pub enum SpectatorError {
    #[error("Degenerate display resolution {width}x{height}: no eligible viewport")]
    DegenerateResolution { width: f64, height: f64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SpectatorError.
pub type SpectatorResult<T> = Result<T, SpectatorError>;

impl SpectatorError {
    pub fn degenerate_resolution(width: f64, height: f64) -> Self {
        Self::DegenerateResolution { width, height }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_resolution_message_names_size() {
        let err = SpectatorError::degenerate_resolution(0.0, 1080.0);
        assert_eq!(
            err.to_string(),
            "Degenerate display resolution 0x1080: no eligible viewport"
        );
    }

    #[test]
    fn test_json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SpectatorError = parse.into();
        assert!(matches!(err, SpectatorError::Json(_)));
    }
}
