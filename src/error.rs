//! Error types for snippet-highlight

use thiserror::Error;

/// Result type alias for highlighter operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern for rule `{rule}`: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("theme parse error: {0}")]
    ThemeParse(#[from] toml::de::Error),

    #[error("invalid theme entry `{key}`: {reason}")]
    InvalidTheme { key: String, reason: String },
}
