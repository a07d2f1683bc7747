//! Error types for the widget hosts.
//!
//! Store operations never fail; these cover loading configuration and
//! locating host elements.

use thiserror::Error;

/// Errors raised while setting up the widget.
#[derive(Error, Debug)]
pub enum Error {
    /// Widget config JSON could not be parsed
    #[error("invalid widget config: {0}")]
    Config(#[from] serde_json::Error),

    /// A required host element is missing
    #[error("element `{0}` not found")]
    MissingElement(String),
}

/// Result type alias for widget setup
pub type Result<T> = std::result::Result<T, Error>;
