//! Crate-level error type

use crate::css::{ParseError, RewriteError};
use std::path::PathBuf;

/// Result type alias for file-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from running the sprite pipeline over files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stylesheet does not fit the grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A background declaration could not be rewritten.
    #[error("rewrite error: {0}")]
    Rewrite(#[from] RewriteError),

    /// An image could not be decoded or the sprite could not be encoded.
    #[error("image error on '{path}': {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The stacked images are too tall for one sprite.
    #[error("stacking {images} images exceeds the maximum sprite height")]
    SpriteTooLarge { images: usize },

    /// Configuration files or overrides are invalid.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
