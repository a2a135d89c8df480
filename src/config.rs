//! Configuration loading
//!
//! `defaults/spriter.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. User files and single-key overrides (from
//! command-line flags) are layered on top via [`Loader`] before deserializing into
//! [`SpriterConfig`].
//!
//! Without an explicit file, the command line looks for [`PROJECT_FILE`] next to the
//! stylesheet and layers it when present.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/spriter.default.toml");

/// Name of the optional per-directory configuration file
pub const PROJECT_FILE: &str = "spriter.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriterConfig {
    pub sprite: SpriteConfig,
    pub output: OutputConfig,
}

/// Where the sprite goes and how the stylesheet refers to it.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteConfig {
    /// Sprite image path, relative to the stylesheet's directory
    pub image: String,
    /// Replacement for the payload of every rewritten `url(...)`
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl OutputConfig {
    /// The output file, `None` for stdout
    pub fn file(&self) -> Option<&Path> {
        if self.path.is_empty() {
            None
        } else {
            Some(Path::new(&self.path))
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SpriterConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
