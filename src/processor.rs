//! File-level sprite pipeline
//!
//! Reading, stitching and writing are thin wrappers around the core:
//!
//! 1. read the stylesheet and [parse](crate::css::parse) it
//! 2. [extract](crate::css::extract_urls) the local background images
//! 3. [combine](crate::sprite::combine) them into the configured sprite image
//! 4. [rewrite](crate::css::rewrite_urls) the declarations to use the sprite
//! 5. [serialize](crate::css::serialize) the result
//!
//! Image paths are resolved against the stylesheet's directory, as are the sprite's.

use crate::config::SpriterConfig;
use crate::css::{extract_urls, parse, rewrite_urls, serialize};
use crate::error::{Error, Result};
use crate::sprite::{combine, RectangleMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of processing one stylesheet
#[derive(Debug, Clone)]
pub struct Processed {
    /// The rewritten stylesheet text
    pub stylesheet: String,
    /// Where each referenced image was placed in the sprite
    pub rectangles: RectangleMap,
    /// Number of declarations pointed at the sprite
    pub rewritten: usize,
    /// The sprite file, `None` when the stylesheet references no local images
    pub sprite: Option<PathBuf>,
}

/// Runs the pipeline with a fixed configuration
pub struct SpriteProcessor {
    config: SpriterConfig,
}

impl SpriteProcessor {
    pub fn new(config: SpriterConfig) -> Self {
        Self { config }
    }

    /// Process the stylesheet at `path`
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<Processed> {
        let path = path.as_ref();
        let source = read_stylesheet(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        self.process_source(&source, base_dir)
    }

    /// Process stylesheet text whose image paths are relative to `base_dir`
    pub fn process_source(&self, source: &str, base_dir: &Path) -> Result<Processed> {
        let mut tree = parse(source)?;
        let paths = extract_urls(&tree)?;
        debug!(count = paths.len(), "local images referenced");

        if paths.is_empty() {
            return Ok(Processed {
                stylesheet: serialize(&tree),
                rectangles: RectangleMap::new(),
                rewritten: 0,
                sprite: None,
            });
        }

        let sprite_path = base_dir.join(&self.config.sprite.image);
        let rectangles = combine(&paths, base_dir, &sprite_path)?;
        let rewritten = rewrite_urls(&mut tree, &self.config.sprite.url, &rectangles)?;
        info!(
            rewritten,
            sprite = %sprite_path.display(),
            "stylesheet rewritten"
        );

        Ok(Processed {
            stylesheet: serialize(&tree),
            rectangles,
            rewritten,
            sprite: Some(sprite_path),
        })
    }
}

/// Read a stylesheet into a string
pub fn read_stylesheet(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::io(path, source))
}

/// Write stylesheet text, replacing any existing file
pub fn write_stylesheet(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| Error::io(path, source))
}
