//! Combining images into a sprite
//!
//! Images are stacked top to bottom, each at x = 0, in the order they are first referenced.
//! The sprite is as wide as the widest image and as tall as all of them together.

use super::rect::{Rectangle, RectangleMap};
use crate::error::{Error, Result};
use image::{imageops, ImageFormat, RgbaImage};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Stack images of the given sizes vertically
///
/// Returns the sprite's width and height and one rectangle per input size, or `None` when
/// the total height does not fit in `u32`.
pub fn layout(sizes: &[(u32, u32)]) -> Option<(u32, u32, Vec<Rectangle>)> {
    let mut width = 0;
    let mut height = 0;
    let mut rectangles = Vec::with_capacity(sizes.len());

    for &(image_width, image_height) in sizes {
        let rectangle = Rectangle::at(0, height, image_width, image_height)?;
        width = width.max(image_width);
        height = rectangle.max_y;
        rectangles.push(rectangle);
    }

    Some((width, height, rectangles))
}

/// Load `paths` (relative to `base_dir`), write them as one PNG to `destination` and return
/// where each path was placed
///
/// A path listed more than once is placed once. Nothing is written when `paths` is empty.
pub fn combine(paths: &[String], base_dir: &Path, destination: &Path) -> Result<RectangleMap> {
    let mut unique: Vec<&str> = Vec::new();
    for path in paths {
        if !unique.contains(&path.as_str()) {
            unique.push(path);
        }
    }

    if unique.is_empty() {
        debug!("no images to combine");
        return Ok(RectangleMap::new());
    }

    let mut images = Vec::with_capacity(unique.len());
    for path in &unique {
        let full_path = base_dir.join(path);
        let image = image::open(&full_path).map_err(|source| Error::Image {
            path: full_path.clone(),
            source,
        })?;
        images.push(image.to_rgba8());
    }

    let sizes: Vec<(u32, u32)> = images.iter().map(|image| image.dimensions()).collect();
    let (width, height, rectangles) = layout(&sizes).ok_or(Error::SpriteTooLarge {
        images: unique.len(),
    })?;

    let mut sprite = RgbaImage::new(width, height);
    for (image, rectangle) in images.iter().zip(&rectangles) {
        imageops::replace(
            &mut sprite,
            image,
            i64::from(rectangle.min_x),
            i64::from(rectangle.min_y),
        );
    }

    if let Some(parent) = destination.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;
    }
    sprite
        .save_with_format(destination, ImageFormat::Png)
        .map_err(|source| Error::Image {
            path: destination.to_path_buf(),
            source,
        })?;
    debug!(
        images = unique.len(),
        width,
        height,
        destination = %destination.display(),
        "wrote sprite"
    );

    Ok(unique
        .into_iter()
        .map(String::from)
        .zip(rectangles)
        .collect())
}
