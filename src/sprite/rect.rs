//! Placement rectangles

use serde::Serialize;
use std::collections::HashMap;

/// Image path (as written in the stylesheet) to its placement in the sprite
pub type RectangleMap = HashMap<String, Rectangle>;

/// An axis-aligned rectangle; `min` is inclusive, `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rectangle {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Rectangle {
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// A rectangle of the given size with its top-left corner at (x, y), `None` when its
    /// far corner does not fit in `u32`
    pub fn at(x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        Some(Self::new(x, y, x.checked_add(width)?, y.checked_add(height)?))
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
}
