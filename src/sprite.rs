//! Sprite images
//!
//! [stitch] combines the images a stylesheet references into one PNG and reports where each
//! one landed as a [Rectangle](rect::Rectangle), which is what the stylesheet rewrite needs.

pub mod rect;
pub mod stitch;

pub use rect::{Rectangle, RectangleMap};
pub use stitch::{combine, layout};
