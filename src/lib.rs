//! # spriter
//!
//! Combines the background images a stylesheet references into a single sprite and rewrites
//! the stylesheet to use it.
//!
//! The core is the [css] module: a state-machine lexer, a recursive-descent parser, a
//! sibling-linked tree that supports in-place edits, and a serializer. [sprite] stacks the
//! images, [processor] ties both together for files on disk.

pub mod config;
pub mod css;
pub mod error;
pub mod processor;
pub mod sprite;

pub use error::{Error, Result};
