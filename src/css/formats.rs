//! Output formats for parsed stylesheets
//!
//! - [serializer]: canonical stylesheet text, the format written back to disk
//! - [treeviz]: an indented outline of the tree, for inspecting parses

pub mod serializer;
pub mod treeviz;

pub use serializer::serialize;
pub use treeviz::to_treeviz_str;
