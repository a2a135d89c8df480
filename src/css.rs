//! Stylesheet lexing, parsing, rewriting and serialization
//!
//!     text -> [lexing] -> tokens -> [parsing] -> [tree] -> [rewrite] -> [formats] -> text
//!
//! The grammar is deliberately small: rules made of a selector and a body of `name: value;`
//! declarations. There are no at-rules or nested blocks, and comments are skipped.

pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod rewrite;
pub mod token;
pub mod tree;

pub use error::{ParseError, RewriteError};
pub use formats::serialize;
pub use parsing::parse;
pub use rewrite::{extract_urls, rewrite_urls};
pub use token::{Token, TokenKind};
pub use tree::{NodeId, Tree};
