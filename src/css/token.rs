//! Token types shared by the lexer, the parser and the tree.
//!
//!     A token is a kind plus the whitespace-trimmed source text it covers. The lexer never
//!     produces a token whose trimmed text is empty, so every token that reaches the parser
//!     carries something to print.
//!
//!     The same type is stored in every tree node. Nodes synthesized by the rewrite pass use
//!     the delimiter constants below for their punctuation tokens.

use serde::Serialize;
use std::fmt;

pub const LEFT_BRACE: &str = "{";
pub const RIGHT_BRACE: &str = "}";
pub const COMMENT_START: &str = "/*";
pub const COMMENT_END: &str = "*/";
pub const SEPARATOR: &str = ":";
pub const TERMINATOR: &str = ";";

/// The kind of a token, and therefore of the tree node holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Error,
    Root,
    Selector,
    LeftBrace,
    RightBrace,
    CommentStart,
    Comment,
    CommentEnd,
    Property,
    Separator,
    Value,
    Terminator,
}

impl TokenKind {
    /// Check if this kind is part of a comment. The parser drops these.
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::CommentStart | TokenKind::Comment | TokenKind::CommentEnd
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Error => "Error",
            TokenKind::Root => "Root",
            TokenKind::Selector => "Selector",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::CommentStart => "CommentStart",
            TokenKind::Comment => "Comment",
            TokenKind::CommentEnd => "CommentEnd",
            TokenKind::Property => "Property",
            TokenKind::Separator => "Separator",
            TokenKind::Value => "Value",
            TokenKind::Terminator => "Terminator",
        };
        f.write_str(name)
    }
}

/// A lexical unit: a kind and its trimmed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The synthetic token held by every tree's root node
    pub fn root() -> Self {
        Self::new(TokenKind::Root, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
