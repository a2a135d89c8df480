//! Lexing for stylesheets
//!
//!     Turning text into tokens happens in two layers:
//!
//!     Raw tokens:
//!         Per-state logos enums that only know about delimiters and text runs. See
//!         [base_tokenization].
//!
//!     Tokens:
//!         The finite-state [Lexer](state_machine::Lexer) drives the raw layers and emits
//!         [Token]s with trimmed text. Comments are lexed as CommentStart/Comment/CommentEnd
//!         so that tooling can see them; the parser drops them.
//!
//!     The lexer never rejects input. Malformed input yields a shorter token stream, which
//!     the parser then reports.

pub mod base_tokenization;
pub mod state_machine;

pub use crate::css::token::{Token, TokenKind};
pub use state_machine::Lexer;

/// Lazily lex `source`
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Lex `source` and collect the whole token stream
pub fn tokenize(source: &str) -> Vec<Token> {
    lex(source).collect()
}
