//! Error types for parsing and rewriting stylesheets

use crate::css::token::TokenKind;

/// The token stream disagreed with the grammar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} `{text}`")]
    Unexpected {
        expected: TokenKind,
        found: TokenKind,
        text: String,
    },

    #[error("expected {expected}, found end of stream")]
    UnexpectedEnd { expected: TokenKind },
}

impl ParseError {
    /// The token kind the grammar required at the failure point
    pub fn expected(&self) -> TokenKind {
        match self {
            ParseError::Unexpected { expected, .. } | ParseError::UnexpectedEnd { expected } => {
                *expected
            }
        }
    }

    /// The kind actually seen, `None` when the stream had already ended
    pub fn found(&self) -> Option<TokenKind> {
        match self {
            ParseError::Unexpected { found, .. } => Some(*found),
            ParseError::UnexpectedEnd { .. } => None,
        }
    }
}

/// A matched background declaration could not be rewritten
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    #[error("declaration `{property}` has no value")]
    MissingValue { property: String },

    #[error("unterminated url( in `{property}: {value}`")]
    UnterminatedUrl { property: String, value: String },

    #[error("no sprite rectangle for `{path}`")]
    MissingRectangle { path: String },
}
