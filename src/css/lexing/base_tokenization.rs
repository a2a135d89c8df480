//! Raw tokenization for each lexer state
//!
//! Every scanning state of the state machine looks for a different set of delimiters, and
//! a character that ends a token in one state is plain text in another (`:` ends a property
//! name but is part of the selector `a:hover`). Rather than a single context-free token set,
//! each scanning state gets its own logos enum containing only the delimiters it reacts to,
//! a text run that excludes their first characters, and a one-character fallback for that
//! first character when it does not start a delimiter.
//!
//! This keeps longest-match correct at the delimiter boundaries: `*/*` in selector text
//! still finds the `/*`, and `/*/` inside a comment still finds the `*/`.

use super::state_machine::State;
use logos::Logos;

/// Where a scanning state goes when it meets one of its delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// Hand over to the delimiter state that consumes this token
    Delimiter(State),
    /// A comment opens: remember the current state and lex the comment
    Comment,
}

/// A raw token set used by one scanning state
pub trait ScanToken<'src>: Logos<'src, Source = str, Extras = ()> {
    /// `None` when the token is part of the text being scanned
    fn stop(&self) -> Option<Stop>;
}

/// Tokens seen while scanning a selector
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorToken {
    #[token("{")]
    LeftBrace,
    #[token("/*")]
    CommentStart,
    #[token("/")]
    Slash,
    #[regex(r"[^\{/]+")]
    Text,
}

impl<'src> ScanToken<'src> for SelectorToken {
    fn stop(&self) -> Option<Stop> {
        match self {
            SelectorToken::LeftBrace => Some(Stop::Delimiter(State::LeftBrace)),
            SelectorToken::CommentStart => Some(Stop::Comment),
            SelectorToken::Slash | SelectorToken::Text => None,
        }
    }
}

/// Tokens seen while scanning a property name inside a selector body
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyToken {
    #[token("}")]
    RightBrace,
    #[token(":")]
    Colon,
    #[token("/*")]
    CommentStart,
    #[token("/")]
    Slash,
    #[regex(r"[^\}:/]+")]
    Text,
}

impl<'src> ScanToken<'src> for PropertyToken {
    fn stop(&self) -> Option<Stop> {
        match self {
            PropertyToken::RightBrace => Some(Stop::Delimiter(State::RightBrace)),
            PropertyToken::Colon => Some(Stop::Delimiter(State::Separator)),
            PropertyToken::CommentStart => Some(Stop::Comment),
            PropertyToken::Slash | PropertyToken::Text => None,
        }
    }
}

/// Tokens seen while scanning a declaration value
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueToken {
    #[token(";")]
    Semicolon,
    #[token("/*")]
    CommentStart,
    #[token("/")]
    Slash,
    #[regex(r"[^;/]+")]
    Text,
}

impl<'src> ScanToken<'src> for ValueToken {
    fn stop(&self) -> Option<Stop> {
        match self {
            ValueToken::Semicolon => Some(Stop::Delimiter(State::Terminator)),
            ValueToken::CommentStart => Some(Stop::Comment),
            ValueToken::Slash | ValueToken::Text => None,
        }
    }
}

/// Tokens seen inside a comment. Only `*/` ends it; comments do not nest.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentToken {
    #[token("*/")]
    CommentEnd,
    #[token("*")]
    Star,
    #[regex(r"[^*]+")]
    Text,
}

impl<'src> ScanToken<'src> for CommentToken {
    fn stop(&self) -> Option<Stop> {
        match self {
            CommentToken::CommentEnd => Some(Stop::Delimiter(State::CommentEnd)),
            CommentToken::Star | CommentToken::Text => None,
        }
    }
}
