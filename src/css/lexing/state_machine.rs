//! Finite-state lexer
//!
//!     The state is "what kind of token to look for next". Scanning states (selector,
//!     property, value, comment) run a per-state raw lexer over the remaining input until one
//!     of their delimiters shows up, then emit the text seen so far and hand over to the
//!     delimiter state, which consumes exactly that delimiter and emits it.
//!
//!     Comments may open in any scanning state except a comment. The state that was
//!     interrupted is pushed onto a pending stack and popped again once the comment closes,
//!     so no state needs a comment-aware twin.
//!
//!     The lexer is pull based: each call to `next` runs state steps until one of them emits a
//!     token, which gives the parser the same one-token handoff as a blocking channel would.
//!     Running out of input inside a scanning state ends the stream; the partial token is
//!     dropped.

use super::base_tokenization::{
    CommentToken, PropertyToken, ScanToken, SelectorToken, Stop, ValueToken,
};
use crate::css::token::{
    Token, TokenKind, COMMENT_END, COMMENT_START, LEFT_BRACE, RIGHT_BRACE, SEPARATOR, TERMINATOR,
};
use tracing::trace;

/// Lexer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Selector,
    LeftBrace,
    Property,
    Separator,
    Value,
    Terminator,
    RightBrace,
    CommentStart,
    Comment,
    CommentEnd,
}

/// Streaming lexer over a stylesheet
pub struct Lexer<'src> {
    source: &'src str,
    /// Start of the text the next emitted token will cover
    start: usize,
    /// Scan position
    current: usize,
    /// `None` once the stream has ended
    state: Option<State>,
    pending: Vec<State>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            state: Some(State::Selector),
            pending: Vec::new(),
        }
    }

    /// Depth of the pending-state stack, non-zero only while inside a comment
    pub fn pending_depth(&self) -> usize {
        self.pending.len()
    }

    fn step(&mut self, state: State) -> (Option<State>, Option<Token>) {
        match state {
            State::Selector => self.scan::<SelectorToken>(TokenKind::Selector, State::Selector),
            State::Property => self.scan::<PropertyToken>(TokenKind::Property, State::Property),
            State::Value => self.scan::<ValueToken>(TokenKind::Value, State::Value),
            State::Comment => self.scan::<CommentToken>(TokenKind::Comment, State::Comment),
            State::LeftBrace => self.delimiter(LEFT_BRACE, TokenKind::LeftBrace, State::Property),
            State::Separator => self.delimiter(SEPARATOR, TokenKind::Separator, State::Value),
            State::Terminator => {
                self.delimiter(TERMINATOR, TokenKind::Terminator, State::Property)
            }
            State::RightBrace => {
                self.delimiter(RIGHT_BRACE, TokenKind::RightBrace, State::Selector)
            }
            State::CommentStart => {
                self.delimiter(COMMENT_START, TokenKind::CommentStart, State::Comment)
            }
            State::CommentEnd => {
                let (_, token) = self.delimiter(COMMENT_END, TokenKind::CommentEnd, State::Comment);
                (self.pending.pop(), token)
            }
        }
    }

    /// Scan forward until one of `T`'s delimiters, emitting everything before it as `kind`
    fn scan<T>(&mut self, kind: TokenKind, resume: State) -> (Option<State>, Option<Token>)
    where
        T: ScanToken<'src>,
    {
        let source = self.source;
        let mut raw = T::lexer(&source[self.current..]);

        while let Some(result) = raw.next() {
            // Every character is covered by some raw token, so errors cannot carry a delimiter
            let Ok(token) = result else { continue };
            let Some(stop) = token.stop() else { continue };

            self.current += raw.span().start;
            let emitted = self.emit(kind);
            let next = match stop {
                Stop::Delimiter(next) => next,
                Stop::Comment => {
                    self.pending.push(resume);
                    State::CommentStart
                }
            };
            return (Some(next), emitted);
        }

        trace!(state = ?resume, "input ended while scanning");
        self.current = self.source.len();
        (None, None)
    }

    /// Consume a delimiter the previous scan stopped in front of
    fn delimiter(
        &mut self,
        literal: &str,
        kind: TokenKind,
        next: State,
    ) -> (Option<State>, Option<Token>) {
        debug_assert!(self.source[self.current..].starts_with(literal));
        self.current += literal.len();
        (Some(next), self.emit(kind))
    }

    fn emit(&mut self, kind: TokenKind) -> Option<Token> {
        let text = self.source[self.start..self.current].trim();
        self.start = self.current;

        if text.is_empty() {
            return None;
        }

        let token = Token::new(kind, text);
        trace!(%token, "emit");
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let state = self.state?;
            let (next, token) = self.step(state);
            self.state = next;
            if token.is_some() {
                return token;
            }
        }
    }
}
