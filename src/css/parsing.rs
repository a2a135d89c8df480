//! Recursive-descent parser
//!
//!     Grammar:
//!
//!         Document  := Selector*
//!         Selector  := SELECTOR LEFTBRACE Property* RIGHTBRACE
//!         Property  := PROPERTY SEPARATOR VALUE TERMINATOR
//!
//!     Comment tokens are consumed and dropped wherever they appear, so comments never
//!     become nodes. A comment in the middle of a value splits it into fragments; those are
//!     joined back with a single space into one node, so `margin: 0 /* top */ 1px;` parses to
//!     the value `0 1px`. Selectors and property names are not joined: `.a/* c */.b {}` is
//!     two selector tokens in a row and fails with "expected LeftBrace".
//!
//!     Parsing is all or nothing: the first token that does not fit the grammar aborts with
//!     a [ParseError] naming the expected kind and what was found instead.

use crate::css::error::ParseError;
use crate::css::lexing::lex;
use crate::css::token::{Token, TokenKind};
use crate::css::tree::{NodeId, Tree};
use tracing::{debug, trace};

/// The only kind whose comment-separated fragments are joined into one node
const FRAGMENTED: TokenKind = TokenKind::Value;

/// Parse stylesheet text into a tree
pub fn parse(source: &str) -> Result<Tree, ParseError> {
    parse_tokens(lex(source))
}

/// Parse an already lexed token stream into a tree
pub fn parse_tokens<I>(tokens: I) -> Result<Tree, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    Parser::new(tokens.into_iter()).parse_document()
}

struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    lookahead: Option<Token>,
    tree: Tree,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    fn new(tokens: I) -> Self {
        Self {
            tokens,
            lookahead: None,
            tree: Tree::new(),
        }
    }

    /// Peek the next token that is not ignored
    fn fill(&mut self) -> Option<&Token> {
        while self.lookahead.is_none() {
            let token = self.tokens.next()?;
            if token.kind.is_comment() {
                trace!(%token, "skipping");
                continue;
            }
            self.lookahead = Some(token);
        }
        self.lookahead.as_ref()
    }

    fn next_token(&mut self) -> Option<Token> {
        self.fill()?;
        let mut token = self.lookahead.take()?;

        if token.kind == FRAGMENTED {
            while self.fill().is_some_and(|next| next.kind == FRAGMENTED) {
                if let Some(fragment) = self.lookahead.take() {
                    token.text.push(' ');
                    token.text.push_str(&fragment.text);
                }
            }
        }

        Some(token)
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        match self.next_token() {
            Some(token) if token.kind == expected => Ok(token),
            Some(token) => Err(unexpected(expected, token)),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn push(&mut self, parent: NodeId, token: Token) -> NodeId {
        let node = self.tree.create_node(token);
        self.tree.append_child(parent, node);
        node
    }

    fn parse_document(mut self) -> Result<Tree, ParseError> {
        let root = self.tree.root();
        let mut rules = 0;

        while let Some(token) = self.next_token() {
            if token.kind != TokenKind::Selector {
                return Err(unexpected(TokenKind::Selector, token));
            }
            trace!(selector = %token.text, "rule");
            let selector = self.push(root, token);
            self.parse_selector(selector)?;
            rules += 1;
        }

        debug!(rules, "parsed stylesheet");
        Ok(self.tree)
    }

    fn parse_selector(&mut self, selector: NodeId) -> Result<(), ParseError> {
        let left_brace = self.expect(TokenKind::LeftBrace)?;
        self.push(selector, left_brace);

        loop {
            let Some(token) = self.next_token() else {
                return Err(ParseError::UnexpectedEnd {
                    expected: TokenKind::RightBrace,
                });
            };

            match token.kind {
                TokenKind::RightBrace => {
                    self.push(selector, token);
                    return Ok(());
                }
                TokenKind::Property => {
                    let property = self.push(selector, token);
                    self.parse_property(property)?;
                }
                _ => return Err(unexpected(TokenKind::Property, token)),
            }
        }
    }

    fn parse_property(&mut self, property: NodeId) -> Result<(), ParseError> {
        for kind in [
            TokenKind::Separator,
            TokenKind::Value,
            TokenKind::Terminator,
        ] {
            let token = self.expect(kind)?;
            self.push(property, token);
        }
        Ok(())
    }
}

fn unexpected(expected: TokenKind, token: Token) -> ParseError {
    ParseError::Unexpected {
        expected,
        found: token.kind,
        text: token.text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tree: &Tree, parent: NodeId) -> Vec<TokenKind> {
        tree.children(parent).map(|id| tree.kind(id)).collect()
    }

    #[test]
    fn test_empty_document() {
        let tree = parse("").unwrap();
        assert_eq!(tree.first_child(tree.root()), None);
    }

    #[test]
    fn test_selector_structure() {
        let tree = parse("a { color: red; margin: 0; }").unwrap();
        let selector = tree.first_child(tree.root()).unwrap();
        assert_eq!(tree.text(selector), "a");
        assert_eq!(
            kinds(&tree, selector),
            vec![
                TokenKind::LeftBrace,
                TokenKind::Property,
                TokenKind::Property,
                TokenKind::RightBrace
            ]
        );

        let property = tree.child_of_kind(selector, TokenKind::Property).unwrap();
        assert_eq!(
            kinds(&tree, property),
            vec![
                TokenKind::Separator,
                TokenKind::Value,
                TokenKind::Terminator
            ]
        );
    }

    #[test]
    fn test_empty_body() {
        let tree = parse("a {}").unwrap();
        let selector = tree.first_child(tree.root()).unwrap();
        assert_eq!(
            kinds(&tree, selector),
            vec![TokenKind::LeftBrace, TokenKind::RightBrace]
        );
    }

    #[test]
    fn test_value_fragments_are_joined() {
        let tree = parse("a { margin: 0 /* top */ 1px; }").unwrap();
        let values: Vec<&str> = tree
            .descendants(tree.root())
            .filter(|&id| tree.kind(id) == TokenKind::Value)
            .map(|id| tree.text(id))
            .collect();
        assert_eq!(values, vec!["0 1px"]);
    }

    #[test]
    fn test_selector_fragments_are_not_joined() {
        let error = parse(".a/* c */.b { x: y; }").unwrap_err();
        assert_eq!(
            error,
            ParseError::Unexpected {
                expected: TokenKind::LeftBrace,
                found: TokenKind::Selector,
                text: ".b".to_string()
            }
        );
    }

    #[test]
    fn test_property_fragments_are_not_joined() {
        let error = parse("a { font /* x */ size: 1px; }").unwrap_err();
        assert_eq!(error.expected(), TokenKind::Separator);
        assert_eq!(error.found(), Some(TokenKind::Property));
    }

    #[test]
    fn test_missing_separator_from_tokens() {
        let tokens = vec![
            Token::new(TokenKind::Selector, "a"),
            Token::new(TokenKind::LeftBrace, "{"),
            Token::new(TokenKind::Property, "color"),
            Token::new(TokenKind::Value, "red"),
        ];
        let error = parse_tokens(tokens).unwrap_err();
        assert_eq!(
            error,
            ParseError::Unexpected {
                expected: TokenKind::Separator,
                found: TokenKind::Value,
                text: "red".to_string()
            }
        );
    }

    #[test]
    fn test_stream_ends_inside_property() {
        let tokens = vec![
            Token::new(TokenKind::Selector, "a"),
            Token::new(TokenKind::LeftBrace, "{"),
            Token::new(TokenKind::Property, "color"),
        ];
        let error = parse_tokens(tokens).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnexpectedEnd {
                expected: TokenKind::Separator
            }
        );
    }

    #[test]
    fn test_stream_ends_inside_body() {
        let error = parse("a { color: red;").unwrap_err();
        assert_eq!(
            error,
            ParseError::UnexpectedEnd {
                expected: TokenKind::RightBrace
            }
        );
    }

    #[test]
    fn test_document_must_start_with_selector() {
        let tokens = vec![Token::new(TokenKind::LeftBrace, "{")];
        let error = parse_tokens(tokens).unwrap_err();
        assert_eq!(error.expected(), TokenKind::Selector);
        assert_eq!(error.found(), Some(TokenKind::LeftBrace));
    }

    #[test]
    fn test_comments_only_between_tokens() {
        let tokens = vec![
            Token::new(TokenKind::CommentStart, "/*"),
            Token::new(TokenKind::Comment, "x"),
            Token::new(TokenKind::CommentEnd, "*/"),
        ];
        let tree = parse_tokens(tokens).unwrap();
        assert_eq!(tree.first_child(tree.root()), None);
    }
}
