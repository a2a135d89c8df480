//! Stylesheet serializer
//!
//! Walks the tree in pre-order and writes each token's text followed by the whitespace its
//! kind calls for:
//!
//! | kind                              | trailing whitespace            |
//! |-----------------------------------|--------------------------------|
//! | Selector, Separator               | one space                      |
//! | Terminator, LeftBrace, RightBrace | newline, then one tab per open brace |
//!
//! The newline after the last declaration of a block is indented for another declaration,
//! so one tab is taken back before each closing brace. Comments never reach the tree and
//! original formatting is not kept: `a{color:red;}` comes out as
//!
//!     a {
//!         color: red;
//!     }

use crate::css::token::TokenKind;
use crate::css::tree::Tree;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static SPACED: Lazy<HashSet<TokenKind>> =
    Lazy::new(|| [TokenKind::Selector, TokenKind::Separator].into_iter().collect());

static NEWLINE: Lazy<HashSet<TokenKind>> = Lazy::new(|| {
    [
        TokenKind::Terminator,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
    ]
    .into_iter()
    .collect()
});

/// Serialize a tree to canonical stylesheet text
pub fn serialize(tree: &Tree) -> String {
    let mut output = String::new();
    let mut indent: usize = 0;

    for id in tree.descendants(tree.root()) {
        let token = tree.token(id);

        match token.kind {
            TokenKind::LeftBrace => indent += 1,
            TokenKind::RightBrace => {
                if output.ends_with('\t') {
                    output.pop();
                }
                indent = indent.saturating_sub(1);
            }
            _ => {}
        }

        output.push_str(&token.text);

        if SPACED.contains(&token.kind) {
            output.push(' ');
        }
        if NEWLINE.contains(&token.kind) {
            output.push('\n');
            output.extend(std::iter::repeat('\t').take(indent));
        }
    }

    output
}
