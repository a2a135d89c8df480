//! Background image rewriting
//!
//!     Finds `background` and `background-image` declarations, pulls the image path out of
//!     their `url(...)`, and after the images were combined into a sprite, points those
//!     declarations at the sprite and adds the image's offset inside it:
//!
//!         .foo { background: url(images/a.png) no-repeat; }
//!
//!     becomes, for an image placed at (10, 20),
//!
//!         .foo {
//!             background: url(sprite.png) no-repeat;
//!             background-position: 10px 20px;
//!         }
//!
//!     Paths starting with `http` are remote and left untouched. Declarations without any
//!     `url(` (`background: none`) are skipped.
//!
//!     Matches are always collected before the tree is touched, and every match is checked
//!     before the first edit, so a failed rewrite leaves the tree as it was.

use crate::css::error::RewriteError;
use crate::css::token::{Token, TokenKind, SEPARATOR, TERMINATOR};
use crate::css::tree::{filter, NodeId, Tree};
use crate::sprite::rect::{Rectangle, RectangleMap};
use std::ops::Range;
use tracing::debug;

/// Property names whose values may reference a background image
pub const BACKGROUND_PROPERTIES: [&str; 2] = ["background", "background-image"];

/// Name of the declaration inserted after each rewritten one
pub const POSITION_PROPERTY: &str = "background-position";

const URL_OPEN: &str = "url(";
const URL_CLOSE: char = ')';

/// An image reference inside a background declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlReference {
    /// The `Property` node
    pub declaration: NodeId,
    /// Its `Value` node
    pub value: NodeId,
    /// Byte range of the text between `url(` and `)` inside the value
    pub payload: Range<usize>,
    /// The payload without surrounding whitespace and quotes
    pub path: String,
}

impl UrlReference {
    pub fn is_remote(&self) -> bool {
        self.path.starts_with("http")
    }
}

fn is_background_declaration(token: &Token) -> bool {
    token.kind == TokenKind::Property && BACKGROUND_PROPERTIES.contains(&token.text.as_str())
}

/// Lazily find background declarations, in source order
pub fn find_background_declarations(tree: &Tree) -> impl Iterator<Item = NodeId> + '_ {
    filter(tree, is_background_declaration)
}

/// Collect the url references of all background declarations
pub fn url_references(tree: &Tree) -> Result<Vec<UrlReference>, RewriteError> {
    let declarations: Vec<NodeId> = find_background_declarations(tree).collect();
    let mut references = Vec::with_capacity(declarations.len());

    for declaration in declarations {
        if let Some(reference) = url_reference(tree, declaration)? {
            references.push(reference);
        }
    }

    Ok(references)
}

fn url_reference(tree: &Tree, declaration: NodeId) -> Result<Option<UrlReference>, RewriteError> {
    let value = tree
        .child_of_kind(declaration, TokenKind::Value)
        .ok_or_else(|| RewriteError::MissingValue {
            property: tree.text(declaration).to_string(),
        })?;
    let text = tree.text(value);

    let Some(open) = text.find(URL_OPEN) else {
        return Ok(None);
    };
    let start = open + URL_OPEN.len();
    let end = text[start..]
        .find(URL_CLOSE)
        .map(|offset| start + offset)
        .ok_or_else(|| RewriteError::UnterminatedUrl {
            property: tree.text(declaration).to_string(),
            value: text.to_string(),
        })?;

    Ok(Some(UrlReference {
        declaration,
        value,
        payload: start..end,
        path: unquote(&text[start..end]).to_string(),
    }))
}

fn unquote(payload: &str) -> &str {
    let trimmed = payload.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

/// Local image paths referenced by background declarations, in source order
///
/// Paths referenced more than once are listed once per reference.
pub fn extract_urls(tree: &Tree) -> Result<Vec<String>, RewriteError> {
    let mut paths = Vec::new();

    for reference in url_references(tree)? {
        if reference.is_remote() {
            debug!(url = %reference.path, "skipping remote image");
            continue;
        }
        paths.push(reference.path);
    }

    Ok(paths)
}

/// Point every local background image at `sprite_url` and add its offset in the sprite
///
/// Returns the number of rewritten declarations.
pub fn rewrite_urls(
    tree: &mut Tree,
    sprite_url: &str,
    rectangles: &RectangleMap,
) -> Result<usize, RewriteError> {
    let mut planned: Vec<(UrlReference, Rectangle)> = Vec::new();

    for reference in url_references(tree)? {
        if reference.is_remote() {
            continue;
        }
        let rectangle = rectangles.get(&reference.path).copied().ok_or_else(|| {
            RewriteError::MissingRectangle {
                path: reference.path.clone(),
            }
        })?;
        planned.push((reference, rectangle));
    }

    for (reference, rectangle) in &planned {
        let text = tree.text(reference.value);
        let rewritten = format!(
            "{}{}{}",
            &text[..reference.payload.start],
            sprite_url,
            &text[reference.payload.end..]
        );
        tree.set_text(reference.value, rewritten);

        let position = create_property(
            tree,
            POSITION_PROPERTY,
            &format!("{}px {}px", rectangle.min_x, rectangle.min_y),
        );
        tree.insert_after(reference.declaration, position);
        debug!(path = %reference.path, x = rectangle.min_x, y = rectangle.min_y, "rewrote");
    }

    Ok(planned.len())
}

/// Build a detached `name: value;` declaration subtree
pub fn create_property(tree: &mut Tree, name: &str, value: &str) -> NodeId {
    let property = tree.create_node(Token::new(TokenKind::Property, name));
    let separator = tree.create_node(Token::new(TokenKind::Separator, SEPARATOR));
    let value = tree.create_node(Token::new(TokenKind::Value, value));
    let terminator = tree.create_node(Token::new(TokenKind::Terminator, TERMINATOR));

    tree.insert_after(separator, value);
    tree.append(separator, terminator);
    tree.set_children(property, separator);

    property
}
