//! Mutable stylesheet tree
//!
//!     Nodes live in an arena owned by the [Tree] and are addressed by [NodeId]. Each node holds
//!     one token plus links to its parent, its first and last child, and its previous and next
//!     sibling, so every level is a doubly linked list. Neighbor insertion and removal touch a
//!     constant number of links, and the parent's last-child link makes appending constant time
//!     as well.
//!
//!     Shape of a parsed tree:
//!
//!         Root
//!         ├── Selector
//!         │   ├── LeftBrace
//!         │   ├── Property
//!         │   │   ├── Separator
//!         │   │   ├── Value
//!         │   │   └── Terminator
//!         │   └── RightBrace
//!         └── Selector ...
//!
//!     Nodes removed from the tree stay in the arena but are no longer reachable from the root.
//!     Sibling chains without a parent are allowed; they are how a subtree is assembled before
//!     [Tree::set_children] attaches it.

pub mod traversal;

use crate::css::token::{Token, TokenKind};

pub use traversal::{filter, Descendants};

/// Handle to a node in a [Tree]. Only meaningful for the tree that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    token: Token,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    previous_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    fn new(token: Token) -> Self {
        Self {
            token,
            parent: None,
            first_child: None,
            last_child: None,
            previous_sibling: None,
            next_sibling: None,
        }
    }
}

/// An ordered n-ary tree of tokens rooted at a `Root` node
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// A tree holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Token::root())],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached node. It becomes part of the tree once linked in.
    pub fn create_node(&mut self, token: Token) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(token));
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn token(&self, id: NodeId) -> &Token {
        &self.node(id).token
    }

    pub fn kind(&self, id: NodeId) -> TokenKind {
        self.node(id).token.kind
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).token.text
    }

    /// Replace a node's token text in place
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.node_mut(id).token.text = text.into();
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).previous_sibling
    }

    /// Iterate over the children of `id`, in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.first_child(id),
        }
    }

    /// The first child of `id` with the given kind
    pub fn child_of_kind(&self, id: NodeId, kind: TokenKind) -> Option<NodeId> {
        self.children(id).find(|&child| self.kind(child) == kind)
    }

    /// Splice `new` into the sibling chain right after `node`. `new` takes `node`'s parent.
    pub fn insert_after(&mut self, node: NodeId, new: NodeId) {
        debug_assert_ne!(node, new);
        let parent = self.node(node).parent;
        let next = self.node(node).next_sibling;

        let inserted = self.node_mut(new);
        inserted.parent = parent;
        inserted.previous_sibling = Some(node);
        inserted.next_sibling = next;

        match next {
            Some(next) => self.node_mut(next).previous_sibling = Some(new),
            None => {
                if let Some(parent) = parent {
                    self.node_mut(parent).last_child = Some(new);
                }
            }
        }
        self.node_mut(node).next_sibling = Some(new);
    }

    /// Splice `new` into the sibling chain right before `node`, becoming the parent's first
    /// child if `node` was
    pub fn insert_before(&mut self, node: NodeId, new: NodeId) {
        debug_assert_ne!(node, new);
        let parent = self.node(node).parent;
        let previous = self.node(node).previous_sibling;

        let inserted = self.node_mut(new);
        inserted.parent = parent;
        inserted.previous_sibling = previous;
        inserted.next_sibling = Some(node);

        match previous {
            Some(previous) => self.node_mut(previous).next_sibling = Some(new),
            None => {
                if let Some(parent) = parent {
                    self.node_mut(parent).first_child = Some(new);
                }
            }
        }
        self.node_mut(node).previous_sibling = Some(new);
    }

    /// Add `new` after the last sibling in `node`'s chain
    pub fn append(&mut self, node: NodeId, new: NodeId) {
        let last = match self.parent(node).and_then(|parent| self.last_child(parent)) {
            Some(last) => last,
            // Parentless chains keep no tail, walk it
            None => {
                let mut last = node;
                while let Some(next) = self.next_sibling(last) {
                    last = next;
                }
                last
            }
        };
        self.insert_after(last, new);
    }

    /// Unlink `node` from its sibling chain and parent. Its own children stay attached to it.
    pub fn remove(&mut self, node: NodeId) {
        let Node {
            parent,
            previous_sibling: previous,
            next_sibling: next,
            ..
        } = *self.node(node);

        match previous {
            Some(previous) => self.node_mut(previous).next_sibling = next,
            None => {
                if let Some(parent) = parent {
                    self.node_mut(parent).first_child = next;
                }
            }
        }
        match next {
            Some(next) => self.node_mut(next).previous_sibling = previous,
            None => {
                if let Some(parent) = parent {
                    self.node_mut(parent).last_child = previous;
                }
            }
        }

        let removed = self.node_mut(node);
        removed.parent = None;
        removed.previous_sibling = None;
        removed.next_sibling = None;
    }

    /// Make the chain starting at `first_child` the children of `node`
    ///
    /// Any previous children of `node` are dropped from the tree.
    pub fn set_children(&mut self, node: NodeId, first_child: NodeId) {
        debug_assert!(self.previous_sibling(first_child).is_none());
        let mut last = first_child;
        let mut cursor = Some(first_child);
        while let Some(child) = cursor {
            self.node_mut(child).parent = Some(node);
            last = child;
            cursor = self.next_sibling(child);
        }

        let parent = self.node_mut(node);
        parent.first_child = Some(first_child);
        parent.last_child = Some(last);
    }

    /// Attach `child` as the new last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        match self.last_child(parent) {
            Some(last) => self.insert_after(last, child),
            None => self.set_children(parent, child),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one level of siblings
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}
