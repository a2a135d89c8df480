//! Pre-order traversal
//!
//! The walk is driven by the sibling and parent links alone, so the iterator only has to
//! remember the next node to hand out. It borrows the tree, which means a caller that wants
//! to mutate the tree based on the matches has to collect them first.

use super::{NodeId, Tree};
use crate::css::token::Token;

/// Pre-order iterator over a node and all of its descendants
pub struct Descendants<'a> {
    tree: &'a Tree,
    start: NodeId,
    next: Option<NodeId>,
}

impl<'a> Descendants<'a> {
    fn new(tree: &'a Tree, start: NodeId) -> Self {
        Self {
            tree,
            start,
            next: Some(start),
        }
    }

    fn successor(&self, node: NodeId) -> Option<NodeId> {
        if let Some(child) = self.tree.first_child(node) {
            return Some(child);
        }

        let mut cursor = node;
        loop {
            if cursor == self.start {
                return None;
            }
            if let Some(next) = self.tree.next_sibling(cursor) {
                return Some(next);
            }
            cursor = self.tree.parent(cursor)?;
        }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.successor(current);
        Some(current)
    }
}

impl Tree {
    /// Walk `start` and its descendants in pre-order
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        Descendants::new(self, start)
    }
}

/// Lazily yield every node of `tree` whose token satisfies `predicate`, in pre-order
pub fn filter<'a, P>(tree: &'a Tree, mut predicate: P) -> impl Iterator<Item = NodeId> + 'a
where
    P: FnMut(&Token) -> bool + 'a,
{
    tree.descendants(tree.root())
        .filter(move |&id| predicate(tree.token(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::token::TokenKind;

    /// root -> [s1 -> [p1 -> [v1]], s2]
    fn sample() -> (Tree, Vec<NodeId>) {
        let mut tree = Tree::new();
        let root = tree.root();
        let s1 = tree.create_node(Token::new(TokenKind::Selector, "s1"));
        let s2 = tree.create_node(Token::new(TokenKind::Selector, "s2"));
        let p1 = tree.create_node(Token::new(TokenKind::Property, "p1"));
        let v1 = tree.create_node(Token::new(TokenKind::Value, "v1"));
        tree.append_child(root, s1);
        tree.append_child(root, s2);
        tree.append_child(s1, p1);
        tree.append_child(p1, v1);
        (tree, vec![root, s1, p1, v1, s2])
    }

    #[test]
    fn test_preorder() {
        let (tree, expected) = sample();
        let visited: Vec<NodeId> = tree.descendants(tree.root()).collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_subtree_walk_stops_at_start() {
        let (tree, ids) = sample();
        let visited: Vec<NodeId> = tree.descendants(ids[1]).collect();
        assert_eq!(visited, vec![ids[1], ids[2], ids[3]]);
    }

    #[test]
    fn test_leaf_walk() {
        let (tree, ids) = sample();
        let visited: Vec<NodeId> = tree.descendants(ids[4]).collect();
        assert_eq!(visited, vec![ids[4]]);
    }

    #[test]
    fn test_filter_by_kind() {
        let (tree, ids) = sample();
        let selectors: Vec<NodeId> =
            filter(&tree, |token| token.kind == TokenKind::Selector).collect();
        assert_eq!(selectors, vec![ids[1], ids[4]]);
    }

    #[test]
    fn test_filter_is_restartable() {
        let (tree, _) = sample();
        let first = filter(&tree, |token| token.kind == TokenKind::Value).count();
        let second = filter(&tree, |token| token.kind == TokenKind::Value).count();
        assert_eq!(first, 1);
        assert_eq!(second, 1);
    }
}
