//! Indented outline of a tree, one node per line

use crate::css::tree::{NodeId, Tree};

/// Render `tree` with two spaces of indentation per level
pub fn to_treeviz_str(tree: &Tree) -> String {
    let mut output = String::new();

    for id in tree.descendants(tree.root()) {
        for _ in 0..depth(tree, id) {
            output.push_str("  ");
        }
        output.push_str(&tree.token(id).to_string());
        output.push('\n');
    }

    output
}

fn depth(tree: &Tree, id: NodeId) -> usize {
    std::iter::successors(tree.parent(id), |&parent| tree.parent(parent)).count()
}
