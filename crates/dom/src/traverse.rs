//! Subtree lookup and text collection.

use crate::types::{Id, Node, NodeId};

/// Finds the node with the given id anywhere in the subtree.
pub fn find(root: &Node, id: Id) -> Option<&Node> {
    if root.id() == id {
        return Some(root);
    }
    root.children().iter().find_map(|c| find(c, id))
}

/// Finds the node with the given id anywhere in the subtree, mutably.
pub fn find_mut(root: &mut Node, id: Id) -> Option<&mut Node> {
    if root.id() == id {
        return Some(root);
    }
    root.children_mut()?
        .iter_mut()
        .find_map(|c| find_mut(c, id))
}

/// Collects the concatenated text content of the subtree.
pub fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, .. } => out.push_str(text),
        Node::Document { children, .. } | Node::Element { children, .. } => {
            for c in children {
                collect_text(c, out);
            }
        }
    }
}

/// Convenience wrapper around [`collect_text`].
pub fn text_content(node: &Node) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

/// Replaces an element's content with a single text node.
///
/// The text node reuses the element's own id offset into the high half of
/// the id space so it cannot collide with tree-assigned ids. No-op on
/// non-element nodes.
pub fn set_text_content(node: &mut Node, text: &str) {
    const TEXT_ID_BASE: NodeId = 1 << 30;

    let own = node.id();
    if let Node::Element { children, .. } = node {
        if children.len() == 1 {
            if let Some(Node::Text { text: existing, .. }) = children.first_mut() {
                existing.clear();
                existing.push_str(text);
                return;
            }
        }
        children.clear();
        children.push(Node::Text {
            id: Id(TEXT_ID_BASE + own.0),
            text: text.to_string(),
        });
    }
}

/// Returns the largest node id used anywhere in the subtree.
///
/// Callers that need to append nodes allocate fresh ids above this.
pub fn max_id(node: &Node) -> NodeId {
    let mut max = node.id().0;
    for c in node.children() {
        max = max.max(max_id(c));
    }
    max
}
