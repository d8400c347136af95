//! CSS class helpers over the `class` attribute.
//!
//! The `class` attribute is stored as a single space-separated string, so
//! these helpers do whole-token matching rather than substring matching
//! (`"drop-down-container"` must not match a `"drop-down"` query).

use crate::types::Node;

/// Returns `true` if the element's `class` attribute contains `class_name`
/// as a whole token.
pub fn has_class(node: &Node, class_name: &str) -> bool {
    node.attr("class")
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// Adds `class_name` to the element's class list (no-op if already present).
pub fn add_class(node: &mut Node, class_name: &str) {
    if has_class(node, class_name) {
        return;
    }
    let classes = match node.attr("class") {
        Some(existing) if !existing.is_empty() => format!("{existing} {class_name}"),
        _ => class_name.to_string(),
    };
    node.set_attr("class", &classes);
}

/// Removes `class_name` from the element's class list (no-op if absent).
pub fn remove_class(node: &mut Node, class_name: &str) {
    let Some(existing) = node.attr("class") else {
        return;
    };
    if !existing.split_ascii_whitespace().any(|c| c == class_name) {
        return;
    }
    let classes = existing
        .split_ascii_whitespace()
        .filter(|c| *c != class_name)
        .collect::<Vec<_>>()
        .join(" ");
    node.set_attr("class", &classes);
}

/// Adds or removes `class_name` so the class list matches `on`.
pub fn set_class(node: &mut Node, class_name: &str, on: bool) {
    if on {
        add_class(node, class_name);
    } else {
        remove_class(node, class_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Id, Node};

    fn div(classes: &str) -> Node {
        Node::Element {
            id: Id(1),
            name: "div".to_string(),
            attributes: vec![("class".to_string(), Some(classes.to_string()))],
            children: Vec::new(),
        }
    }

    #[test]
    fn has_class_matches_whole_tokens_only() {
        let node = div("drop-down-container visible");
        assert!(has_class(&node, "drop-down-container"));
        assert!(has_class(&node, "visible"));
        assert!(!has_class(&node, "drop-down"));
    }

    #[test]
    fn add_class_is_idempotent() {
        let mut node = div("menu");
        add_class(&mut node, "active");
        add_class(&mut node, "active");
        assert_eq!(node.attr("class"), Some("menu active"));
    }

    #[test]
    fn add_class_works_without_class_attribute() {
        let mut node = Node::Element {
            id: Id(1),
            name: "div".to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        };
        add_class(&mut node, "menu");
        assert_eq!(node.attr("class"), Some("menu"));
    }

    #[test]
    fn remove_class_keeps_remaining_tokens() {
        let mut node = div("menu active visible");
        remove_class(&mut node, "active");
        assert_eq!(node.attr("class"), Some("menu visible"));
        remove_class(&mut node, "absent");
        assert_eq!(node.attr("class"), Some("menu visible"));
    }

    #[test]
    fn set_class_toggles_both_ways() {
        let mut node = div("menu");
        set_class(&mut node, "disabled", true);
        assert!(has_class(&node, "disabled"));
        set_class(&mut node, "disabled", false);
        assert!(!has_class(&node, "disabled"));
    }
}
