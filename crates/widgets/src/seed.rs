//! Widget discovery and structure seeding.
//!
//! Walks a DOM tree for `drop-down-container` elements, dresses their
//! structure and registers each widget with the store. The walk tolerates
//! partial structure everywhere: a container without a `drop-down` element
//! is skipped, a missing bound field yields an empty original value.

use crate::index::{DropdownBinding, DropdownIndex, to_widget_id};
use crate::sync::sync_to_dom;
use dom::classes::{add_class, has_class};
use dom::traverse::{max_id, text_content};
use dom::{Id, Node, NodeId};
use widget_core::{DropdownConfig, MenuStore, OptionEntry};

/// Seed every drop-down found under `root`.
///
/// For each container this:
/// - reads `data-name` / `data-input` and the `li` entries off the
///   `drop-down` element
/// - creates the hidden bound field when `data-input` asks for one and no
///   input exists yet
/// - creates the toggle control when absent and copies the widget's
///   classes onto it (minus `drop-down`)
/// - tags the widget with the `menu` class so it participates in page-wide
///   mutual exclusion
/// - records the original value from the bound field (or empty) and
///   registers the widget, then renders the initial display
///
/// Already-registered widgets keep their state: re-seeding the same DOM
/// only refreshes the returned bindings. Returns the binding index to hand
/// to an [`EventDispatcher`](crate::EventDispatcher).
pub fn seed_dropdowns_from_dom<S: MenuStore>(store: &mut S, root: &mut Node) -> DropdownIndex {
    let mut index = DropdownIndex::new();
    let mut next_id: NodeId = max_id(root) + 1;

    walk(store, root, &mut index, &mut next_id);

    // Initial render: classes, bound values and display texts.
    sync_to_dom(&index, store, root);
    index
}

fn walk<S: MenuStore>(store: &mut S, node: &mut Node, index: &mut DropdownIndex, next_id: &mut NodeId) {
    if matches!(node, Node::Element { .. }) && has_class(node, "drop-down-container") {
        seed_container(store, node, index, next_id);
        return;
    }
    if let Some(children) = node.children_mut() {
        for child in children {
            walk(store, child, index, next_id);
        }
    }
}

fn seed_container<S: MenuStore>(
    store: &mut S,
    container: &mut Node,
    index: &mut DropdownIndex,
    next_id: &mut NodeId,
) {
    let container_id = container.id();

    // Read phase: locate the widget element and lift its configuration.
    let Some(found) = read_container(container) else {
        // No drop-down element inside: initialization is not meant to run.
        return;
    };

    let widget = to_widget_id(found.element);

    // Mutate phase: dress the missing structure.
    let Some(children) = container.children_mut() else {
        return;
    };

    let input = match found.input {
        Some(existing) => Some(existing),
        None => found.input_target.as_ref().map(|target| {
            let id = alloc(next_id);
            children.insert(
                0,
                Node::Element {
                    id,
                    name: "input".to_string(),
                    attributes: vec![
                        ("type".to_string(), Some("hidden".to_string())),
                        ("name".to_string(), Some(target.clone())),
                    ],
                    children: Vec::new(),
                },
            );
            id
        }),
    };

    let toggle = found.toggle.unwrap_or_else(|| {
        let id = alloc(next_id);
        children.insert(
            0,
            Node::Element {
                id,
                name: "div".to_string(),
                attributes: vec![("class".to_string(), Some("button button-drop-down".to_string()))],
                children: Vec::new(),
            },
        );
        id
    });

    // The toggle inherits the widget's classes, except the widget marker.
    if let Some(toggle_node) = children.iter_mut().find(|c| c.id() == toggle) {
        for class in &found.classes {
            if class != "drop-down" {
                add_class(toggle_node, class);
            }
        }
    }

    // Tag the widget as a menu so page-wide exclusion picks it up.
    if let Some(element_node) = children.iter_mut().find(|c| c.id() == found.element) {
        add_class(element_node, "menu");
    }

    if store.has(widget) {
        log::trace!(target: "widgets.seed", "re-seen drop-down {widget:?}, keeping state");
    } else {
        store.register(
            widget,
            DropdownConfig {
                name: found.name,
                input_target: found.input_target,
                original_value: found.original_value,
                entries: found.entries,
            },
        );
        // Render the initial display off the recorded original value.
        store.restore_original(widget);
        log::trace!(
            target: "widgets.seed",
            "registered drop-down {widget:?} ({} entries)",
            found.entry_ids.len()
        );
    }

    index.insert(
        widget,
        DropdownBinding {
            container: container_id,
            element: found.element,
            toggle,
            input,
        },
        &found.entry_ids,
    );
}

struct FoundStructure {
    element: Id,
    toggle: Option<Id>,
    input: Option<Id>,
    name: String,
    input_target: Option<String>,
    original_value: String,
    classes: Vec<String>,
    entries: Vec<OptionEntry>,
    entry_ids: Vec<Id>,
}

fn read_container(container: &Node) -> Option<FoundStructure> {
    let mut element = None;
    let mut toggle = None;
    let mut input = None;

    for child in container.children() {
        if element.is_none() && has_class(child, "drop-down") {
            element = Some(child);
        } else if toggle.is_none() && has_class(child, "button-drop-down") {
            toggle = Some(child.id());
        } else if input.is_none() && child.is_element("input") {
            input = Some(child);
        }
    }

    let element = element?;

    let mut entries = Vec::new();
    let mut entry_ids = Vec::new();
    for child in element.children() {
        if child.is_element("li") {
            entries.push(OptionEntry::new(
                text_content(child),
                child.attr("data-value").map(str::to_string),
            ));
            entry_ids.push(child.id());
        }
    }

    Some(FoundStructure {
        element: element.id(),
        toggle,
        input: input.map(Node::id),
        name: element.attr("data-name").unwrap_or_default().to_string(),
        input_target: element.attr("data-input").map(str::to_string),
        original_value: input
            .and_then(|n| n.attr("value"))
            .unwrap_or_default()
            .to_string(),
        classes: element
            .attr("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
            .map(str::to_string)
            .collect(),
        entries,
        entry_ids,
    })
}

fn alloc(next_id: &mut NodeId) -> Id {
    let id = Id(*next_id);
    *next_id += 1;
    id
}
