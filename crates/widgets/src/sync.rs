//! Mirroring store state back onto the DOM.

use crate::index::DropdownIndex;
use dom::Node;
use dom::classes::set_class;
use dom::traverse::{find_mut, set_text_content};
use widget_core::MenuStore;

/// Make the DOM match the store for every bound widget.
///
/// State classes: `active` on the widget element and `visible` on its
/// container while open, `disabled` on both while interaction is
/// suppressed, `hidden` on containers of widgets with no entries. The
/// bound field's `value` attribute and the toggle's text content follow
/// the store. Nodes that disappeared from the tree are skipped.
pub fn sync_to_dom<S: MenuStore>(index: &DropdownIndex, store: &S, root: &mut Node) {
    for (widget, binding) in index.bindings() {
        if !store.has(widget) {
            continue;
        }

        let visible = store.is_visible(widget);
        let disabled = store.is_disabled(widget);

        if let Some(element) = find_mut(root, binding.element) {
            set_class(element, "active", visible);
            set_class(element, "disabled", disabled);
        }

        if let Some(container) = find_mut(root, binding.container) {
            set_class(container, "visible", visible);
            set_class(container, "disabled", disabled);
            set_class(container, "hidden", store.is_empty(widget));
        }

        if let Some(input_id) = binding.input
            && let Some(input) = find_mut(root, input_id)
            && let Some(value) = store.value(widget)
        {
            input.set_attr("value", value);
        }

        if let Some(toggle) = find_mut(root, binding.toggle)
            && let Some(text) = store.display_text(widget)
        {
            set_text_content(toggle, text);
        }
    }
}
