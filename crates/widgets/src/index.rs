//! Mapping between DOM nodes and registered widgets.

use std::collections::HashMap;
use widget_core::WidgetId;

/// Converts a DOM node id to a widget id at the binding boundary.
#[inline]
pub fn to_widget_id(id: dom::Id) -> WidgetId {
    WidgetId::from_raw(id.0 as u64)
}

/// The DOM nodes one widget is bound to.
#[derive(Clone, Copy, Debug)]
pub struct DropdownBinding {
    /// The `drop-down-container` element.
    pub container: dom::Id,

    /// The `drop-down` element itself (the widget id derives from it).
    pub element: dom::Id,

    /// The `button-drop-down` toggle control.
    pub toggle: dom::Id,

    /// The hidden bound field, when the widget carries one.
    pub input: Option<dom::Id>,
}

/// Lookup structure built during seeding and owned by the dispatcher.
#[derive(Clone, Debug, Default)]
pub struct DropdownIndex {
    bindings: HashMap<WidgetId, DropdownBinding>,
    by_toggle: HashMap<dom::Id, WidgetId>,
    by_entry: HashMap<dom::Id, (WidgetId, usize)>,
}

impl DropdownIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn insert(
        &mut self,
        widget: WidgetId,
        binding: DropdownBinding,
        entries: &[dom::Id],
    ) {
        self.by_toggle.insert(binding.toggle, widget);
        for (i, entry) in entries.iter().enumerate() {
            self.by_entry.insert(*entry, (widget, i));
        }
        self.bindings.insert(widget, binding);
    }

    /// Absorb another index (e.g. from a later seeding pass over new DOM).
    pub fn merge(&mut self, other: DropdownIndex) {
        self.bindings.extend(other.bindings);
        self.by_toggle.extend(other.by_toggle);
        self.by_entry.extend(other.by_entry);
    }

    pub fn binding(&self, widget: WidgetId) -> Option<&DropdownBinding> {
        self.bindings.get(&widget)
    }

    /// The widget whose toggle control is this node, if any.
    pub fn widget_for_toggle(&self, node: dom::Id) -> Option<WidgetId> {
        self.by_toggle.get(&node).copied()
    }

    /// The widget and entry index this node selects, if any.
    pub fn entry_for_node(&self, node: dom::Id) -> Option<(WidgetId, usize)> {
        self.by_entry.get(&node).copied()
    }

    pub fn widgets(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.bindings.keys().copied()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (WidgetId, &DropdownBinding)> {
        self.bindings.iter().map(|(w, b)| (*w, b))
    }
}
