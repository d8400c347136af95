//! Central store for drop-down widget state.
//!
//! This store is UI-agnostic: it does not touch the DOM or emit events by
//! itself. The binding layer translates input events into store calls and
//! then mirrors the resulting state back onto whatever it renders.
//!
//! The store is also the page-wide registry: it owns every widget for the
//! page session and enforces the "at most one open menu" rule across them.

use crate::entry::OptionEntry;
use crate::id::WidgetId;
use crate::state::DropdownState;
use std::collections::HashMap;

/// Registration-time description of one widget.
#[derive(Clone, Debug, Default)]
pub struct DropdownConfig {
    /// Display label for the widget.
    pub name: String,

    /// Name of the bound hidden field, when requested.
    pub input_target: Option<String>,

    /// Initial logical value read from the bound field (empty when absent).
    pub original_value: String,

    /// Selectable entries, in display order.
    pub entries: Vec<OptionEntry>,
}

/// Payload of a committed selection, handed to the binding layer so it can
/// notify external listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueChange {
    /// Display text of the selected entry.
    pub text: String,

    /// Logical value of the selected entry.
    pub value: String,
}

/// Central store for drop-down widget state.
///
/// All state transitions run to completion synchronously on the calling
/// turn. Within [`show`](Self::show), the hide-broadcast to every other
/// visible widget completes before the target widget becomes visible, so
/// two widgets are never visible at the same observation point.
///
/// # Example
///
/// ```
/// use widget_core::{DropdownConfig, DropdownStore, OptionEntry, WidgetId};
///
/// let mut store = DropdownStore::new();
/// let id = WidgetId::from_raw(1);
///
/// store.register(
///     id,
///     DropdownConfig {
///         name: "Country".to_string(),
///         entries: vec![OptionEntry::new("Portugal", Some("pt".to_string()))],
///         ..Default::default()
///     },
/// );
/// store.show(id);
/// assert!(store.is_visible(id));
///
/// let change = store.select(id, 0).unwrap();
/// assert_eq!(change.value, "pt");
/// assert!(!store.is_visible(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DropdownStore {
    widgets: HashMap<WidgetId, DropdownState>,
}

impl DropdownStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }

    /// Returns `true` if a widget is registered under this id.
    pub fn has(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id)
    }

    /// Register a widget.
    ///
    /// If a widget already exists under this id, this is a no-op: the
    /// original value is recorded exactly once, at first registration.
    /// New widgets start hidden and enabled, displaying their `name`.
    pub fn register(&mut self, id: WidgetId, config: DropdownConfig) {
        self.widgets.entry(id).or_insert(DropdownState {
            text: config.name.clone(),
            name: config.name,
            input_target: config.input_target,
            original_value: config.original_value,
            value: String::new(),
            entries: config.entries,
            visible: false,
            disabled: false,
        });
    }

    /// Drop all widget state. Typically called on navigation.
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    /// All registered widget ids, in no particular order.
    pub fn widgets(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.widgets.keys().copied()
    }

    /// Ids of all currently visible widgets.
    pub fn visible_widgets(&self) -> Vec<WidgetId> {
        self.widgets
            .iter()
            .filter(|(_, st)| st.visible)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.widgets.get(&id).is_some_and(|st| st.visible)
    }

    pub fn is_disabled(&self, id: WidgetId) -> bool {
        self.widgets.get(&id).is_some_and(|st| st.disabled)
    }

    /// Returns `true` if the widget has no selectable entries.
    pub fn is_empty(&self, id: WidgetId) -> bool {
        self.widgets.get(&id).is_some_and(|st| st.is_empty())
    }

    /// The widget's display label.
    pub fn name(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(&id).map(|st| st.name.as_str())
    }

    /// Name of the bound field, when the widget carries one.
    pub fn input_target(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(&id).and_then(|st| st.input_target.as_deref())
    }

    /// The widget's current logical value.
    pub fn value(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(&id).map(|st| st.value.as_str())
    }

    /// The text currently shown on the toggle control.
    pub fn display_text(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(&id).map(|st| st.text.as_str())
    }

    /// The logical value recorded at registration (empty after `reset`).
    pub fn original_value(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(&id).map(|st| st.original_value.as_str())
    }

    /// The entry at `index`, if the widget and entry exist.
    pub fn entry(&self, id: WidgetId, index: usize) -> Option<&OptionEntry> {
        self.widgets.get(&id).and_then(|st| st.entries.get(index))
    }

    /// Open the widget.
    ///
    /// No-op when the widget is disabled or unknown. Otherwise every other
    /// visible widget is hidden first (page-wide mutual exclusion), then
    /// this widget becomes visible. Returns `true` if the widget is visible
    /// afterwards.
    pub fn show(&mut self, id: WidgetId) -> bool {
        match self.widgets.get(&id) {
            Some(st) if !st.disabled => {}
            _ => return false,
        }

        // Broadcast the hide to every sibling before the target transitions,
        // so no observation point sees two open widgets.
        for (other, st) in self.widgets.iter_mut() {
            if *other != id {
                st.visible = false;
            }
        }

        // Lookup cannot fail: checked above, no removal in between.
        if let Some(st) = self.widgets.get_mut(&id) {
            st.visible = true;
        }
        true
    }

    /// Close the widget. Idempotent and unconditional.
    ///
    /// Returns `true` if the widget was visible before the call.
    pub fn hide(&mut self, id: WidgetId) -> bool {
        let Some(st) = self.widgets.get_mut(&id) else {
            return false;
        };
        let was_visible = st.visible;
        st.visible = false;
        was_visible
    }

    /// Close every visible widget. Returns `true` if anything changed.
    pub fn hide_all(&mut self) -> bool {
        let mut changed = false;
        for st in self.widgets.values_mut() {
            changed |= st.visible;
            st.visible = false;
        }
        changed
    }

    /// [`hide`](Self::hide) if visible, else [`show`](Self::show).
    pub fn toggle(&mut self, id: WidgetId) {
        if self.is_visible(id) {
            self.hide(id);
        } else {
            self.show(id);
        }
    }

    /// Re-enable interaction.
    pub fn enable(&mut self, id: WidgetId) {
        if let Some(st) = self.widgets.get_mut(&id) {
            st.disabled = false;
        }
    }

    /// Suppress interaction. Forces the widget closed first.
    pub fn disable(&mut self, id: WidgetId) {
        self.hide(id);
        if let Some(st) = self.widgets.get_mut(&id) {
            st.disabled = true;
        }
    }

    /// Commit the selection of the entry at `index`.
    ///
    /// The widget always closes. When the entry carries a logical value,
    /// the bound value and display text are updated and the committed
    /// [`ValueChange`] is returned for the binding layer to broadcast.
    /// Entries without a logical value (and out-of-range indexes) only
    /// close the widget.
    pub fn select(&mut self, id: WidgetId, index: usize) -> Option<ValueChange> {
        let st = self.widgets.get_mut(&id)?;
        st.visible = false;

        let entry = st.entries.get(index)?;
        let value = entry.value.clone()?;
        let text = entry.text.clone();

        st.value = value.clone();
        st.text = text.clone();

        Some(ValueChange { text, value })
    }

    /// Restore the display to the original value.
    ///
    /// The display text comes from the entry whose logical value equals
    /// `original_value`; when no entry matches (empty by design or stale
    /// reference alike), the widget's `name` label is used instead. The
    /// widget closes and the bound value is rewritten to `original_value`.
    pub fn restore_original(&mut self, id: WidgetId) {
        let Some(st) = self.widgets.get_mut(&id) else {
            return;
        };

        let text = st
            .entries
            .iter()
            .find(|e| e.value.as_deref() == Some(st.original_value.as_str()))
            .map(|e| e.text.clone())
            .unwrap_or_else(|| st.name.clone());

        st.visible = false;
        st.value = st.original_value.clone();
        st.text = text;
    }

    /// Clear the original value, then restore.
    ///
    /// Afterwards the bound value is empty and the display falls back to
    /// the `name` label (unless an entry carries an empty logical value).
    pub fn reset(&mut self, id: WidgetId) {
        if let Some(st) = self.widgets.get_mut(&id) {
            st.original_value.clear();
        }
        self.restore_original(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<OptionEntry> {
        vec![
            OptionEntry::new("Portugal", Some("pt".to_string())),
            OptionEntry::new("Netherlands", Some("nl".to_string())),
            OptionEntry::new("Separator", None),
        ]
    }

    fn registered(store: &mut DropdownStore, raw: u64, original: &str) -> WidgetId {
        let id = WidgetId::from_raw(raw);
        store.register(
            id,
            DropdownConfig {
                name: "Country".to_string(),
                input_target: Some("country".to_string()),
                original_value: original.to_string(),
                entries: entries(),
            },
        );
        id
    }

    #[test]
    fn register_records_original_value_exactly_once() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "pt");

        // Re-registration must not overwrite the recorded original.
        store.register(
            id,
            DropdownConfig {
                name: "Other".to_string(),
                original_value: "nl".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(store.original_value(id), Some("pt"));
        assert_eq!(store.name(id), Some("Country"));
        assert_eq!(store.input_target(id), Some("country"));
    }

    #[test]
    fn hide_is_idempotent() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "");

        assert!(!store.hide(id));
        store.show(id);
        assert!(store.hide(id));
        assert!(!store.hide(id));
        assert!(!store.is_visible(id));
    }

    #[test]
    fn show_on_disabled_widget_never_becomes_visible() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "");

        store.disable(id);
        assert!(!store.show(id));
        assert!(!store.is_visible(id));

        store.enable(id);
        assert!(store.show(id));
        assert!(store.is_visible(id));
    }

    #[test]
    fn disable_forces_hide_first() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "");

        store.show(id);
        store.disable(id);
        assert!(!store.is_visible(id));
        assert!(store.is_disabled(id));
    }

    #[test]
    fn show_hides_every_other_visible_widget() {
        let mut store = DropdownStore::new();
        let a = registered(&mut store, 1, "");
        let b = registered(&mut store, 2, "");

        store.show(a);
        assert!(store.is_visible(a));

        store.show(b);
        assert!(!store.is_visible(a));
        assert!(store.is_visible(b));
        assert_eq!(store.visible_widgets(), vec![b]);
    }

    #[test]
    fn select_with_logical_value_updates_and_hides() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "");
        store.show(id);

        let change = store.select(id, 1).unwrap();
        assert_eq!(change.text, "Netherlands");
        assert_eq!(change.value, "nl");
        assert_eq!(store.value(id), Some("nl"));
        assert_eq!(store.display_text(id), Some("Netherlands"));
        assert!(!store.is_visible(id));
    }

    #[test]
    fn select_without_logical_value_only_hides() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "");
        store.show(id);

        assert!(store.select(id, 2).is_none());
        assert_eq!(store.value(id), Some(""));
        assert!(!store.is_visible(id));
    }

    #[test]
    fn select_out_of_range_only_hides() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "");
        store.show(id);

        assert!(store.select(id, 99).is_none());
        assert!(!store.is_visible(id));
    }

    #[test]
    fn restore_original_uses_matching_entry_text() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "nl");

        store.restore_original(id);
        assert_eq!(store.value(id), Some("nl"));
        assert_eq!(store.display_text(id), Some("Netherlands"));
        assert!(!store.is_visible(id));
    }

    #[test]
    fn restore_original_falls_back_to_name_for_stale_value() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "gone");

        store.restore_original(id);
        assert_eq!(store.value(id), Some("gone"));
        assert_eq!(store.display_text(id), Some("Country"));
    }

    #[test]
    fn reset_clears_value_and_shows_name_label() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "pt");
        store.restore_original(id);

        store.reset(id);
        assert_eq!(store.value(id), Some(""));
        assert_eq!(store.original_value(id), Some(""));
        assert_eq!(store.display_text(id), Some("Country"));
    }

    #[test]
    fn hide_all_reports_changes() {
        let mut store = DropdownStore::new();
        let a = registered(&mut store, 1, "");
        let _b = registered(&mut store, 2, "");

        assert!(!store.hide_all());
        store.show(a);
        assert!(store.hide_all());
        assert!(store.visible_widgets().is_empty());
    }

    #[test]
    fn toggle_alternates_visibility() {
        let mut store = DropdownStore::new();
        let id = registered(&mut store, 1, "");

        store.toggle(id);
        assert!(store.is_visible(id));
        store.toggle(id);
        assert!(!store.is_visible(id));
    }

    #[test]
    fn empty_widget_is_tagged_empty() {
        let mut store = DropdownStore::new();
        let id = WidgetId::from_raw(9);
        store.register(
            id,
            DropdownConfig {
                name: "Empty".to_string(),
                ..Default::default()
            },
        );

        assert!(store.is_empty(id));
    }

    #[test]
    fn operations_on_unknown_widgets_are_silent_no_ops() {
        let mut store = DropdownStore::new();
        let ghost = WidgetId::from_raw(404);

        assert!(!store.show(ghost));
        assert!(!store.hide(ghost));
        store.toggle(ghost);
        store.enable(ghost);
        store.disable(ghost);
        store.restore_original(ghost);
        store.reset(ghost);
        assert!(store.select(ghost, 0).is_none());
        assert!(!store.has(ghost));
    }
}
