//! Menu store trait defining the interface for widget state management.
//!
//! This trait provides a UI-agnostic abstraction over drop-down state,
//! allowing different implementations to be swapped in for testing or
//! alternative frontends.

use crate::entry::OptionEntry;
use crate::id::WidgetId;
use crate::store::{DropdownConfig, ValueChange};

/// Trait defining the menu store interface.
///
/// This captures the set of operations the binding layer needs:
/// - Widget lifecycle (registration)
/// - State transitions (show/hide/toggle/enable/disable)
/// - Selection and restore/reset semantics
/// - Read-only state access for mirroring onto the DOM
///
/// Operations addressed at unknown widgets are silent no-ops; missing
/// structure is never an error in this layer.
pub trait MenuStore {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Register a widget; first registration wins (records the original
    /// value exactly once).
    fn register(&mut self, id: WidgetId, config: DropdownConfig);

    /// Returns `true` if a widget is registered under this id.
    fn has(&self, id: WidgetId) -> bool;

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Open the widget, hiding every other visible widget first.
    ///
    /// No-op when disabled. Returns `true` if visible afterwards.
    fn show(&mut self, id: WidgetId) -> bool;

    /// Close the widget. Idempotent. Returns `true` if it was visible.
    fn hide(&mut self, id: WidgetId) -> bool;

    /// Close every visible widget. Returns `true` if anything changed.
    fn hide_all(&mut self) -> bool;

    /// Hide if visible, else show.
    fn toggle(&mut self, id: WidgetId);

    /// Re-enable interaction.
    fn enable(&mut self, id: WidgetId);

    /// Suppress interaction, closing the widget first.
    fn disable(&mut self, id: WidgetId);

    // =========================================================================
    // Selection
    // =========================================================================

    /// Commit the selection of the entry at `index`; always closes.
    ///
    /// Returns the committed change when the entry carries a logical value.
    fn select(&mut self, id: WidgetId, index: usize) -> Option<ValueChange>;

    /// Restore display and bound value to the original value, closing the
    /// widget. Falls back to the `name` label when no entry matches.
    fn restore_original(&mut self, id: WidgetId);

    /// Clear the original value, then restore.
    fn reset(&mut self, id: WidgetId);

    // =========================================================================
    // Read-Only Getters
    // =========================================================================

    fn is_visible(&self, id: WidgetId) -> bool;
    fn is_disabled(&self, id: WidgetId) -> bool;
    fn is_empty(&self, id: WidgetId) -> bool;

    /// The widget's display label.
    fn name(&self, id: WidgetId) -> Option<&str>;

    /// The widget's current logical value.
    fn value(&self, id: WidgetId) -> Option<&str>;

    /// The text currently shown on the toggle control.
    fn display_text(&self, id: WidgetId) -> Option<&str>;

    /// The entry at `index`, if the widget and entry exist.
    fn entry(&self, id: WidgetId, index: usize) -> Option<&OptionEntry>;

    /// Ids of all currently visible widgets.
    fn visible_widgets(&self) -> Vec<WidgetId>;
}

// =============================================================================
// Implementation for DropdownStore
// =============================================================================

impl MenuStore for crate::store::DropdownStore {
    #[inline]
    fn register(&mut self, id: WidgetId, config: DropdownConfig) {
        crate::store::DropdownStore::register(self, id, config)
    }

    #[inline]
    fn has(&self, id: WidgetId) -> bool {
        crate::store::DropdownStore::has(self, id)
    }

    #[inline]
    fn show(&mut self, id: WidgetId) -> bool {
        crate::store::DropdownStore::show(self, id)
    }

    #[inline]
    fn hide(&mut self, id: WidgetId) -> bool {
        crate::store::DropdownStore::hide(self, id)
    }

    #[inline]
    fn hide_all(&mut self) -> bool {
        crate::store::DropdownStore::hide_all(self)
    }

    #[inline]
    fn toggle(&mut self, id: WidgetId) {
        crate::store::DropdownStore::toggle(self, id)
    }

    #[inline]
    fn enable(&mut self, id: WidgetId) {
        crate::store::DropdownStore::enable(self, id)
    }

    #[inline]
    fn disable(&mut self, id: WidgetId) {
        crate::store::DropdownStore::disable(self, id)
    }

    #[inline]
    fn select(&mut self, id: WidgetId, index: usize) -> Option<ValueChange> {
        crate::store::DropdownStore::select(self, id, index)
    }

    #[inline]
    fn restore_original(&mut self, id: WidgetId) {
        crate::store::DropdownStore::restore_original(self, id)
    }

    #[inline]
    fn reset(&mut self, id: WidgetId) {
        crate::store::DropdownStore::reset(self, id)
    }

    #[inline]
    fn is_visible(&self, id: WidgetId) -> bool {
        crate::store::DropdownStore::is_visible(self, id)
    }

    #[inline]
    fn is_disabled(&self, id: WidgetId) -> bool {
        crate::store::DropdownStore::is_disabled(self, id)
    }

    #[inline]
    fn is_empty(&self, id: WidgetId) -> bool {
        crate::store::DropdownStore::is_empty(self, id)
    }

    #[inline]
    fn name(&self, id: WidgetId) -> Option<&str> {
        crate::store::DropdownStore::name(self, id)
    }

    #[inline]
    fn value(&self, id: WidgetId) -> Option<&str> {
        crate::store::DropdownStore::value(self, id)
    }

    #[inline]
    fn display_text(&self, id: WidgetId) -> Option<&str> {
        crate::store::DropdownStore::display_text(self, id)
    }

    #[inline]
    fn entry(&self, id: WidgetId, index: usize) -> Option<&OptionEntry> {
        crate::store::DropdownStore::entry(self, id, index)
    }

    #[inline]
    fn visible_widgets(&self) -> Vec<WidgetId> {
        crate::store::DropdownStore::visible_widgets(self)
    }
}
