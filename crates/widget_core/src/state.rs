//! Internal widget state representation.
//!
//! This module contains the per-widget state that is stored in the
//! DropdownStore.

use crate::entry::OptionEntry;

/// Internal state for a single drop-down widget.
///
/// This is not exposed publicly; it is managed by
/// [`DropdownStore`](crate::DropdownStore).
///
/// Visibility and enablement are orthogonal axes: a widget is tracked on
/// both at the same time, and `disabled` suppresses transitions into the
/// visible state (never the other way around).
#[derive(Clone, Debug)]
pub(crate) struct DropdownState {
    /// Display label, used as the fallback display text when no entry
    /// matches the original value.
    pub name: String,

    /// Name of the out-of-band bound field, when the widget carries one.
    pub input_target: Option<String>,

    /// The logical value to revert to on restore. Set exactly once at
    /// registration; `reset` clears it to empty.
    pub original_value: String,

    /// Current logical value.
    pub value: String,

    /// Current display text shown on the toggle control.
    pub text: String,

    /// Selectable entries, in display order.
    pub entries: Vec<OptionEntry>,

    /// Whether the widget is currently open.
    pub visible: bool,

    /// Whether interaction is suppressed.
    pub disabled: bool,
}

impl DropdownState {
    /// Widgets with no selectable entries are tagged empty; the binding
    /// layer keeps their container hidden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
