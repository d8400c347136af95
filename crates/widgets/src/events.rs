//! Typed event surface.
//!
//! Input events arrive from the embedding event source already normalized
//! (keyboard-code mapping is the event source's job); output events are
//! broadcast to external listeners by the dispatcher.

use widget_core::WidgetId;

/// Normalized key identity for page-level keyboard handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Tab,
}

/// Input events delivered by the embedding event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A pointer click that resolved to the given node.
    ///
    /// Clicks on a widget's toggle or entries are consumed there (the
    /// propagation stops); any other target falls through to the
    /// page-level handler, which closes every visible widget.
    Click { target: dom::Id },

    /// A key press observed at the page level.
    KeyDown { key: Key },
}

/// Notifications emitted to external listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A selection with a logical value was committed.
    ValueChange {
        widget: WidgetId,
        /// Display text of the selected entry.
        text: String,
        /// Logical value of the selected entry.
        value: String,
    },
}
