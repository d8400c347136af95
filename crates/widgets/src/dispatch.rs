//! Typed event routing.
//!
//! The dispatcher owns all event subscriptions: per-widget click targets
//! live in the binding index, and the page-level keydown/click handlers
//! are registered exactly once, guarded by a flag, no matter how many
//! seeding passes attach to the dispatcher.

use crate::events::{Key, UiEvent, WidgetEvent};
use crate::index::DropdownIndex;
use crate::sync::sync_to_dom;
use dom::Node;
use widget_core::{MenuStore, WidgetId};

/// Externally invokable widget operations.
///
/// Embedders call [`EventDispatcher::apply`] with one of these instead of
/// selecting an operation by string name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownOp {
    Show,
    Hide,
    Toggle,
    Enable,
    Disable,
    /// Restore display and bound value to the original value.
    Original,
    /// Clear the original value, then restore.
    Reset,
}

/// Routes input events into store transitions and mirrors the result back
/// onto the DOM.
#[derive(Clone, Debug, Default)]
pub struct EventDispatcher {
    index: DropdownIndex,
    page_handlers_registered: bool,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the bindings from a seeding pass.
    ///
    /// The first attach also registers the page-level keydown and click
    /// handlers; later attaches only merge bindings, so initializing more
    /// widgets never duplicates the page-level registration.
    pub fn attach(&mut self, index: DropdownIndex) {
        self.index.merge(index);

        if self.page_handlers_registered {
            log::trace!(target: "widgets.dispatch", "page handlers already registered");
            return;
        }
        self.page_handlers_registered = true;
        log::debug!(target: "widgets.dispatch", "registered page-level keydown/click handlers");
    }

    pub fn index(&self) -> &DropdownIndex {
        &self.index
    }

    pub fn page_handlers_registered(&self) -> bool {
        self.page_handlers_registered
    }

    /// Route one input event.
    ///
    /// Clicks on a toggle control toggle that widget; clicks on an entry
    /// commit a selection. Both consume the event (the equivalent of
    /// stopping propagation), so only clicks on anything else reach the
    /// page-level handler and close every visible widget. Escape at the
    /// page level closes every visible widget too.
    ///
    /// Returns the notifications to broadcast to external listeners.
    pub fn dispatch<S: MenuStore>(
        &mut self,
        event: &UiEvent,
        store: &mut S,
        root: &mut Node,
    ) -> Vec<WidgetEvent> {
        let mut emitted = Vec::new();

        match event {
            UiEvent::Click { target } => {
                if let Some(widget) = self.index.widget_for_toggle(*target) {
                    log::trace!(target: "widgets.dispatch", "toggle click on {widget:?}");
                    store.toggle(widget);
                } else if let Some((widget, entry)) = self.index.entry_for_node(*target) {
                    log::trace!(target: "widgets.dispatch", "entry {entry} click on {widget:?}");
                    if let Some(change) = store.select(widget, entry) {
                        emitted.push(WidgetEvent::ValueChange {
                            widget,
                            text: change.text,
                            value: change.value,
                        });
                    }
                } else if self.page_handlers_registered {
                    // Truly external click: close whatever is open.
                    store.hide_all();
                }
            }

            UiEvent::KeyDown { key } => {
                if *key == Key::Escape && self.page_handlers_registered {
                    store.hide_all();
                }
            }
        }

        sync_to_dom(&self.index, store, root);
        emitted
    }

    /// Apply an externally requested operation to one widget.
    pub fn apply<S: MenuStore>(
        &self,
        op: DropdownOp,
        widget: WidgetId,
        store: &mut S,
        root: &mut Node,
    ) {
        match op {
            DropdownOp::Show => {
                store.show(widget);
            }
            DropdownOp::Hide => {
                store.hide(widget);
            }
            DropdownOp::Toggle => store.toggle(widget),
            DropdownOp::Enable => store.enable(widget),
            DropdownOp::Disable => store.disable(widget),
            DropdownOp::Original => store.restore_original(widget),
            DropdownOp::Reset => store.reset(widget),
        }
        sync_to_dom(&self.index, store, root);
    }
}
