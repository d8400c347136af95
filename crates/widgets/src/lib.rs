//! # widgets
//!
//! DOM binding layer for the drop-down widget.
//!
//! This crate wires the UI-agnostic state in [`widget_core`] to a
//! [`dom::Node`] tree:
//! - [`seed_dropdowns_from_dom`] discovers drop-down containers, dresses
//!   their structure (toggle control, hidden bound field), registers each
//!   widget with the store and renders the initial display
//! - [`EventDispatcher`] owns the typed event subscriptions, including the
//!   single page-level keydown/click registration, and routes [`UiEvent`]s
//!   into store transitions
//! - [`sync_to_dom`] mirrors store state back onto the tree as CSS state
//!   classes (`active`, `visible`, `disabled`, `menu`), the bound input
//!   value and the toggle display text
//!
//! Missing expected structure is never an error anywhere in this crate:
//! seeding and dispatch degrade to silent no-ops.

mod dispatch;
mod events;
mod index;
mod seed;
mod sync;

pub use dispatch::{DropdownOp, EventDispatcher};
pub use events::{Key, UiEvent, WidgetEvent};
pub use index::{DropdownBinding, DropdownIndex, to_widget_id};
pub use seed::seed_dropdowns_from_dom;
pub use sync::sync_to_dom;
