//! # widget_core
//!
//! UI-agnostic drop-down state layer.
//!
//! This crate provides the fundamental building blocks for drop-down
//! widgets:
//! - [`WidgetId`]: a generic, opaque identifier for widget instances
//! - [`DropdownStore`]: the explicitly-owned registry of all widget state,
//!   replacing any page-wide "active menu" globals
//! - [`OptionEntry`]: one selectable item (display text + optional logical
//!   value)
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any DOM or tree representation
//! - Event dispatch or input handling
//! - CSS or rendering concerns
//!
//! All state transitions (show/hide/toggle/enable/disable/select/
//! restore-original/reset) live here. The store itself enforces page-wide
//! mutual exclusion: showing one widget hides every other visible widget
//! before the target becomes visible, so at most one widget is visible at
//! any observation point.
//!
//! ## Integration
//!
//! To integrate with a DOM-based binding layer, convert the native node id
//! to a [`WidgetId`] at the call boundary:
//! ```ignore
//! fn to_widget_id(id: dom::Id) -> WidgetId {
//!     WidgetId::from_raw(id.0 as u64)
//! }
//! ```

mod entry;
mod id;
mod state;
mod store;
mod traits;

pub use entry::OptionEntry;
pub use id::WidgetId;
pub use store::{DropdownConfig, DropdownStore, ValueChange};
pub use traits::MenuStore;
