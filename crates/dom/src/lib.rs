//! # dom
//!
//! Minimal in-memory DOM for the widget layer.
//!
//! This crate provides just enough tree structure for the presentation
//! plugins to bind to:
//! - [`Node`]: an element/text tree carrying attributes
//! - [`Id`]: a lightweight node identifier
//! - attribute and CSS-class helpers ([`classes`])
//! - subtree lookup and text collection ([`traverse`])
//!
//! It stands in for the external DOM/event library the widgets are written
//! against, which keeps the widget layer unit-testable without a browser.
//! There is no parsing, no styling and no layout here.

pub mod classes;
pub mod traverse;

mod types;

pub use types::{Id, Node, NodeId};
