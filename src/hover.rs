//! Per-element hover state
//!
//! Elements nothing has written to read as the default state: no active
//! hover, not forced open.

mod hover_store;

pub use hover_store::{ElementId, HoverState, HoverStore, SharedHoverStore};
