//! Terminal playground app
//!
//! Binds pointer and keyboard events to one display controller per target
//! button and draws the result.

mod app_events;
mod app_render;
mod app_state;
mod mouse_events;

pub use app_state::{App, DEFAULT_TARGETS, Target};
