//! Tooltip module
//!
//! The tooltip controller owns everything about the popup itself: which
//! element's tip is visible, where it sits and how it is drawn. Display
//! controllers only ever talk to it through `TipController`.

mod placement;
mod tip_controller;
mod tooltip_controller;
pub mod tooltip_render;

pub use placement::{Placement, place_tip};
pub use tip_controller::{SharedTips, TipController};
pub use tooltip_controller::{TipTarget, TooltipController, VisibleTip};
