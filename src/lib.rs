//! hovertip library - Hover-intent tooltips for terminal UIs
//!
//! A display controller per element decides when its tooltip opens and
//! closes: opens wait until the pointer settles, closes wait out a short
//! delay, and keyboard focus bypasses both.

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod hover;
pub mod layout;
pub mod session;

#[cfg(test)]
pub mod test_utils;
pub mod tooltip;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use display::{Clock, DisplayContext, DisplayController, DisplayOptions, ManualClock, Phase};
pub use error::HovertipError;
pub use hover::{ElementId, HoverStore};
pub use session::SessionState;
pub use tooltip::{Placement, TipController, TooltipController};
