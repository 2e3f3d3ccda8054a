//! Display controller module
//!
//! Decides when a tooltip moves between hidden, pending and shown. A
//! controller is bound to one element and owns at most one pending timer:
//! either an intent poll (waiting for the pointer to settle) or a close
//! delay. Timers are deadlines that the host loop drives through `tick()`.

mod clock;
mod display_context;
mod display_controller;
mod display_options;
mod hover_timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use display_context::DisplayContext;
pub use display_controller::{DisplayController, Phase};
pub use display_options::{
    DEFAULT_CLOSE_DELAY_MS, DEFAULT_INTENT_POLL_INTERVAL_MS, DEFAULT_INTENT_SENSITIVITY,
    DisplayOptions,
};
pub use hover_timer::{HoverTimer, TimerKind};
