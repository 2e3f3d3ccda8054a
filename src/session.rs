//! Session module
//!
//! Shared pointer state that every display controller reads. The pointer
//! tracker writes the current position on each move event; only the intent
//! check moves the previous position.

mod session_state;

pub use session_state::{SessionState, SharedSession};
