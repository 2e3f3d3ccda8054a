use std::time::{Duration, Instant};

/// What a pending timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Sample pointer movement and show the tip if it settled
    Intent,
    /// Hide the tip after the close delay
    Close,
}

/// A one-shot timer owned by a display controller.
///
/// Holding it in an `Option` is the whole lifecycle: replacing or taking the
/// value cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTimer {
    pub kind: TimerKind,
    pub deadline: Instant,
}

impl HoverTimer {
    pub fn after(kind: TimerKind, now: Instant, delay: Duration) -> Self {
        Self {
            kind,
            deadline: now + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before the timer fires, zero once due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
