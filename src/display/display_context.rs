use std::rc::Rc;
use std::time::Instant;

use super::clock::{Clock, SystemClock};
use crate::hover::{ElementId, HoverStore, SharedHoverStore};
use crate::session::{SessionState, SharedSession};

/// Shared state handed to every display controller and tooltip controller
/// of one UI: pointer session, per-element hover flags and the time source.
#[derive(Clone)]
pub struct DisplayContext {
    pub session: SharedSession,
    pub hovers: SharedHoverStore,
    pub clock: Rc<dyn Clock>,
}

impl DisplayContext {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            session: SessionState::shared(),
            hovers: HoverStore::shared(),
            clock,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn has_active_hover(&self, element: ElementId) -> bool {
        self.hovers.borrow().has_active_hover(element)
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(Rc::new(SystemClock))
    }
}
