use std::cell::RefCell;
use std::rc::Rc;

use crate::hover::ElementId;

/// Session state shared by the pointer tracker, the display controllers and
/// the tooltip controller of one UI.
///
/// `Rc<RefCell<_>>` keeps it on the event-loop thread.
pub type SharedSession = Rc<RefCell<SessionState>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Pointer column at the last intent sample
    pub previous_x: u16,
    /// Pointer row at the last intent sample
    pub previous_y: u16,
    /// Latest pointer column
    pub current_x: u16,
    /// Latest pointer row
    pub current_y: u16,
    /// True while a show-intent timer is pending
    pub tip_open_imminent: bool,
    /// True while any tooltip is displayed
    pub is_tip_open: bool,
    /// Element whose tooltip is displayed
    pub active_element: Option<ElementId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSession {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Record a pointer move. Never touches the previous sample.
    pub fn track_pointer(&mut self, x: u16, y: u16) {
        self.current_x = x;
        self.current_y = y;
    }

    /// Manhattan distance between the previous sample and the current pointer
    pub fn movement_since_sample(&self) -> u32 {
        let x_diff = self.previous_x.abs_diff(self.current_x) as u32;
        let y_diff = self.previous_y.abs_diff(self.current_y) as u32;
        x_diff + y_diff
    }

    /// Take a new intent sample at the current pointer position
    pub fn rebaseline(&mut self) {
        self.previous_x = self.current_x;
        self.previous_y = self.current_y;
    }

    pub fn pointer(&self) -> (u16, u16) {
        (self.current_x, self.current_y)
    }
}
