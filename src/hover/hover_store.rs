use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Identity of a tooltip target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transient hover flags for one element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    /// A tooltip is displayed for this element
    pub has_active_hover: bool,
    /// The tooltip was opened bypassing intent checks
    pub forced_open: bool,
}

pub type SharedHoverStore = Rc<RefCell<HoverStore>>;

#[derive(Debug, Default)]
pub struct HoverStore {
    states: HashMap<ElementId, HoverState>,
}

impl HoverStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedHoverStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Hover flags for `element`, defaulting when never touched
    pub fn get(&self, element: ElementId) -> HoverState {
        self.states.get(&element).copied().unwrap_or_default()
    }

    pub fn has_active_hover(&self, element: ElementId) -> bool {
        self.get(element).has_active_hover
    }

    pub fn is_forced_open(&self, element: ElementId) -> bool {
        self.get(element).forced_open
    }

    pub fn set_active_hover(&mut self, element: ElementId, active: bool) {
        self.entry(element).has_active_hover = active;
    }

    pub fn set_forced_open(&mut self, element: ElementId, forced: bool) {
        self.entry(element).forced_open = forced;
    }

    /// Drop the element's record when its bindings go away
    pub fn remove(&mut self, element: ElementId) {
        self.states.remove(&element);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn entry(&mut self, element: ElementId) -> &mut HoverState {
        self.states.entry(element).or_default()
    }
}
