use std::cell::RefCell;
use std::rc::Rc;

use crate::display::DisplayContext;
use crate::hover::ElementId;

/// Operations a display controller needs from whatever renders the tip.
///
/// Implementations must tolerate repeated calls: showing a shown tip or
/// hiding a hidden one is allowed.
pub trait TipController {
    fn show_tip(&mut self, element: ElementId, ctx: &DisplayContext);
    fn hide_tip(&mut self, element: ElementId, ctx: &DisplayContext);
    fn reset_position(&mut self, element: ElementId, ctx: &DisplayContext);
}

/// One tooltip controller serves every display controller of a UI
pub type SharedTips = Rc<RefCell<dyn TipController>>;
