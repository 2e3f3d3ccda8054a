use std::collections::HashMap;

use ratatui::layout::Rect;

use super::placement::{Placement, place_tip};
use super::tip_controller::TipController;
use super::tooltip_render::tip_size;
use crate::config::TooltipConfig;
use crate::display::DisplayContext;
use crate::hover::ElementId;

/// A registered tooltip target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipTarget {
    pub bounds: Rect,
    pub text: String,
}

/// The tip currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleTip {
    pub element: ElementId,
    pub area: Rect,
    pub text: String,
}

/// Terminal tooltip controller.
///
/// At most one tip is visible. Showing a tip for another element closes the
/// current one first, keeping hover flags and the session consistent.
#[derive(Debug)]
pub struct TooltipController {
    targets: HashMap<ElementId, TipTarget>,
    placement: Placement,
    offset: u16,
    max_width: u16,
    viewport: Rect,
    visible: Option<VisibleTip>,
}

impl TooltipController {
    pub fn new(config: &TooltipConfig) -> Self {
        Self {
            targets: HashMap::new(),
            placement: config.placement,
            offset: config.offset,
            max_width: config.max_width,
            viewport: Rect::default(),
            visible: None,
        }
    }

    pub fn register(&mut self, element: ElementId, bounds: Rect, text: impl Into<String>) {
        self.targets.insert(
            element,
            TipTarget {
                bounds,
                text: text.into(),
            },
        );
    }

    pub fn unregister(&mut self, element: ElementId) {
        self.targets.remove(&element);
        if self.visible.as_ref().is_some_and(|tip| tip.element == element) {
            self.visible = None;
        }
    }

    /// Move a target. A visible tip stays where it is until repositioned.
    pub fn set_bounds(&mut self, element: ElementId, bounds: Rect) {
        if let Some(target) = self.targets.get_mut(&element) {
            target.bounds = bounds;
        }
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn target(&self, element: ElementId) -> Option<&TipTarget> {
        self.targets.get(&element)
    }

    pub fn visible(&self) -> Option<&VisibleTip> {
        self.visible.as_ref()
    }

    pub fn is_showing(&self, element: ElementId) -> bool {
        self.visible.as_ref().is_some_and(|tip| tip.element == element)
    }

    fn compute_area(&self, target: &TipTarget) -> Rect {
        let (width, height) = tip_size(&target.text, self.max_width);
        place_tip(
            target.bounds,
            width,
            height,
            self.placement,
            self.offset,
            self.viewport,
        )
    }

    fn close(&mut self, element: ElementId, ctx: &DisplayContext) {
        {
            let mut hovers = ctx.hovers.borrow_mut();
            hovers.set_active_hover(element, false);
            hovers.set_forced_open(element, false);
        }

        if self.is_showing(element) {
            self.visible = None;
            let mut session = ctx.session.borrow_mut();
            session.is_tip_open = false;
            session.active_element = None;
        }
    }
}

impl TipController for TooltipController {
    fn show_tip(&mut self, element: ElementId, ctx: &DisplayContext) {
        if let Some(open) = self.visible.as_ref().map(|tip| tip.element)
            && open != element
        {
            #[cfg(debug_assertions)]
            log::debug!("closing tip {} to show {}", open, element);

            self.close(open, ctx);
        }

        let Some(target) = self.targets.get(&element) else {
            #[cfg(debug_assertions)]
            log::warn!("show_tip for unregistered element {}", element);
            return;
        };

        let area = self.compute_area(target);
        self.visible = Some(VisibleTip {
            element,
            area,
            text: target.text.clone(),
        });

        ctx.hovers.borrow_mut().set_active_hover(element, true);
        let mut session = ctx.session.borrow_mut();
        session.is_tip_open = true;
        session.active_element = Some(element);
        session.tip_open_imminent = false;
    }

    fn hide_tip(&mut self, element: ElementId, ctx: &DisplayContext) {
        self.close(element, ctx);
    }

    fn reset_position(&mut self, element: ElementId, _ctx: &DisplayContext) {
        let Some(target) = self.targets.get(&element) else {
            return;
        };
        let area = self.compute_area(target);

        if let Some(tip) = self.visible.as_mut()
            && tip.element == element
        {
            tip.area = area;
        }
    }
}
