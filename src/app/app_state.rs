use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ratatui::layout::{Constraint, Layout, Rect};

use crate::config::Config;
use crate::display::{DisplayContext, DisplayController, Phase};
use crate::hover::ElementId;
use crate::layout::target_grid;
use crate::tooltip::{SharedTips, TooltipController};

/// Longest the event loop waits for input when no timer is pending
pub const EVENT_POLL_CAP: Duration = Duration::from_millis(100);

/// Buttons shown by the playground: label and tooltip text
pub const DEFAULT_TARGETS: &[(&str, &str)] = &[
    ("Save", "Write the current buffer to disk"),
    ("Open", "Open a file from the workspace"),
    ("Search", "Search across every open buffer"),
    ("Build", "Compile the project in the background"),
    ("Run", "Run the last successful build"),
    ("Help", "Show key bindings and usage tips"),
];

/// A button with a tooltip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: ElementId,
    pub label: String,
    pub bounds: Rect,
}

pub struct App {
    pub ctx: DisplayContext,
    pub tips: Rc<RefCell<TooltipController>>,
    pub targets: Vec<Target>,
    controllers: Vec<DisplayController>,
    pub hovered: Option<ElementId>,
    pub focused: Option<ElementId>,
    pub warning: Option<String>,
    pub should_quit: bool,
    viewport: Rect,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_context(config, DisplayContext::default())
    }

    /// Build the app on an existing context, e.g. one driven by a manual clock
    pub fn with_context(config: &Config, ctx: DisplayContext) -> Self {
        let tips = Rc::new(RefCell::new(TooltipController::new(&config.tooltip)));
        let shared: SharedTips = tips.clone();
        let options = config.display.options();

        let mut targets = Vec::with_capacity(DEFAULT_TARGETS.len());
        let mut controllers = Vec::with_capacity(DEFAULT_TARGETS.len());
        for (index, (label, text)) in DEFAULT_TARGETS.iter().enumerate() {
            let id = ElementId(index);
            tips.borrow_mut().register(id, Rect::default(), *text);
            targets.push(Target {
                id,
                label: label.to_string(),
                bounds: Rect::default(),
            });
            controllers.push(DisplayController::new(
                id,
                options,
                shared.clone(),
                ctx.clone(),
            ));
        }

        Self {
            ctx,
            tips,
            targets,
            controllers,
            hovered: None,
            focused: None,
            warning: None,
            should_quit: false,
            viewport: Rect::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self, id: ElementId) -> Option<&DisplayController> {
        self.controllers.get(id.0)
    }

    pub fn controller_mut(&mut self, id: ElementId) -> Option<&mut DisplayController> {
        self.controllers.get_mut(id.0)
    }

    pub fn phase(&self, id: ElementId) -> Option<Phase> {
        self.controller(id).map(DisplayController::phase)
    }

    pub fn label(&self, id: ElementId) -> Option<&str> {
        self.targets.get(id.0).map(|target| target.label.as_str())
    }

    /// Fire every due timer; returns true if any fired
    pub fn tick_timers(&mut self) -> bool {
        let mut fired = false;
        for controller in &mut self.controllers {
            fired |= controller.tick().is_some();
        }
        fired
    }

    /// How long the event loop may block before a timer needs attention
    pub fn poll_timeout(&self) -> Duration {
        let now = self.ctx.now();
        self.controllers
            .iter()
            .filter_map(DisplayController::pending_timer)
            .map(|timer| timer.remaining(now))
            .min()
            .map_or(EVENT_POLL_CAP, |remaining| remaining.min(EVENT_POLL_CAP))
    }

    /// Split the screen into header, target area and status line
    pub fn regions(area: Rect) -> (Rect, Rect, Rect) {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        (header, body, status)
    }

    /// Place the targets for a screen of `area`. When anything moved, the
    /// visible tip is repositioned.
    pub fn layout(&mut self, area: Rect) {
        let (_, body, _) = Self::regions(area);
        let rects = target_grid(body, self.targets.len());

        let mut changed = self.viewport != area;
        if changed {
            self.viewport = area;
            self.tips.borrow_mut().set_viewport(area);
        }

        for (target, rect) in self.targets.iter_mut().zip(rects) {
            if target.bounds != rect {
                target.bounds = rect;
                self.tips.borrow_mut().set_bounds(target.id, rect);
                changed = true;
            }
        }

        if !changed {
            return;
        }

        let active = self.ctx.session.borrow().active_element;
        if let Some(controller) = active.and_then(|id| self.controller_mut(id)) {
            controller.reset_position();
        }
    }

    /// Targets with their current bounds, for hit testing
    pub fn hit_targets(&self) -> Vec<(ElementId, Rect)> {
        self.targets
            .iter()
            .map(|target| (target.id, target.bounds))
            .collect()
    }

    /// Move keyboard focus. The old target blurs (hides now), the new one
    /// focuses (shows now).
    pub fn set_focus(&mut self, focus: Option<ElementId>) {
        if self.focused == focus {
            return;
        }

        if let Some(controller) = self.focused.and_then(|id| self.controllers.get_mut(id.0)) {
            controller.hide(true);
        }
        if let Some(controller) = focus.and_then(|id| self.controllers.get_mut(id.0)) {
            controller.show(true, false);
        }

        self.focused = focus;
    }

    pub fn focus_next(&mut self) {
        let count = self.targets.len();
        if count == 0 {
            return;
        }
        let next = match self.focused {
            Some(id) => (id.0 + 1) % count,
            None => 0,
        };
        self.set_focus(Some(ElementId(next)));
    }

    pub fn focus_previous(&mut self) {
        let count = self.targets.len();
        if count == 0 {
            return;
        }
        let previous = match self.focused {
            Some(id) => (id.0 + count - 1) % count,
            None => count - 1,
        };
        self.set_focus(Some(ElementId(previous)));
    }

    /// Open the focused target's tip, skipping intent and marking it forced.
    /// A tip already open from focus is closed first so it reopens forced.
    pub fn force_open_focused(&mut self) {
        let Some(id) = self.focused else {
            return;
        };
        let forced = self.ctx.hovers.borrow().is_forced_open(id);

        if let Some(controller) = self.controllers.get_mut(id.0) {
            if !forced {
                controller.hide(true);
            }
            controller.show(true, true);
        }
    }

    /// Close every tip now and drop pending opens
    pub fn close_all(&mut self) {
        for controller in &mut self.controllers {
            controller.hide(true);
        }
    }

    /// Text for the status line
    pub fn status_text(&self) -> String {
        let session = self.ctx.session.borrow();
        let (x, y) = session.pointer();
        let intent = if session.tip_open_imminent {
            "pending"
        } else {
            "idle"
        };

        let subject = self
            .hovered
            .or(self.focused)
            .or(session.active_element);
        let phase = subject
            .and_then(|id| Some((self.label(id)?, self.phase(id)?)))
            .map(|(label, phase)| format!("{}: {:?}", label, phase))
            .unwrap_or_else(|| "no target".to_string());

        format!(" pointer {},{} │ intent {} │ {} ", x, y, intent, phase)
    }
}
