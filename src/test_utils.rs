//! Shared test utilities for hovertip
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::config::Config;
    use crate::display::{DisplayContext, DisplayController, DisplayOptions, ManualClock};
    use crate::hover::ElementId;
    use crate::tooltip::{SharedTips, TipController};

    /// A call made on the tooltip controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TipCall {
        Show(ElementId),
        Hide(ElementId),
        Reposition(ElementId),
    }

    /// Tooltip controller that records calls and keeps `has_active_hover`
    /// in step with them, the way a real controller does
    #[derive(Debug, Default)]
    pub struct RecordingTips {
        pub calls: Vec<TipCall>,
    }

    impl RecordingTips {
        pub fn shows(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| matches!(call, TipCall::Show(_)))
                .count()
        }

        pub fn hides(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| matches!(call, TipCall::Hide(_)))
                .count()
        }
    }

    impl TipController for RecordingTips {
        fn show_tip(&mut self, element: ElementId, ctx: &DisplayContext) {
            self.calls.push(TipCall::Show(element));
            ctx.hovers.borrow_mut().set_active_hover(element, true);
        }

        fn hide_tip(&mut self, element: ElementId, ctx: &DisplayContext) {
            self.calls.push(TipCall::Hide(element));
            ctx.hovers.borrow_mut().set_active_hover(element, false);
        }

        fn reset_position(&mut self, element: ElementId, _ctx: &DisplayContext) {
            self.calls.push(TipCall::Reposition(element));
        }
    }

    /// Element used by single-controller tests
    pub const TARGET: ElementId = ElementId(0);

    /// A controller wired to a manual clock and a recording tooltip controller
    pub struct Harness {
        pub controller: DisplayController,
        pub clock: ManualClock,
        pub ctx: DisplayContext,
        pub tips: Rc<RefCell<RecordingTips>>,
    }

    impl Harness {
        pub fn new(options: DisplayOptions) -> Self {
            let clock = ManualClock::new();
            let ctx = DisplayContext::new(Rc::new(clock.clone()));
            let tips = Rc::new(RefCell::new(RecordingTips::default()));
            let shared: SharedTips = tips.clone();
            let controller = DisplayController::new(TARGET, options, shared, ctx.clone());

            Self {
                controller,
                clock,
                ctx,
                tips,
            }
        }

        /// Options with sensitivity 10 and round 100ms delays
        pub fn standard() -> Self {
            Self::new(test_options(10))
        }

        pub fn move_pointer(&self, x: u16, y: u16) {
            self.ctx.session.borrow_mut().track_pointer(x, y);
        }

        pub fn set_previous(&self, x: u16, y: u16) {
            let mut session = self.ctx.session.borrow_mut();
            session.previous_x = x;
            session.previous_y = y;
        }

        /// Advance the clock by `ms` and fire whatever is due
        pub fn advance(&mut self, ms: u64) {
            self.clock.advance_ms(ms);
            self.controller.tick();
        }

        pub fn calls(&self) -> Vec<TipCall> {
            self.tips.borrow().calls.clone()
        }

        pub fn has_active_hover(&self) -> bool {
            self.ctx.hovers.borrow().has_active_hover(TARGET)
        }

        pub fn is_forced_open(&self) -> bool {
            self.ctx.hovers.borrow().is_forced_open(TARGET)
        }

        pub fn tip_open_imminent(&self) -> bool {
            self.ctx.session.borrow().tip_open_imminent
        }
    }

    pub fn test_options(intent_sensitivity: u32) -> DisplayOptions {
        DisplayOptions {
            intent_poll_interval: std::time::Duration::from_millis(100),
            intent_sensitivity,
            close_delay: std::time::Duration::from_millis(100),
        }
    }

    /// App with default config on a manual clock, laid out for an 80x24 screen
    pub fn test_app() -> (App, ManualClock) {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> (App, ManualClock) {
        let clock = ManualClock::new();
        let ctx = DisplayContext::new(Rc::new(clock.clone()));
        let mut app = App::with_context(config, ctx);
        app.layout(Rect::new(0, 0, 80, 24));
        (app, clock)
    }
}
