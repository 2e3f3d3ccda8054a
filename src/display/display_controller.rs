use std::time::Instant;

use super::display_context::DisplayContext;
use super::display_options::DisplayOptions;
use super::hover_timer::{HoverTimer, TimerKind};
use crate::hover::ElementId;
use crate::tooltip::SharedTips;

/// Where a controller sits in its show/hide cycle, derived from the pending
/// timer and the element's hover flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PendingIntent,
    Shown,
    PendingClose,
}

/// Hover-intent state machine for one element.
///
/// All four operations start by cancelling the pending timer, so a timer
/// armed before any later call can never fire.
pub struct DisplayController {
    element: ElementId,
    options: DisplayOptions,
    tips: SharedTips,
    ctx: DisplayContext,
    hover_timer: Option<HoverTimer>,
}

impl DisplayController {
    pub fn new(
        element: ElementId,
        options: DisplayOptions,
        tips: SharedTips,
        ctx: DisplayContext,
    ) -> Self {
        Self {
            element,
            options,
            tips,
            ctx,
            hover_timer: None,
        }
    }

    /// Begin showing the tooltip.
    ///
    /// Unless `immediate`, the tip only opens once an intent sample finds the
    /// pointer settled. `force_open` marks an immediate open as forced.
    pub fn show(&mut self, immediate: bool, force_open: bool) {
        self.cancel();
        if self.ctx.has_active_hover(self.element) {
            return;
        }

        if !immediate {
            self.ctx.session.borrow_mut().tip_open_imminent = true;
            self.arm(TimerKind::Intent);
            return;
        }

        if force_open {
            self.ctx
                .hovers
                .borrow_mut()
                .set_forced_open(self.element, true);
        }

        #[cfg(debug_assertions)]
        log::debug!("show {} immediately (forced: {})", self.element, force_open);

        self.tips.borrow_mut().show_tip(self.element, &self.ctx);
    }

    /// Begin hiding the tooltip, after `close_delay` unless `disable_delay`.
    pub fn hide(&mut self, disable_delay: bool) {
        self.cancel();
        self.ctx.session.borrow_mut().tip_open_imminent = false;
        if !self.ctx.has_active_hover(self.element) {
            return;
        }

        self.ctx
            .hovers
            .borrow_mut()
            .set_forced_open(self.element, false);

        if disable_delay {
            #[cfg(debug_assertions)]
            log::debug!("hide {} immediately", self.element);

            self.tips.borrow_mut().hide_tip(self.element, &self.ctx);
        } else {
            self.arm(TimerKind::Close);
        }
    }

    /// Drop the pending timer, if any
    pub fn cancel(&mut self) {
        self.hover_timer = None;
    }

    pub fn reset_position(&mut self) {
        self.tips.borrow_mut().reset_position(self.element, &self.ctx);
    }

    /// Fire the pending timer if its deadline has passed.
    ///
    /// Returns the kind of timer that fired. The handle is cleared before the
    /// timer's effect runs, so an intent re-arm leaves a fresh timer behind.
    pub fn tick(&mut self) -> Option<TimerKind> {
        let now = self.ctx.now();
        let timer = self.hover_timer.take_if(|timer| timer.is_due(now))?;

        match timer.kind {
            TimerKind::Intent => self.check_for_intent(),
            TimerKind::Close => {
                #[cfg(debug_assertions)]
                log::debug!("close delay elapsed for {}", self.element);

                self.tips.borrow_mut().hide_tip(self.element, &self.ctx);
            }
        }

        Some(timer.kind)
    }

    pub fn pending_timer(&self) -> Option<HoverTimer> {
        self.hover_timer
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.hover_timer.map(|timer| timer.deadline)
    }

    pub fn phase(&self) -> Phase {
        match self.hover_timer.map(|timer| timer.kind) {
            Some(TimerKind::Intent) => Phase::PendingIntent,
            Some(TimerKind::Close) => Phase::PendingClose,
            None if self.ctx.has_active_hover(self.element) => Phase::Shown,
            None => Phase::Idle,
        }
    }

    fn arm(&mut self, kind: TimerKind) {
        let delay = match kind {
            TimerKind::Intent => self.options.intent_poll_interval,
            TimerKind::Close => self.options.close_delay,
        };

        #[cfg(debug_assertions)]
        log::debug!("arm {:?} timer for {} ({:?})", kind, self.element, delay);

        self.hover_timer = Some(HoverTimer::after(kind, self.ctx.now(), delay));
    }

    /// Show the tip if the pointer barely moved since the last sample,
    /// otherwise take a new sample and start the open sequence again.
    fn check_for_intent(&mut self) {
        let settled = {
            let mut session = self.ctx.session.borrow_mut();
            let movement = session.movement_since_sample();
            let settled = movement < self.options.intent_sensitivity;
            if !settled {
                session.rebaseline();
            }

            #[cfg(debug_assertions)]
            log::debug!(
                "intent check for {}: moved {} (sensitivity {}), settled: {}",
                self.element,
                movement,
                self.options.intent_sensitivity,
                settled
            );

            settled
        };

        if settled {
            self.tips.borrow_mut().show_tip(self.element, &self.ctx);
        } else {
            self.show(false, false);
        }
    }
}
