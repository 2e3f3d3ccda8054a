//! Mouse event dispatcher
//!
//! Feeds every pointer position to the session and turns target
//! enter/leave transitions into display controller calls.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::hover::ElementId;
use crate::layout::target_at;

/// Handle mouse events by tracking the pointer and routing hover changes
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    app.ctx
        .session
        .borrow_mut()
        .track_pointer(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let target = target_at(&app.hit_targets(), mouse.column, mouse.row);
            handle_hover(app, target);
        }
        _ => {}
    }
}

/// Leaving a target starts its delayed close; entering one starts the
/// intent-checked open. A forced-open tip stays up when the pointer leaves.
pub fn handle_hover(app: &mut App, target: Option<ElementId>) {
    if app.hovered == target {
        return;
    }

    let leaving = app
        .hovered
        .filter(|id| !app.ctx.hovers.borrow().is_forced_open(*id));
    if let Some(controller) = leaving.and_then(|id| app.controller_mut(id)) {
        controller.hide(false);
    }
    if let Some(controller) = target.and_then(|id| app.controller_mut(id)) {
        controller.show(false, false);
    }

    app.hovered = target;
}
