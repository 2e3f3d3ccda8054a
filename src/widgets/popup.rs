use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Blank out `area` so a floating widget does not show what is underneath
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
