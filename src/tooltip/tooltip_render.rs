use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::tooltip_controller::VisibleTip;
use crate::widgets::popup;

const TOOLTIP_BORDER_HEIGHT: u16 = 2;
const TOOLTIP_BORDER_WIDTH: u16 = 4; // left border + padding + right border + padding
const TOOLTIP_MIN_WIDTH: u16 = 8;
const TOOLTIP_MAX_LINES: usize = 6;

/// Greedy word wrap by display width. Words wider than `max_width` get a
/// line of their own.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    if text.width() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.width() + 1 + word.width() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines.truncate(TOOLTIP_MAX_LINES);
    lines
}

/// Outer size of the popup for `text`, with the popup at most `max_width`
/// columns wide
pub fn tip_size(text: &str, max_width: u16) -> (u16, u16) {
    let max_width = max_width.max(TOOLTIP_MIN_WIDTH);
    let inner_max = (max_width - TOOLTIP_BORDER_WIDTH) as usize;
    let lines = wrap_text(text, inner_max);

    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let width = (content_width as u16 + TOOLTIP_BORDER_WIDTH).clamp(TOOLTIP_MIN_WIDTH, max_width);
    let height = lines.len().max(1) as u16 + TOOLTIP_BORDER_HEIGHT;

    (width, height)
}

/// Draw the visible tip over whatever is underneath
pub fn render_tip(frame: &mut Frame, tip: &VisibleTip) {
    let area = tip.area.intersection(frame.area());
    if area.is_empty() {
        return;
    }

    popup::clear_area(frame, area);

    let inner_width = area.width.saturating_sub(TOOLTIP_BORDER_WIDTH) as usize;
    let lines: Vec<Line> = wrap_text(&tip.text, inner_width)
        .into_iter()
        .map(Line::from)
        .collect();

    let widget = Paragraph::new(Text::from(lines))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Magenta))
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(widget, area);
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
