use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::{App, Target};
use crate::tooltip::tooltip_render::render_tip;

const HEADER_TEXT: &str = " hovertip: hover a button and hold still ";
const KEY_HINTS: &str = "Tab focus · Enter force open · Esc close · q quit ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.layout(area);
        let (header, body, status) = Self::regions(area);

        frame.render_widget(
            Paragraph::new(HEADER_TEXT).style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            header,
        );

        for target in &self.targets {
            let bounds = target.bounds.intersection(body);
            if bounds.is_empty() {
                continue;
            }
            frame.render_widget(self.target_widget(target), bounds);
        }

        self.render_status(frame, status);

        let visible = self.tips.borrow().visible().cloned();
        if let Some(tip) = visible {
            render_tip(frame, &tip);
        }
    }

    fn target_widget(&self, target: &Target) -> Paragraph<'_> {
        let active = self.ctx.session.borrow().active_element == Some(target.id);
        let border_color = if self.focused == Some(target.id) {
            Color::Yellow
        } else if active {
            Color::Magenta
        } else if self.hovered == Some(target.id) {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        Paragraph::new(target.label.clone())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color)),
            )
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.status_text(),
            Style::default().fg(Color::Black).bg(Color::Gray),
        )];

        match &self.warning {
            Some(warning) => spans.push(Span::styled(
                format!(" {} ", warning),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )),
            None => spans.push(Span::styled(
                format!(" {}", KEY_HINTS),
                Style::default().fg(Color::DarkGray),
            )),
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
