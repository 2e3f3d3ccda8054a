use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use std::io;

use super::app_state::App;
use super::mouse_events;

impl App {
    /// Fire due timers, then wait for at most one event until the next
    /// timer is due
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick_timers();

        if event::poll(self.poll_timeout())? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse) => mouse_events::handle_mouse_event(self, mouse),
                Event::Resize(width, height) => self.layout(Rect::new(0, 0, width, height)),
                _ => {}
            }
        }

        self.tick_timers();
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Enter | KeyCode::Char('f') => self.force_open_focused(),
            KeyCode::Esc => self.close_all(),
            _ => {}
        }
    }
}
