use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => {
                self.street.handle_mouse(mouse);
            }
            Event::Paste(text) => self.street.paste(&text),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: exit without submitting
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.street.handle_key(key) {
            return;
        }

        // Keys the street input leaves to the form
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}
