use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::App;
use crate::autocomplete::SearchPhase;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let input_area = layout[0];
        self.street.render_input(frame, input_area);
        self.render_hidden_id(frame, layout[1]);
        self.render_status_line(frame, layout[3]);

        // Dropdown last so it overlays the fields below the input
        self.street.render_popup(frame, input_area);
    }

    fn render_hidden_id(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Street ID ")
            .border_style(Style::default().fg(Color::DarkGray));

        let content = match self.street.hidden_id() {
            Some(id) => Paragraph::new(id.to_string()).style(Style::default().fg(Color::Green)),
            None => Paragraph::new("(none)").style(Style::default().fg(Color::DarkGray)),
        };

        frame.render_widget(content.block(block), area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let state = match self.street.phase() {
            SearchPhase::Querying { .. } => Span::styled(
                " searching… ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            SearchPhase::Idle => Span::styled(" ready ", Style::default().fg(Color::Green)),
        };

        let line = Line::from(vec![
            state,
            Span::styled(
                format!("{} ", self.source_label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                "│ ↑↓ focus  Enter select/submit  Esc close/quit  Ctrl+C quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
