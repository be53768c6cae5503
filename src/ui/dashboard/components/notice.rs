//! Notification banner component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Render the live notification, or nothing when the slot is empty.
pub fn render_notice(f: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(message) = state.notification() else {
        return;
    };
    let notice = Paragraph::new(Line::from(vec![
        Span::styled(
            "✓ ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(Color::LightGreen)),
    ]))
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(notice, area);
}
