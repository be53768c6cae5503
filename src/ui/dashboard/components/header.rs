//! Dashboard header component
//!
//! Renders the government banner, title, clock and staff badge

use super::super::state::DashboardState;
use super::super::utils::ACCENT;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const GOVERNMENT: &str = "தமிழ்நாடு அரசு | Government of Tamil Nadu";
pub const DEPARTMENT: &str =
    "சுகாதாரம் மற்றும் குடும்ப நல துறை | Health & Family Welfare Department";
pub const TITLE: &str = "Hospital Staff Dashboard | மருத்துவமனை பணியாளர் டாஷ்போர்டு";

/// Text of the clock badge, with the time zone when known.
pub fn clock_text(state: &DashboardState) -> String {
    match &state.timezone {
        Some(tz) => format!("🕒 {} ({})", state.clock_label, tz),
        None => format!("🕒 {}", state.clock_label),
    }
}

/// Render header with banner, title and clock.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2)])
        .split(area);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            GOVERNMENT,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DEPARTMENT, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(ACCENT)),
    );
    f.render_widget(banner, header_chunks[0]);

    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(44)])
        .split(header_chunks[1]);

    let title = Paragraph::new(TITLE).style(
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, title_chunks[0]);

    let badges = Paragraph::new(Line::from(vec![
        Span::styled(
            clock_text(state),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("👤 Staff User", Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(badges, title_chunks[1]);
}
