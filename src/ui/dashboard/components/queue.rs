//! OPD queue panel component
//!
//! Renders current and next tokens, queue controls and status

use super::super::model::QueueStatus;
use super::super::state::{DashboardState, Panel};
use super::super::utils::{panel_border, queue_status_color};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

fn control(key: &str, label: &str, enabled: bool, color: Color) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    Span::styled(format!("[{}] {}", key, label), style)
}

/// Render the token display and queue controls.
pub fn render_queue_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let focused = state.focus.panel == Panel::Queue;
    let queue = state.queue();
    let active = queue.is_active();

    let status_text = match queue.status {
        QueueStatus::Active => "Queue Active",
        QueueStatus::Paused => "Queue Paused",
    };

    let lines = vec![
        Line::from(Span::styled(
            "CURRENT TOKEN | தற்போதைய டோக்கன்",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            queue.current_token.to_string(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "NEXT TOKEN | அடுத்த டோக்கன்",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            queue.next_token().to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            control("s", "START QUEUE", !active, Color::Green),
            Span::raw("  "),
            control("p", "PAUSE QUEUE", active, Color::LightRed),
        ]),
        Line::from(control("k", "SKIP TOKEN", true, Color::Red)),
        Line::from(""),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(queue_status_color(queue.status))),
            Span::raw(format!("Status: {}", status_text)),
        ]),
    ];

    let block = Block::default()
        .title("OPD QUEUE | வெளி நோயாளி வரிசை")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border(focused))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
