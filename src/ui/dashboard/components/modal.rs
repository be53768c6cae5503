//! Confirmation popup component
//!
//! Drawn over the dashboard while a skip or alert needs confirming

use super::super::confirm::ConfirmAction;
use super::super::state::DashboardState;
use super::super::utils::centered;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Title, question and confirm-button label for a pending action.
pub fn prompt(state: &DashboardState, action: ConfirmAction) -> (&'static str, String, &'static str) {
    match action {
        ConfirmAction::SkipToken => (
            "Confirm Skip Token",
            format!(
                "Are you sure you want to skip token {}?",
                state.queue().current_token
            ),
            "Confirm Skip",
        ),
        ConfirmAction::SendAlert => (
            "Confirm Send SMS",
            format!(
                "Send alert \"{}\" to all affected patients?",
                state.alert_draft().alert_type
            ),
            "Send SMS",
        ),
    }
}

/// Render the confirmation popup if one is pending.
pub fn render_modal(f: &mut Frame, state: &DashboardState) {
    let Some(action) = state.pending_confirmation() else {
        return;
    };
    let (title, question, confirm_label) = prompt(state, action);
    let area = centered(f.area(), 50, 9);

    let lines = vec![
        Line::from(Span::styled(
            question,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[N] Cancel", Style::default().fg(Color::Gray)),
            Span::raw("    "),
            Span::styled(
                format!("[Y] {}", confirm_label),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::uniform(1));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
