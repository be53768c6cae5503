//! Manual override and patient alert forms

use super::super::options::{
    AFFECTED_DEPARTMENTS, ALERT_TYPES, OVERRIDE_DEPARTMENTS, OVERRIDE_STATUSES, QUICK_MESSAGES,
    SelectOption, label_for,
};
use super::super::state::{AlertRow, DashboardState, OverrideRow, Panel};
use super::super::utils::{ACCENT, panel_border};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn dropdown_line(label: &str, options: &[SelectOption], value: &str, selected: bool) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let shown = label_for(options, value).to_string();
    Line::from(vec![
        Span::styled(format!("{}{:<18}", marker, label), row_style(selected)),
        Span::styled(format!("◀ {} ▶", shown), Style::default().fg(Color::Cyan)),
    ])
}

fn button_line(label: &str, selected: bool, color: Color) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(
            format!("[ {} ]", label),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render the bottom row: override form on the left, alerts on the right.
pub fn render_controls(f: &mut Frame, area: Rect, state: &DashboardState) {
    let outer = Block::default()
        .title("MANUAL OVERRIDE & ALERTS | கைமுறை மேலெழுதல் & எச்சரிக்கைகள்")
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(ACCENT));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    render_override_form(f, chunks[0], state);
    render_alert_form(f, chunks[1], state);
}

fn render_override_form(f: &mut Frame, area: Rect, state: &DashboardState) {
    let focused = state.focus.panel == Panel::Override;
    let row = focused.then(|| state.focus.override_row());
    let draft = state.override_draft();

    let notes_selected = row == Some(OverrideRow::Notes);
    let notes_text = if draft.notes.is_empty() && !notes_selected {
        Span::styled("Enter notes...", Style::default().fg(Color::DarkGray))
    } else if notes_selected {
        Span::styled(format!("{}▏", draft.notes), Style::default().fg(Color::White))
    } else {
        Span::styled(draft.notes.clone(), Style::default().fg(Color::White))
    };

    let lines = vec![
        dropdown_line(
            "Select Department",
            OVERRIDE_DEPARTMENTS,
            &draft.department,
            row == Some(OverrideRow::Department),
        ),
        dropdown_line(
            "Override Status",
            OVERRIDE_STATUSES,
            &draft.status,
            row == Some(OverrideRow::Status),
        ),
        Line::from(vec![
            Span::styled(
                format!(
                    "{}{:<18}",
                    if notes_selected { "▶ " } else { "  " },
                    "Notes (optional)"
                ),
                row_style(notes_selected),
            ),
            notes_text,
        ]),
        Line::from(""),
        button_line(
            "APPLY OVERRIDE",
            row == Some(OverrideRow::Apply),
            Color::Yellow,
        ),
    ];

    let block = Block::default()
        .title("OVERRIDE AI PREDICTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border(focused))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_alert_form(f: &mut Frame, area: Rect, state: &DashboardState) {
    let focused = state.focus.panel == Panel::Alerts;
    let row = focused.then(|| state.focus.alert_row());
    let draft = state.alert_draft();

    let quick_selected = row == Some(AlertRow::QuickMessages);
    let mut quick = vec![Span::styled(
        format!("{}{:<18}", if quick_selected { "▶ " } else { "  " }, "Quick Messages"),
        row_style(quick_selected),
    )];
    for (i, message) in QUICK_MESSAGES.iter().enumerate() {
        let chosen = quick_selected && state.focus.quick_message % QUICK_MESSAGES.len() == i;
        let style = if chosen {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        quick.push(Span::styled(format!("[{}]", message), style));
        quick.push(Span::raw(" "));
    }

    let lines = vec![
        dropdown_line(
            "Alert Type",
            ALERT_TYPES,
            &draft.alert_type,
            row == Some(AlertRow::AlertType),
        ),
        dropdown_line(
            "Affected Dept.",
            AFFECTED_DEPARTMENTS,
            &draft.affected_dept,
            row == Some(AlertRow::AffectedDept),
        ),
        Line::from(quick),
        Line::from(""),
        button_line("SEND SMS ALERT", row == Some(AlertRow::Send), Color::Red),
    ];

    let block = Block::default()
        .title("SEND PATIENT ALERTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border(focused))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
