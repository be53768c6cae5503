//! Lab status panel component

use super::super::model::LabStatus;
use super::super::state::{DashboardState, Panel};
use super::super::utils::{equipment_indicator, lab_status_color, panel_border, status_button};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use strum::IntoEnumIterator;

/// Render each lab with its status buttons and equipment line.
pub fn render_labs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let focused = state.focus.panel == Panel::Labs;
    let mut lines = Vec::new();

    for (i, lab) in state.labs().iter().enumerate() {
        let selected = focused && state.focus.row == i;
        let marker = if selected { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(lab.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]));

        let mut buttons = vec![Span::raw("    ")];
        for status in LabStatus::iter() {
            buttons.push(status_button(
                status.label(),
                lab.status == status,
                lab_status_color(status),
            ));
            buttons.push(Span::raw(" "));
        }
        lines.push(Line::from(buttons));

        let (icon, color) = equipment_indicator(lab.equipment);
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::styled(
                format!("Equipment: {}", lab.equipment.label()),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title("LAB STATUS | ஆய்வக நிலை")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border(focused))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
