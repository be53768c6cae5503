//! Doctor status panel component

use super::super::model::DoctorStatus;
use super::super::state::{DashboardState, Panel};
use super::super::utils::{doctor_status_color, panel_border, status_button};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use strum::IntoEnumIterator;

/// Render one block per doctor with its three status buttons.
pub fn render_doctors_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let focused = state.focus.panel == Panel::Doctors;
    let mut lines = Vec::new();

    for (i, doctor) in state.doctors().iter().enumerate() {
        let selected = focused && state.focus.row == i;
        let marker = if selected { "▶ " } else { "  " };
        let mut name_style = Style::default().add_modifier(Modifier::BOLD);
        if selected {
            name_style = name_style.add_modifier(Modifier::UNDERLINED);
        }
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled("● ", Style::default().fg(doctor_status_color(doctor.status))),
            Span::styled(doctor.name.clone(), name_style),
        ]));

        let mut buttons = vec![Span::raw("    ")];
        for status in DoctorStatus::iter() {
            buttons.push(status_button(
                status.label(),
                doctor.status == status,
                doctor_status_color(status),
            ));
            buttons.push(Span::raw(" "));
        }
        lines.push(Line::from(buttons));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title("DOCTOR STATUS | மருத்துவர் நிலை")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border(focused))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
