//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use super::model::{DoctorStatus, EquipmentStatus, LabStatus, QueueStatus};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;

/// Accent used for panel borders and titles.
pub const ACCENT: Color = Color::Rgb(185, 28, 28);

/// Get a ratatui color for a doctor's availability
pub fn doctor_status_color(status: DoctorStatus) -> Color {
    match status {
        DoctorStatus::Available => Color::Green,
        DoctorStatus::Busy => Color::LightRed,
        DoctorStatus::NotAvailable => Color::Red,
    }
}

/// Get a ratatui color for a lab's operational status
pub fn lab_status_color(status: LabStatus) -> Color {
    match status {
        LabStatus::Open => Color::Green,
        LabStatus::Busy => Color::LightRed,
        LabStatus::Closed => Color::Red,
    }
}

pub fn queue_status_color(status: QueueStatus) -> Color {
    match status {
        QueueStatus::Active => Color::Green,
        QueueStatus::Paused => Color::LightRed,
    }
}

/// Icon and color for an equipment health indicator
pub fn equipment_indicator(equipment: EquipmentStatus) -> (&'static str, Color) {
    match equipment {
        EquipmentStatus::Working => ("✓", Color::Green),
        EquipmentStatus::Maintenance => ("⚠", Color::Yellow),
        EquipmentStatus::OutOfService => ("✗", Color::Red),
    }
}

/// A bracketed button; the selected one is filled with `color`.
pub fn status_button(label: &str, selected: bool, color: Color) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("[{}]", label), style)
}

/// Border style for a panel, highlighted when it holds focus.
pub fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::LightYellow)
    } else {
        Style::default().fg(ACCENT)
    }
}

/// Rect of `percent_x` width and `height` rows centered in `area`.
pub fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_statuses_share_colors() {
        assert_eq!(
            doctor_status_color(DoctorStatus::Available),
            lab_status_color(LabStatus::Open)
        );
        assert_eq!(
            doctor_status_color(DoctorStatus::NotAvailable),
            lab_status_color(LabStatus::Closed)
        );
        assert_eq!(
            doctor_status_color(DoctorStatus::Busy),
            lab_status_color(LabStatus::Busy)
        );
    }

    #[test]
    fn test_equipment_indicator() {
        assert_eq!(equipment_indicator(EquipmentStatus::Working).0, "✓");
        assert_eq!(equipment_indicator(EquipmentStatus::OutOfService).1, Color::Red);
    }

    #[test]
    fn test_status_button_marks_selection() {
        let on = status_button("Busy", true, Color::LightRed);
        let off = status_button("Busy", false, Color::LightRed);
        assert_eq!(on.content, "[Busy]");
        assert_eq!(on.style.bg, Some(Color::LightRed));
        assert_eq!(off.style.bg, None);
    }
}
