//! Dashboard footer component
//!
//! Renders the key hints for the focused panel

use super::super::state::{DashboardState, Panel};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hints for whatever currently has focus.
pub fn footer_text(state: &DashboardState) -> String {
    if state.pending_confirmation().is_some() {
        return "[Y/Enter] Confirm | [N/Esc] Cancel".to_string();
    }
    let panel_hint = match state.focus.panel {
        Panel::Doctors => "[↑↓] Doctor  [1] Available [2] Busy [3] Not Avail.",
        Panel::Labs => "[↑↓] Lab  [1] Open [2] Busy [3] Closed",
        Panel::Queue => "[S] Start [P] Pause [K] Skip",
        Panel::Override if state.focus.is_editing_notes() => "Type notes  [Enter/Esc] Done",
        Panel::Override => "[↑↓] Field  [←→] Choose  [Enter] Apply",
        Panel::Alerts => "[↑↓] Field  [←→] Choose  [Enter] Send",
    };
    format!("[Tab] Panel | {} | [Q] Quit", panel_hint)
}

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer = Paragraph::new(footer_text(state))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
