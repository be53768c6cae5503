//! Dashboard main renderer

use super::components::{controls, doctors, footer, header, labs, modal, notice, queue};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(24, 16, 16))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(9),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    notice::render_notice(f, main_chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(main_chunks[2]);

    doctors::render_doctors_panel(f, content_chunks[0], state);
    queue::render_queue_panel(f, content_chunks[1], state);
    labs::render_labs_panel(f, content_chunks[2], state);
    controls::render_controls(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4], state);

    // Drawn last so it sits on top
    modal::render_modal(f, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::state::tests::new_state;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[tokio::test]
    async fn test_renders_seed_state() {
        let (state, _rx) = new_state();
        let text = screen_text(&state);
        assert!(text.contains("Dr. Rajesh Kumar"));
        assert!(text.contains("X-Ray Department"));
        assert!(text.contains("45"));
        assert!(text.contains("46"));
        assert!(text.contains("Equipment: Maintenance"));
        assert!(text.contains("Status: Queue Active"));
    }

    #[tokio::test]
    async fn test_renders_notification_and_modal() {
        let (mut state, _rx) = new_state();
        state.pause_queue();
        state.request_skip();
        let text = screen_text(&state);
        assert!(text.contains("Queue paused"));
        assert!(text.contains("Are you sure you want to skip token 45?"));
        assert!(text.contains("Status: Queue Paused"));
    }
}
