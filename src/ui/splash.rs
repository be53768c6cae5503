//! Splash screen shown while the dashboard starts.

use crate::ui::dashboard::components::header::{DEPARTMENT, GOVERNMENT};
use crate::ui::dashboard::utils::{ACCENT, centered};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const LOGO: [&str; 6] = [
    " ██████╗  ██████╗  ██████╗ ",
    "██╔═══██╗ ██╔══██╗ ██╔══██╗",
    "██║   ██║ ██████╔╝ ██║  ██║",
    "██║   ██║ ██╔═══╝  ██║  ██║",
    "╚██████╔╝ ██║      ██████╔╝",
    " ╚═════╝  ╚═╝      ╚═════╝ ",
];

const HINT: &str = "Press any key to continue, q to quit";

pub fn render_splash(f: &mut Frame) {
    let logo_style = Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::styled(*row, logo_style))
        .collect();

    lines.push(Line::default());
    lines.push(Line::styled(
        GOVERNMENT,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(DEPARTMENT, Style::default().fg(Color::Gray)));
    lines.push(Line::styled(
        format!("OPD front desk v{}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(Color::LightYellow).add_modifier(Modifier::ITALIC),
    ));
    lines.push(Line::default());
    lines.push(Line::styled(HINT, Style::default().fg(Color::DarkGray)));

    // Two border rows around the content
    let height = lines.len() as u16 + 2;
    let area = centered(f.area(), 80, height);

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT)),
    );
    f.render_widget(card, area);
}
