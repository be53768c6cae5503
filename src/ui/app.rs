//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, timing};
use crate::events::DashboardEvent;
use crate::locale::Locale;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::input::{KeyOutcome, handle_key, handle_splash_key};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event};
use log::info;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub locale: Locale,
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(locale: Locale, with_background_color: bool) -> Self {
        Self {
            locale,
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Front-desk dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from timer tasks.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Handed to each dashboard for its timer tasks.
    event_sender: mpsc::Sender<DashboardEvent>,

    /// Display settings for the dashboard.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        Self {
            current_screen: Screen::Splash,
            event_receiver,
            event_sender,
            ui_config,
        }
    }

    /// Leaves the splash screen and mounts a freshly seeded dashboard.
    pub fn open_dashboard(&mut self) {
        let mut state = DashboardState::new(self.ui_config.clone(), self.event_sender.clone());
        state.mount();
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Feeds queued timer events into the dashboard.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut self.current_screen {
                state.handle_event(event);
            }
        }
    }

    /// Tears down the current screen, stopping its timers.
    pub fn close(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.unmount();
        }
        self.current_screen = Screen::Splash;
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.current_screen
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = timing::splash();

    // UI event loop
    loop {
        // Apply everything the timer tasks have posted
        app.drain_events();

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(timing::input_poll())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if handle_splash_key(key) == KeyOutcome::Quit {
                            break;
                        }
                        // Any other key skips the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        if handle_key(state, key) == KeyOutcome::Quit {
                            break;
                        }
                    }
                }
            }
        }

        // Let timer tasks run between frames
        tokio::task::yield_now().await;
    }

    info!("Leaving dashboard");
    app.close();
    Ok(())
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
