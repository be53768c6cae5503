//! Snapshot mode execution
//!
//! Prints the freshly seeded dashboard state as JSON, without a terminal UI

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::error::AppError;
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use std::io::Write;
use tokio::sync::mpsc;

/// Serializes the seeded output state. No timers are started.
pub fn render_snapshot(ui_config: UIConfig) -> Result<String, AppError> {
    let (events, _receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let state = DashboardState::new(ui_config, events);
    Ok(serde_json::to_string_pretty(&state.snapshot())?)
}

/// Writes the snapshot to stdout.
pub fn run_snapshot_mode(ui_config: UIConfig) -> Result<(), AppError> {
    let json = render_snapshot(ui_config)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_snapshot_contains_seed_data() {
        let json = render_snapshot(UIConfig::new(Locale::EnGb, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["locale"], "en-GB");
        assert_eq!(value["doctors"].as_array().unwrap().len(), 3);
        assert_eq!(value["labs"][0]["name"], "Blood Test Lab");
        assert_eq!(value["skip_pending"], false);
        assert_eq!(value["alert_pending"], false);
    }
}
