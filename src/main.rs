mod clock;
mod config;
mod consts;
mod error;
mod events;
mod locale;
mod logging;
mod session;
mod ui;

use crate::config::{Config, get_app_dir, get_config_path, resolve_locale};
use crate::locale::Locale;
use crate::session::{run_snapshot_mode, run_tui_mode};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Hospital front-desk staff dashboard
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Clock locale: en-IN, en-US or en-GB
        #[arg(long, value_name = "LOCALE", value_parser = parse_locale)]
        locale: Option<Locale>,

        /// Disable background colors
        #[arg(long)]
        no_background: bool,

        /// Path to the JSON config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Print the initial dashboard state as JSON
    Snapshot {
        /// Clock locale: en-IN, en-US or en-GB
        #[arg(long, value_name = "LOCALE", value_parser = parse_locale)]
        locale: Option<Locale>,

        /// Path to the JSON config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse::<Locale>()
        .map_err(|_| format!("unsupported locale '{}', expected en-IN, en-US or en-GB", s))
}

/// Loads the config from `path`, or from the default location.
fn load_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = match path {
        Some(path) => path,
        None => get_config_path()?,
    };
    Ok(Config::load_or_default(&path)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env_locale = std::env::var("FRONTDESK_LOCALE").ok();
    let args = Args::parse();

    match args.command {
        Command::Start {
            locale,
            no_background,
            config,
        } => {
            let config = load_config(config)?;
            let locale = resolve_locale(locale, env_locale.as_deref(), &config);

            let log_dir = get_app_dir()?.join("logs");
            let _log_guard = logging::init(&log_dir, config.debug_logging)?;

            let ui_config = UIConfig::new(locale, config.with_background_color && !no_background);
            run_tui_mode(ui_config, &log_dir).await
        }
        Command::Snapshot { locale, config } => {
            let config = load_config(config)?;
            let locale = resolve_locale(locale, env_locale.as_deref(), &config);
            run_snapshot_mode(UIConfig::new(locale, config.with_background_color))?;
            Ok(())
        }
    }
}
