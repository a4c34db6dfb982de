//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::error::AppError;
use crate::navigation::Route;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "survey-tui", version)]
#[command(about = "Guest survey in the terminal, behind a mock login")]
pub struct CliArgs {
    /// Settings file (default: <config dir>/survey-tui/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Location to open first; `/` redirects to login unless it carries fromLogin=true
    #[arg(short, long, default_value = "/")]
    pub route: String,

    /// Start every category unrated instead of at Excellent
    #[arg(long)]
    pub start_unrated: bool,

    /// Disable cue sounds
    #[arg(short, long)]
    pub mute: bool,

    /// Directory for log files (default: <data dir>/survey-tui/logs)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Configuration resolved from CLI arguments and the settings file
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: Settings,
    pub initial_route: Route,
    pub log_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Merge with the settings file; flags win over file values
    pub fn resolve(self) -> Result<CliConfig, AppError> {
        let mut settings = match self.config.or_else(Settings::default_path) {
            Some(path) => Settings::load(&path)?,
            None => Settings::default(),
        };
        if self.start_unrated {
            settings.start_unrated = true;
        }
        if self.mute {
            settings.sound = false;
        }
        let initial_route = Route::parse(&self.route)?;

        Ok(CliConfig {
            settings,
            initial_route,
            log_dir: self.log_dir,
        })
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> Result<CliConfig, AppError> {
    CliArgs::parse().resolve()
}
