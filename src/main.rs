mod app;
mod audio;
mod cli;
mod config;
mod confetti;
mod error;
mod logging;
mod models;
mod navigation;
mod screens;
mod theme;
mod timer;
mod ui;

use std::io::{self, stdout};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand,
    event::{self, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use app::App;
use error::AppError;

/// How long to wait for input before redrawing timers and animations
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("survey-tui: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), AppError> {
    let config = cli::parse_args()?;

    if let Err(err) = logging::init(config.log_dir.as_deref(), &config.settings.log_filter) {
        eprintln!("Warning: logging disabled: {err}");
    }

    let sound = audio::player_for(config.settings.sound);
    let mut app = App::new(config.settings, sound, config.initial_route, Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .and_then(|mut terminal| run(&mut terminal, &mut app));

    let restored = restore_terminal();
    tracing::info!("Exiting");
    finish(result, restored)
}

/// Run every restore step even if an earlier one fails
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    raw.and(screen)
}

/// The run error wins; a restore error is reported only when the run succeeded
fn finish(result: io::Result<()>, restored: io::Result<()>) -> Result<(), AppError> {
    if let (Err(_), Err(restore_err)) = (&result, &restored) {
        tracing::warn!("Failed to restore terminal: {restore_err}");
    }
    result?;
    restored?;
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::render(frame, app, now))?;

        // Handle input
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key, Instant::now());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(msg: &str) -> io::Result<()> {
        Err(io::Error::other(msg.to_string()))
    }

    #[test]
    fn test_finish_ok() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_finish_keeps_run_error_over_restore_error() {
        let err = finish(err("draw failed"), err("raw mode")).unwrap_err();
        assert_eq!(err.to_string(), "terminal error: draw failed");
    }

    #[test]
    fn test_finish_reports_restore_error() {
        let err = finish(Ok(()), err("raw mode")).unwrap_err();
        assert_eq!(err.to_string(), "terminal error: raw mode");
    }
}
