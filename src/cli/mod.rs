//! CLI argument parsing for the survey TUI.

mod args;

pub use args::parse_args;
