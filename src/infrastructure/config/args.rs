use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "slidedeck",
    version,
    about = "Keyboard-driven slide decks in the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Deck description file (TOML).
    #[arg(value_name = "DECK")]
    pub deck: PathBuf,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Slide shown first. Negative values count from the end.
    #[arg(short, long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Print the rendered presentation tree as JSON and exit.
    #[arg(long)]
    pub dump_json: bool,
}
