use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use log::LevelFilter;
use crate::error::AppError;
use crate::levels::{builtin, read_level_file};

pub use crate::levels::BUILTIN_LEVEL_COUNT;

pub const DEFAULT_LOG_FILE: &str = "log.log";
pub const INPUT_POLL: Duration = Duration::from_millis(50);

/// Terminal Sokoban. W/A/S/D or arrows to move, R to restart, Q to quit.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Level file to play
    #[arg(long, conflicts_with = "builtin")]
    pub level: Option<PathBuf>,
    /// Built-in level number
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=BUILTIN_LEVEL_COUNT as i64))]
    pub builtin: Option<u8>,
    /// Where log output goes; truncated on start
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
    /// Write a JSON summary of the session here on exit
    #[arg(long)]
    pub summary_out: Option<PathBuf>,
    /// Print the level and exit without starting the terminal UI
    #[arg(long)]
    pub print: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelSource {
    File(PathBuf),
    Builtin(usize),
}

impl Cli {
    pub fn level_source(&self) -> LevelSource {
        match (&self.level, self.builtin) {
            (Some(path), _) => LevelSource::File(path.clone()),
            (None, Some(number)) => LevelSource::Builtin(number as usize),
            (None, None) => LevelSource::Builtin(1),
        }
    }
}

impl LevelSource {
    /// Returns the level's display name and its text.
    pub fn read(&self) -> Result<(String, String), AppError> {
        match self {
            LevelSource::File(path) => {
                let text = read_level_file(path)?;
                let name = path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Ok((name, text))
            }
            LevelSource::Builtin(number) => {
                let level = builtin(*number).ok_or(AppError::UnknownBuiltin(*number))?;
                Ok((level.name.to_string(), level.text.to_string()))
            }
        }
    }
}
