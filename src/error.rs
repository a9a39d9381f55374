use crate::core::InvalidLevel;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid level: {0}")]
    Level(#[from] InvalidLevel),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not write summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not start logging: {0}")]
    Logger(String),
    #[error("there is no built-in level {0}, pick 1 to {max}", max = crate::config::BUILTIN_LEVEL_COUNT)]
    UnknownBuiltin(usize),
}
