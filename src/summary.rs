use std::path::Path;
use serde::Serialize;
use crate::core::{count_crates_on_targets, count_uncovered_targets, Position, Session, SessionState};
use crate::error::AppError;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub level: Option<String>,
    pub moves: u32,
    pub state: SessionState,
    pub won: bool,
    pub mover: Position,
    pub crates_on_targets: usize,
    pub uncovered_targets: usize,
    pub final_grid: Vec<String>,
}

impl SessionSummary {
    pub fn from_session(session: &Session) -> SessionSummary {
        let grid = session.grid();
        SessionSummary {
            level: session.level_name().map(str::to_string),
            moves: session.move_count(),
            state: session.state(),
            won: session.is_won(),
            mover: session.mover(),
            crates_on_targets: count_crates_on_targets(grid),
            uncovered_targets: count_uncovered_targets(grid),
            final_grid: grid.to_level_string().lines().map(str::to_string).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), AppError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
