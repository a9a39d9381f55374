mod model_helpers;
mod models;
mod update;
mod grid;
mod bounds;
mod level;
mod session;

pub use models::{BlockReason, Cell, Direction, GameEvent, MoveKind, MoveOutcome, Position, SessionState};
pub use bounds::Bounds;
pub use grid::Grid;
pub use level::{load, InvalidLevel};
pub use model_helpers::{count_crates_on_targets, count_uncovered_targets, is_won};
pub use session::{Session, SessionError};
pub use update::resolve;
