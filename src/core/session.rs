use log::{debug, error, info};
use crate::core::grid::Grid;
use crate::core::level::{load, InvalidLevel};
use crate::core::model_helpers::is_won;
use crate::core::models::{Direction, GameEvent, MoveKind, MoveOutcome, Position, SessionState};
use crate::core::update::resolve;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("the level is already won, no further moves are accepted")]
    AlreadyWon,
}

/// One play-through of a level: the grid, where the mover stands, how many
/// moves have been submitted and whether the level has been won.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    mover: Position,
    moves: u32,
    state: SessionState,
    level_text: String,
    level_name: Option<String>,
}

impl Session {
    pub fn load(text: &str) -> Result<Session, InvalidLevel> {
        let (grid, mover) = load(text)?;
        info!("loaded level {}x{}, mover at ({}, {})", grid.width(), grid.height(), mover.row, mover.col);
        Ok(Session {
            grid,
            mover,
            moves: 0,
            state: SessionState::Playing,
            level_text: text.to_string(),
            level_name: None,
        })
    }

    pub fn load_named(name: impl Into<String>, text: &str) -> Result<Session, InvalidLevel> {
        let mut session = Session::load(text)?;
        session.level_name = Some(name.into());
        Ok(session)
    }

    /// Submits one move. Every submission counts towards the move total, blocked
    /// ones included, until the level is won.
    pub fn submit_move(&mut self, direction: Direction) -> Result<GameEvent, SessionError> {
        if self.state == SessionState::Won {
            return Err(SessionError::AlreadyWon);
        }
        self.moves += 1;

        let event = match resolve(&mut self.grid, self.mover, direction) {
            MoveOutcome::Blocked(reason) => {
                debug!("move {} {:?}: blocked ({:?})", self.moves, direction, reason);
                GameEvent::Blocked(reason)
            }
            MoveOutcome::NewPosition { to, change } => {
                debug!("move {} {:?}: {:?} to ({}, {})", self.moves, direction, change, to.row, to.col);
                self.mover = to;
                if is_won(&self.grid) {
                    info!("level won in {} moves", self.moves);
                    self.state = SessionState::Won;
                    GameEvent::Won
                } else {
                    match change {
                        MoveKind::Walk => GameEvent::Moved,
                        MoveKind::Push => GameEvent::Pushed,
                        MoveKind::CrateCompleted => GameEvent::CrateCompleted,
                    }
                }
            }
        };
        Ok(event)
    }

    /// Swaps in a new, unnamed level and starts over. The session is left
    /// unchanged if the text does not parse.
    pub fn reset(&mut self, text: &str) -> Result<(), InvalidLevel> {
        self.replace_level(text)?;
        self.level_name = None;
        Ok(())
    }

    /// Starts the current level over from its original layout, keeping its name.
    pub fn restart(&mut self) {
        let text = std::mem::take(&mut self.level_text);
        // the text parsed when the session was created, so it parses again
        if let Err(err) = self.replace_level(&text) {
            error!("failed to restart level: {}", err);
            self.level_text = text;
        }
    }

    fn replace_level(&mut self, text: &str) -> Result<(), InvalidLevel> {
        let (grid, mover) = load(text)?;
        info!("starting level over after {} moves", self.moves);
        self.grid = grid;
        self.mover = mover;
        self.moves = 0;
        self.state = SessionState::Playing;
        self.level_text = text.to_string();
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mover(&self) -> Position {
        self.mover
    }

    pub fn move_count(&self) -> u32 {
        self.moves
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }

    pub fn level_name(&self) -> Option<&str> {
        self.level_name.as_deref()
    }

    pub fn level_text(&self) -> &str {
        &self.level_text
    }
}
