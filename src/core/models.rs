use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Wall,
    Floor,
    Target,
    Mover,
    MoverOnTarget,
    Crate,
    CrateOnTarget,
}

/// A grid coordinate. Rows grow downwards, columns grow to the right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    Walk,
    Push,
    CrateCompleted,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BlockReason {
    Wall,
    OutOfBounds,
    CrateStuck,
    /// the given mover position does not hold the mover
    NoMover,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    NewPosition { to: Position, change: MoveKind },
    Blocked(BlockReason),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameEvent {
    Moved,
    /// A `Moved` that also shoved a crate; treat it as `Moved` if the push itself doesn't matter.
    Pushed,
    Blocked(BlockReason),
    CrateCompleted,
    Won,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub enum SessionState {
    #[default]
    Playing,
    Won,
}
