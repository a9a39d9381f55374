use std::ops::{Add, Mul};
use crate::core::grid::Grid;
use crate::core::models::{Cell, Direction, Position};

impl Cell {
    pub fn from_symbol(symbol: char) -> Cell {
        match symbol {
            '#' => Cell::Wall,
            '.' => Cell::Target,
            '@' => Cell::Mover,
            '+' => Cell::MoverOnTarget,
            'o' => Cell::Crate,
            '*' => Cell::CrateOnTarget,
            _ => Cell::Floor,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => ' ',
            Cell::Target => '.',
            Cell::Mover => '@',
            Cell::MoverOnTarget => '+',
            Cell::Crate => 'o',
            Cell::CrateOnTarget => '*',
        }
    }

    /// true when the cell sits on a goal spot, whatever occupies it
    pub fn is_target(&self) -> bool {
        matches!(self, Cell::Target | Cell::MoverOnTarget | Cell::CrateOnTarget)
    }

    pub fn has_crate(&self) -> bool {
        matches!(self, Cell::Crate | Cell::CrateOnTarget)
    }

    pub fn has_mover(&self) -> bool {
        matches!(self, Cell::Mover | Cell::MoverOnTarget)
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn unit(&self) -> Position {
        match self {
            Direction::Up => Position { row: -1, col: 0 },
            Direction::Down => Position { row: 1, col: 0 },
            Direction::Left => Position { row: 0, col: -1 },
            Direction::Right => Position { row: 0, col: 1 },
        }
    }
}

impl Position {
    pub fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position {
            row: self.row + other.row,
            col: self.col + other.col,
        }
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    fn mul(self, scale: i32) -> Position {
        Position {
            row: self.row * scale,
            col: self.col * scale,
        }
    }
}

/// A level is won once no goal spot is left uncovered by a crate. The mover
/// standing on a goal does not count as covering it.
pub fn is_won(grid: &Grid) -> bool {
    for row in grid.rows() {
        for c in row {
            if *c == Cell::Target || *c == Cell::MoverOnTarget {
                return false;
            }
        }
    }
    true
}

pub fn count_uncovered_targets(grid: &Grid) -> usize {
    grid.iter()
        .filter(|(_, c)| matches!(c, Cell::Target | Cell::MoverOnTarget))
        .count()
}

pub fn count_crates_on_targets(grid: &Grid) -> usize {
    grid.iter()
        .filter(|&(_, c)| c == Cell::CrateOnTarget)
        .count()
}
