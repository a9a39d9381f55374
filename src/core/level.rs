use crate::core::grid::Grid;
use crate::core::models::{Cell, Position};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidLevel {
    #[error("level text is empty")]
    Empty,
    #[error("level has no mover ('@' or '+')")]
    NoMover,
    #[error("level has more than one mover, at ({}, {}) and ({}, {})", first.row, first.col, second.row, second.col)]
    MultipleMovers { first: Position, second: Position },
}

/// Parses level text into a rectangular grid and the mover's starting position.
///
/// Every line is one row, including blank ones. Rows shorter than the longest
/// line are padded with floor.
pub fn load(text: &str) -> Result<(Grid, Position), InvalidLevel> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut mover: Option<Position> = None;

    for (i, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for (j, ch) in line.chars().enumerate() {
            let c = Cell::from_symbol(ch);
            if c.has_mover() {
                let pos = Position::new(i as i32, j as i32);
                if let Some(first) = mover {
                    return Err(InvalidLevel::MultipleMovers { first, second: pos });
                }
                mover = Some(pos);
            }
            row.push(c);
        }
        rows.push(row);
    }

    if rows.iter().all(|row| row.is_empty()) {
        return Err(InvalidLevel::Empty);
    }
    let mover = mover.ok_or(InvalidLevel::NoMover)?;

    Ok((Grid::from_rows(rows), mover))
}

impl Grid {
    pub fn to_level_string(&self) -> String {
        let mut result = String::new();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                result.push('\n');
            }
            result.extend(row.iter().map(Cell::symbol));
        }
        result
    }
}
