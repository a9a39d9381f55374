use crate::core::bounds::Bounds;
use crate::core::models::{Cell, Position};

/// Rectangular cell storage for one level. The shape is fixed once built,
/// only the cells change.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from rows of cells, padding short rows with `Floor`.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let bounds = Bounds::new(width as i32, rows.len() as i32);
        let mut cells = Vec::with_capacity(bounds.area() as usize);
        for mut row in rows {
            row.resize(width, Cell::Floor);
            cells.extend(row);
        }
        Grid { bounds, cells }
    }

    pub fn size(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn get(&self, pos: &Position) -> Option<Cell> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks panics on zero, and a zero-width grid has no rows worth yielding
        self.cells.chunks(self.bounds.width.max(1) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let width = self.bounds.width.max(1);
        self.cells.iter().enumerate().map(move |(index, &cell)| {
            let index = index as i32;
            (Position { row: index / width, col: index % width }, cell)
        })
    }
}

impl std::ops::Index<&Position> for Grid {
    type Output = Cell;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.cells[self.bounds.index_of(index)]
    }
}

impl std::ops::IndexMut<&Position> for Grid {
    fn index_mut(&mut self, index: &Position) -> &mut Self::Output {
        let index = self.bounds.index_of(index);
        &mut self.cells[index]
    }
}
