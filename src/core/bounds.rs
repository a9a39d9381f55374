use crate::core::models::Position;

/// A bounding box with one corner fixed at 0,0 and assumed to have non-negative extent
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Bounds {
        Bounds { width, height }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.row >= 0 && pos.row < self.height && pos.col >= 0 && pos.col < self.width
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    pub(crate) fn index_of(&self, pos: &Position) -> usize {
        (pos.row * self.width + pos.col) as usize
    }
}
