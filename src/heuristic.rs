use core::fmt;
use grid_util::point::Point;

use crate::{Cost, COST_PER_UNIT, GRID_WIDTH, SQUARE_SIZE};

/// A grid cell encoded as `row * 10 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(pub u32);

impl Square {
    pub fn new(row: u32, col: u32) -> Square {
        Square(row * GRID_WIDTH + col)
    }
    pub fn row(self) -> u32 {
        self.0 / GRID_WIDTH
    }
    pub fn col(self) -> u32 {
        self.0 % GRID_WIDTH
    }
    /// Position on the grid with `x` as the column and `y` as the row.
    pub fn point(self) -> Point {
        Point::new(self.col() as i32, self.row() as i32)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Square {
    fn from(id: u32) -> Square {
        Square(id)
    }
}

/// Lower bound on the cost of travelling from `current` to `goal`.
///
/// Squares have physical extent, so a delta of one (or zero) along an axis leaves no whole
/// square in between; each delta is reduced by one before being scaled to distance units.
/// The Euclidean norm of the two scaled deltas is then converted to edge-weight scale. The
/// result is zero exactly when the squares are identical or touch, including diagonally.
pub fn calculate_heuristic(current: Square, goal: Square) -> Cost {
    let (p1, p2) = (current.point(), goal.point());
    let delta_x = ((p1.x - p2.x).abs() - 1).max(0) as f64 * SQUARE_SIZE as f64;
    let delta_y = ((p1.y - p2.y).abs() - 1).max(0) as f64 * SQUARE_SIZE as f64;
    (delta_x * delta_x + delta_y * delta_y).sqrt() * COST_PER_UNIT
}
