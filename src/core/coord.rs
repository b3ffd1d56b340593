use std::ops::{Add, Mul};

use crate::core::board::BOARD_SIZE;

/// A square address, row-major from the top-left corner.
///
/// Row 0 is red's crown row (the row red men advance toward), row 7 is
/// black's. Values outside the grid are representable so a diagonal step can
/// be taken first and bounds-checked after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

/// The 4 diagonal steps around a square.
pub const DIAGONAL_STEPS: [Coord; 4] = [
    Coord { row: -1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 1 },
];
