use std::fmt;

use serde::Serialize;

use crate::core::board::BOARD_SIZE;
use crate::core::coord::Coord;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Black,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// The row a man of this side promotes on.
    #[inline]
    pub fn crown_row(self) -> i32 {
        match self {
            Side::Red => 0,
            Side::Black => BOARD_SIZE as i32 - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => f.write_str("red"),
            Side::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board: which player owns it and whether it is crowned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

const RED_MAN_STEPS: [Coord; 2] = [Coord::new(-1, 1), Coord::new(-1, -1)];
const BLACK_MAN_STEPS: [Coord; 2] = [Coord::new(1, 1), Coord::new(1, -1)];
const RED_KING_STEPS: [Coord; 4] = [
    Coord::new(-1, 1),
    Coord::new(-1, -1),
    Coord::new(1, 1),
    Coord::new(1, -1),
];
const BLACK_KING_STEPS: [Coord; 4] = [
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(-1, -1),
];

impl Piece {
    #[inline]
    pub const fn new(side: Side, rank: Rank) -> Self {
        Self { side, rank }
    }

    pub fn symbol(self) -> char {
        match (self.side, self.rank) {
            (Side::Red, Rank::Man) => 'r',
            (Side::Red, Rank::King) => 'R',
            (Side::Black, Rank::Man) => 'b',
            (Side::Black, Rank::King) => 'B',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'r' => Some(Piece::new(Side::Red, Rank::Man)),
            'R' => Some(Piece::new(Side::Red, Rank::King)),
            'b' => Some(Piece::new(Side::Black, Rank::Man)),
            'B' => Some(Piece::new(Side::Black, Rank::King)),
            _ => None,
        }
    }

    /// Steps this piece may move and capture along, in generation order.
    ///
    /// Men step toward the opponent's home row only; kings step along all
    /// four diagonals, forward pair first.
    pub fn directions(self) -> &'static [Coord] {
        match (self.side, self.rank) {
            (Side::Red, Rank::Man) => &RED_MAN_STEPS,
            (Side::Black, Rank::Man) => &BLACK_MAN_STEPS,
            (Side::Red, Rank::King) => &RED_KING_STEPS,
            (Side::Black, Rank::King) => &BLACK_KING_STEPS,
        }
    }

    /// The piece as it stands after landing on `at`: a man reaching its
    /// crown row comes back a king, in the same board-construction step.
    #[inline]
    pub fn landed_at(self, at: Coord) -> Piece {
        if self.rank == Rank::Man && at.row == self.side.crown_row() {
            Piece::new(self.side, Rank::King)
        } else {
            self
        }
    }
}
