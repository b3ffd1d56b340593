use std::fmt;

use crate::core::coord::Coord;
use crate::core::piece::{Piece, Rank, Side};
use crate::error::SolverError;

/// Board height and width in squares.
pub const BOARD_SIZE: usize = 8;

/// An 8x8 checkers position.
///
/// A `Board` is a plain value: applying a move clones the grid and edits the
/// copy, so every search node owns its position outright and no aliasing
/// exists across branches.
///
/// The text form is 8 lines of 8 symbols: `.` empty, `r`/`R` red man/king,
/// `b`/`B` black man/king.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The conventional opening position: 12 men per side on the dark
    /// squares, black at the top (rows 0..3), red at the bottom (rows 5..8).
    pub fn standard_start() -> Self {
        let mut board = Board::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 != 1 {
                    continue;
                }
                if row < 3 {
                    board.cells[row][col] = Some(Piece::new(Side::Black, Rank::Man));
                } else if row >= BOARD_SIZE - 3 {
                    board.cells[row][col] = Some(Piece::new(Side::Red, Rank::Man));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        debug_assert!(at.in_bounds());
        self.cells[at.row as usize][at.col as usize]
    }

    #[inline]
    pub fn set(&mut self, at: Coord, cell: Option<Piece>) {
        debug_assert!(at.in_bounds());
        self.cells[at.row as usize][at.col as usize] = cell;
    }

    /// All occupied squares in row-major order. Move generation and
    /// evaluation both rely on this order being deterministic.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Coord::new(row as i32, col as i32), piece))
            })
        })
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }

    /// True once either side has no pieces left.
    pub fn is_terminal(&self) -> bool {
        self.count(Side::Red) == 0 || self.count(Side::Black) == 0
    }

    /// Parses the 8-line text form, failing fast on wrong dimensions or
    /// unknown symbols. Trailing blank lines are tolerated.
    pub fn parse(text: &str) -> Result<Self, SolverError> {
        let mut lines: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if lines.len() != BOARD_SIZE {
            return Err(SolverError::InvalidBoard {
                reason: format!("expected {BOARD_SIZE} rows, found {}", lines.len()),
            });
        }

        let mut board = Board::empty();
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(SolverError::InvalidBoard {
                    reason: format!(
                        "row {row} has {} columns, expected {BOARD_SIZE}",
                        symbols.len()
                    ),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                if symbol == '.' {
                    continue;
                }
                match Piece::from_symbol(symbol) {
                    Some(piece) => board.cells[row][col] = Some(piece),
                    None => {
                        return Err(SolverError::InvalidBoard {
                            reason: format!("illegal symbol {symbol:?} at row {row}, column {col}"),
                        })
                    }
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// 8 lines of 8 symbols, each line newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            for cell in cells {
                write!(f, "{}", cell.map_or('.', Piece::symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display_round_trip() {
        let text = "\
........
..b.B...
........
....r...
........
.R......
........
.......b
";
        let board = Board::parse(text).unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(board.count(Side::Red), 2);
        assert_eq!(board.count(Side::Black), 3);
    }

    #[test]
    fn standard_start_has_twelve_men_per_side() {
        let board = Board::standard_start();
        assert_eq!(board.count(Side::Red), 12);
        assert_eq!(board.count(Side::Black), 12);
        assert!(board
            .pieces()
            .all(|(at, piece)| piece.rank == Rank::Man && (at.row + at.col) % 2 == 1));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert!(matches!(
            Board::parse("........\n"),
            Err(SolverError::InvalidBoard { .. })
        ));
        let nine_wide = format!("{}\n", ".........\n".repeat(BOARD_SIZE));
        assert!(matches!(
            Board::parse(&nine_wide),
            Err(SolverError::InvalidBoard { .. })
        ));
    }
}
