//! The spatial model: coordinates, pieces, and the board grid.
//!
//! - [`coord`]: integer row/col coordinates and the diagonal step set.
//! - [`piece`]: sides, ranks, symbols, legal directions, promotion.
//! - [`board`]: the 8x8 grid, text parsing/rendering, piece counts.

pub mod board;
pub mod coord;
pub mod piece;
