//! Heuristic position scoring, red-positive / black-negative.
//!
//! The weights below are fixed policy, not configuration. Every term is an
//! additive contribution to one scalar; the sign follows the piece's side
//! except for the terminal shortcut, which follows the side that ran out of
//! pieces.

use crate::core::board::{Board, BOARD_SIZE};
use crate::core::coord::DIAGONAL_STEPS;
use crate::core::piece::{Rank, Side};
use crate::rules::movegen::piece_jumps;

/// Magnitude returned once a side has no pieces left.
pub const TERMINAL_SCORE: f64 = 10.0;

const MAN_VALUE: f64 = 1.0;
const KING_VALUE: f64 = 3.0;
const CENTER_CONTROL_BONUS: f64 = 0.5;
const ADVANCE_BONUS: f64 = 1.0;
const EDGE_SAFETY_BONUS: f64 = 0.2;
const CHAIN_JUMP_BONUS: f64 = 1.0;
const ADVANCEMENT_PER_ROW: f64 = 0.5;
const PRESSING_PER_ROW: f64 = 0.2;
const ADJACENCY_BONUS: f64 = 0.3;

/// Heuristic value of `board` with `to_move` next to act.
///
/// Positive favors red, negative favors black. A board where one side has
/// zero pieces short-circuits to ±[`TERMINAL_SCORE`] regardless of the
/// remaining material.
///
/// The chain-jump term depends on `to_move`: only pieces of the side to
/// move are credited for their currently available jump chains. The
/// adjacency term deliberately counts both halves of an adjacent opposing
/// pair, once for each side.
pub fn evaluate(board: &Board, to_move: Side) -> f64 {
    let red = board.count(Side::Red);
    let black = board.count(Side::Black);
    if red == 0 {
        return -TERMINAL_SCORE;
    }
    if black == 0 {
        return TERMINAL_SCORE;
    }

    let last = BOARD_SIZE as i32 - 1;
    let mut score = 0.0;
    for (at, piece) in board.pieces() {
        let sign = match piece.side {
            Side::Red => 1.0,
            Side::Black => -1.0,
        };

        score += sign
            * match piece.rank {
                Rank::Man => MAN_VALUE,
                Rank::King => KING_VALUE,
            };

        if (2..=5).contains(&at.row) && (2..=5).contains(&at.col) {
            score += sign * CENTER_CONTROL_BONUS;
        }

        if piece.rank == Rank::Man {
            let advanced = match piece.side {
                Side::Red => at.row <= 2,
                Side::Black => at.row >= 5,
            };
            if advanced {
                score += sign * ADVANCE_BONUS;
            }
        }

        if at.row == 0 || at.row == last || at.col == 0 || at.col == last {
            score += sign * EDGE_SAFETY_BONUS;
        }

        if piece.side == to_move {
            let chains = piece_jumps(board, at).len();
            score += sign * CHAIN_JUMP_BONUS * chains as f64;
        }

        let advancement = match piece.side {
            Side::Red => last - at.row,
            Side::Black => at.row,
        } as f64;
        score += sign * ADVANCEMENT_PER_ROW * advancement;

        let (own, other) = match piece.side {
            Side::Red => (red, black),
            Side::Black => (black, red),
        };
        if own > other {
            score += sign * PRESSING_PER_ROW * advancement;
        }

        for step in DIAGONAL_STEPS {
            let neighbor = at + step;
            if !neighbor.in_bounds() {
                continue;
            }
            if let Some(other_piece) = board.piece_at(neighbor) {
                if other_piece.side != piece.side {
                    score += sign * ADJACENCY_BONUS;
                }
            }
        }
    }
    score
}
