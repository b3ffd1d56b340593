//! Successor generation for one ply.
//!
//! The capture rule is mandatory: if the side to move has any jump anywhere,
//! the legal-move set is exactly the set of maximal jump chains. Simple
//! diagonal steps are generated only when no jump exists for that side.
//!
//! Every successor is an independently owned [`Board`]; the input board is
//! never mutated.

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::piece::Side;

/// All boards reachable by one legal ply for `side`.
///
/// A multi-jump chain contributes a single board (its end state). Distinct
/// chains that happen to end in the same position stay separate candidates.
/// An empty result means `side` has no legal move; that is a valid signal
/// for the search layer, not an error.
pub fn generate_moves(board: &Board, side: Side) -> Vec<Board> {
    let jumps = jump_moves(board, side);
    if !jumps.is_empty() {
        return jumps;
    }
    simple_moves(board, side)
}

/// Maximal jump chains for every piece of `side`, scanned row-major.
pub fn jump_moves(board: &Board, side: Side) -> Vec<Board> {
    let mut out = Vec::new();
    for (at, piece) in board.pieces() {
        if piece.side == side {
            extend_chain(board, at, &mut out);
        }
    }
    out
}

/// Maximal jump chains available to the piece standing at `from`.
pub fn piece_jumps(board: &Board, from: Coord) -> Vec<Board> {
    let mut out = Vec::new();
    extend_chain(board, from, &mut out);
    out
}

/// Pushes every maximal chain continuation for the piece at `at` onto `out`.
///
/// Returns whether at least one immediate capture exists from `at`; a
/// `false` return tells the caller its incoming board was itself maximal.
fn extend_chain(board: &Board, at: Coord, out: &mut Vec<Board>) -> bool {
    let Some(piece) = board.piece_at(at) else {
        return false;
    };
    let mut any = false;
    for &step in piece.directions() {
        let over = at + step;
        let to = at + step * 2;
        // `over` lies between `at` and `to`, so checking `to` covers both.
        if !to.in_bounds() {
            continue;
        }
        let Some(victim) = board.piece_at(over) else {
            continue;
        };
        if victim.side == piece.side || board.piece_at(to).is_some() {
            continue;
        }
        any = true;
        let mut next = board.clone();
        next.set(at, None);
        next.set(over, None);
        next.set(to, Some(piece.landed_at(to)));
        // The recursion reads the landed piece back off the new board, so a
        // man promoted mid-chain continues with king directions.
        if !extend_chain(&next, to, out) {
            out.push(next);
        }
    }
    any
}

/// Non-capturing one-step diagonal moves for every piece of `side`.
///
/// Captures are never detected here; they belong exclusively to the jump
/// path.
pub fn simple_moves(board: &Board, side: Side) -> Vec<Board> {
    let mut out = Vec::new();
    for (at, piece) in board.pieces() {
        if piece.side != side {
            continue;
        }
        for &step in piece.directions() {
            let to = at + step;
            if !to.in_bounds() || board.piece_at(to).is_some() {
                continue;
            }
            let mut next = board.clone();
            next.set(at, None);
            next.set(to, Some(piece.landed_at(to)));
            out.push(next);
        }
    }
    out
}
