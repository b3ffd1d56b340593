//! A forced-line solver for 8x8 checkers.
//!
//! Move generation enforces the mandatory-capture rule and maximal
//! multi-jump chains; move selection is depth-limited minimax with
//! alpha-beta pruning. The [`game`] module plays a position forward until
//! one side runs out of pieces (or a guard fires) and records every
//! intermediate board.

pub mod core;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod trace;
