//! Legal-move rules: mandatory captures, maximal chains, promotion.

pub mod movegen;
