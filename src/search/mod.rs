//! Adversarial search over the legal game tree.

pub mod alphabeta;
