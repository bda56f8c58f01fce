//! Decision policies for units without a human controller.
//!
//! Policies are trait-based so different opponents can be plugged into a
//! `Battle`. `AffordableRandom` is the default: a uniform pick among the
//! skills the unit can pay for.

mod opponent;

pub use opponent::{AffordableRandom, OpponentPolicy};
