//! Roster system: active slots, reserve queue, substitution.
//!
//! - `Roster`: four active slots plus a FIFO reserve per side
//! - `RosterManager`: deploys reserves into slots held by defeated units

mod manager;

pub use manager::{Roster, RosterManager, Substitution, Substitutions};
