//! Turn-order clock.
//!
//! The `Scheduler` normalizes TU across both active rosters, picks the next
//! actor, and builds the timeline preview shown to players.

mod scheduler;

pub use scheduler::Scheduler;
