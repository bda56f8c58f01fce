//! Unit identification.
//!
//! Every unit taking part in a battle (active or reserve, either side) gets a
//! `UnitId` when the battle is built. IDs index the battle's unit arena and
//! stay valid for the lifetime of the battle, including after the unit dies.
//!
//! ```
//! use card_battle::core::UnitId;
//!
//! let id = UnitId::new(3);
//! assert_eq!(id.index(), 3);
//! assert_eq!(format!("{}", id), "Unit(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a unit in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a new unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the arena index for this unit.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}
