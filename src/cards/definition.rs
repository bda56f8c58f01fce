//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its element,
//! attack type, base stats and skill list. Per-battle state (HP, MP, TU)
//! lives in `Unit`.

use serde::{Deserialize, Serialize};

use super::element::{AttackType, Element};
use super::skill::SkillDescriptor;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Base combat stats of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseStats {
    pub max_hp: i32,
    pub physical_attack: i32,
    pub special_attack: i32,
    pub defense: i32,
    pub special_defense: i32,
    pub speed: i32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            max_hp: 100,
            physical_attack: 10,
            special_attack: 10,
            defense: 10,
            special_defense: 10,
            speed: 10,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_battle::cards::{AttackType, CardDefinition, CardId, Element, SkillDescriptor};
///
/// let card = CardDefinition::new(CardId::new(1), "Frost Knight")
///     .with_element(Element::Blue)
///     .with_attack_type(AttackType::Special)
///     .with_speed(120)
///     .with_skill(SkillDescriptor::damage("Ice Lance", 1.2).with_cost_tu(100));
///
/// assert_eq!(card.stats.speed, 120);
/// assert_eq!(card.skills.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Element for the advantage triangle.
    #[serde(default)]
    pub element: Element,

    /// Stat pair used when this card deals damage.
    #[serde(default)]
    pub attack_type: AttackType,

    /// Base stats.
    #[serde(default)]
    pub stats: BaseStats,

    /// Active skills, in display order.
    #[serde(default)]
    pub skills: Vec<SkillDescriptor>,
}

impl CardDefinition {
    /// Create a new card with default stats and no skills.
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            element: Element::default(),
            attack_type: AttackType::default(),
            stats: BaseStats::default(),
            skills: Vec::new(),
        }
    }

    /// Set the element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Set the attack type (builder pattern).
    #[must_use]
    pub fn with_attack_type(mut self, attack_type: AttackType) -> Self {
        self.attack_type = attack_type;
        self
    }

    /// Replace all base stats (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    /// Set max HP (builder pattern).
    #[must_use]
    pub fn with_max_hp(mut self, max_hp: i32) -> Self {
        self.stats.max_hp = max_hp;
        self
    }

    /// Set speed (builder pattern).
    #[must_use]
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.stats.speed = speed;
        self
    }

    /// Append a skill (builder pattern).
    #[must_use]
    pub fn with_skill(mut self, skill: SkillDescriptor) -> Self {
        self.skills.push(skill);
        self
    }

    /// Offensive stat for this card's attack type.
    #[must_use]
    pub fn attack_stat(&self) -> i32 {
        match self.attack_type {
            AttackType::Physical => self.stats.physical_attack,
            AttackType::Special => self.stats.special_attack,
        }
    }

    /// Defensive stat this card uses against the given attack type.
    #[must_use]
    pub fn defense_against(&self, attack_type: AttackType) -> i32 {
        match attack_type {
            AttackType::Physical => self.stats.defense,
            AttackType::Special => self.stats.special_defense,
        }
    }
}
