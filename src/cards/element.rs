//! Elements and attack types.
//!
//! Three elements form a cyclic advantage triangle:
//!
//! - Blue beats Red
//! - Red beats Green
//! - Green beats Blue
//!
//! An advantaged hit deals ×1.5, the reverse pairing ×0.75, anything else
//! (same element, or an unaligned card) ×1.0.

use serde::{Deserialize, Serialize};

/// Modifier for an advantaged pairing.
pub const ADVANTAGE_MODIFIER: f64 = 1.5;
/// Modifier for a disadvantaged pairing.
pub const DISADVANTAGE_MODIFIER: f64 = 0.75;
/// Modifier for every other pairing.
pub const NEUTRAL_MODIFIER: f64 = 1.0;

/// Card element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Red,
    Blue,
    Green,
    /// Outside the triangle; always neutral.
    #[default]
    Neutral,
}

impl Element {
    /// The element this one has advantage over.
    #[must_use]
    pub const fn beats(self) -> Option<Element> {
        match self {
            Element::Blue => Some(Element::Red),
            Element::Red => Some(Element::Green),
            Element::Green => Some(Element::Blue),
            Element::Neutral => None,
        }
    }

    /// Damage modifier when a unit of this element hits `defender`.
    ///
    /// ```
    /// use card_battle::cards::Element;
    ///
    /// assert_eq!(Element::Blue.modifier_against(Element::Red), 1.5);
    /// assert_eq!(Element::Red.modifier_against(Element::Blue), 0.75);
    /// assert_eq!(Element::Red.modifier_against(Element::Red), 1.0);
    /// ```
    #[must_use]
    pub fn modifier_against(self, defender: Element) -> f64 {
        if self.beats() == Some(defender) {
            ADVANTAGE_MODIFIER
        } else if defender.beats() == Some(self) {
            DISADVANTAGE_MODIFIER
        } else {
            NEUTRAL_MODIFIER
        }
    }
}

/// Which stat pair a unit's damage uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    /// physical_attack against defense.
    #[default]
    Physical,
    /// special_attack against special_defense.
    Special,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advantage_triangle() {
        assert_eq!(Element::Blue.modifier_against(Element::Red), 1.5);
        assert_eq!(Element::Red.modifier_against(Element::Green), 1.5);
        assert_eq!(Element::Green.modifier_against(Element::Blue), 1.5);
    }

    #[test]
    fn test_reverse_pairs() {
        assert_eq!(Element::Red.modifier_against(Element::Blue), 0.75);
        assert_eq!(Element::Green.modifier_against(Element::Red), 0.75);
        assert_eq!(Element::Blue.modifier_against(Element::Green), 0.75);
    }

    #[test]
    fn test_neutral_pairs() {
        for element in [Element::Red, Element::Blue, Element::Green, Element::Neutral] {
            assert_eq!(element.modifier_against(element), 1.0);
            assert_eq!(element.modifier_against(Element::Neutral), 1.0);
            assert_eq!(Element::Neutral.modifier_against(element), 1.0);
        }
    }
}
