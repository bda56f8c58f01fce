//! Card registry for definition lookup.
//!
//! The data-ingestion layer registers every parsed card once; decks are then
//! assembled from card ids. Definitions are shared by `Arc`, so the same
//! card may appear in both decks (or twice in one) without copying.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::{BattleError, BattleResult};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use card_battle::cards::{CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Ember Fox"));
/// registry.register(CardDefinition::new(CardId::new(2), "Tide Golem"));
///
/// let deck = registry.deck(&[CardId::new(2), CardId::new(1), CardId::new(2)]).unwrap();
/// assert_eq!(deck.len(), 3);
/// assert_eq!(deck[0].name, "Tide Golem");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, Arc::new(card));
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id)
    }

    /// Assemble a deck in the given order.
    ///
    /// Fails on the first id that is not registered.
    pub fn deck(&self, ids: &[CardId]) -> BattleResult<Vec<Arc<CardDefinition>>> {
        ids.iter()
            .map(|id| self.get(*id).cloned().ok_or(BattleError::UnknownCard(*id)))
            .collect()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<CardDefinition>>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Element;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "Test Card"));

        let found = registry.get(CardId::new(1));
        assert_eq!(found.unwrap().name, "Test Card");
        assert!(registry.get(CardId::new(99)).is_none());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "Card A"));
        registry.register(CardDefinition::new(CardId::new(1), "Card B"));
    }

    #[test]
    fn test_deck_preserves_order_and_shares() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "A"));
        registry.register(CardDefinition::new(CardId::new(2), "B"));

        let deck = registry
            .deck(&[CardId::new(2), CardId::new(1), CardId::new(2)])
            .unwrap();

        let names: Vec<_> = deck.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "B"]);
        assert!(Arc::ptr_eq(&deck[0], &deck[2]));
    }

    #[test]
    fn test_deck_unknown_card() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "A"));

        let err = registry.deck(&[CardId::new(1), CardId::new(7)]).unwrap_err();
        assert_eq!(err, BattleError::UnknownCard(CardId::new(7)));
    }

    #[test]
    fn test_find_with_predicate() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "Red").with_element(Element::Red));
        registry.register(CardDefinition::new(CardId::new(2), "Blue").with_element(Element::Blue));

        let reds: Vec<_> = registry.find(|c| c.element == Element::Red).collect();
        assert_eq!(reds.len(), 1);
        assert_eq!(reds[0].name, "Red");
        assert_eq!(registry.iter().count(), 2);
        assert!(registry.contains(CardId::new(2)));
    }
}
