//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card and hero power definition a match
//! can reference. It is built once, then shared read-only with the reducer
//! and the AI; nothing in the engine mutates it.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::warn;

use super::definition::{CardDefinition, CardKey};
use super::hero_power::HeroPowerDefinition;

/// Errors raised while building a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("card `{0}` is already registered")]
    DuplicateCard(CardKey),
    #[error("hero power `{0}` is already registered")]
    DuplicateHeroPower(CardKey),
    #[error("minion `{0}` needs positive health")]
    NonPositiveHealth(CardKey),
}

/// Registry of card and hero power definitions.
///
/// ## Example
///
/// ```
/// use rust_duel::cards::{CardDefinition, CardKey, CardRegistry, SpellTarget};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::spell("bolt", "Bolt", 1, SpellTarget::EnemyAny))
///     .unwrap();
///
/// let found = registry.get(&CardKey::from("bolt")).unwrap();
/// assert_eq!(found.name, "Bolt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardKey, CardDefinition>,
    hero_powers: FxHashMap<CardKey, HeroPowerDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from card and hero power definitions.
    pub fn from_definitions(
        cards: impl IntoIterator<Item = CardDefinition>,
        hero_powers: impl IntoIterator<Item = HeroPowerDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        for power in hero_powers {
            registry.register_hero_power(power)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Minions must carry positive health so a summon never lands dead.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), RegistryError> {
        if card.is_minion() && !card.health.is_some_and(|h| h > 0) {
            return Err(RegistryError::NonPositiveHealth(card.key));
        }
        if self.cards.contains_key(&card.key) {
            return Err(RegistryError::DuplicateCard(card.key));
        }
        self.cards.insert(card.key.clone(), card);
        Ok(())
    }

    /// Register a hero power definition.
    pub fn register_hero_power(&mut self, power: HeroPowerDefinition) -> Result<(), RegistryError> {
        if self.hero_powers.contains_key(&power.key) {
            return Err(RegistryError::DuplicateHeroPower(power.key));
        }
        self.hero_powers.insert(power.key.clone(), power);
        Ok(())
    }

    /// Get a card definition by key.
    #[must_use]
    pub fn get(&self, key: &CardKey) -> Option<&CardDefinition> {
        self.cards.get(key)
    }

    /// Get a hero power definition by key.
    #[must_use]
    pub fn hero_power(&self, key: &CardKey) -> Option<&HeroPowerDefinition> {
        self.hero_powers.get(key)
    }

    /// Check if a card key is registered.
    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.cards.contains_key(key)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Check a decklist against the registry.
    ///
    /// Logs a warning for every key that is not registered and returns those
    /// keys. Gameplay stays total either way: drawing an unknown card just
    /// leaves a card in hand that can never be played.
    pub fn validate_deck(&self, deck_name: &str, deck: &[CardKey]) -> Vec<CardKey> {
        let mut missing = Vec::new();
        for key in deck {
            if !self.contains(key) {
                warn!(deck = deck_name, card = %key, "decklist references unknown card");
                missing.push(key.clone());
            }
        }
        missing
    }
}
