//! Hero power definitions.

use serde::{Deserialize, Serialize};

use super::definition::CardKey;

/// Targeting model of a hero power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerTarget {
    /// No target: the owner draws a card.
    None,
    /// Enemy hero or enemy minion: deals damage.
    EnemyAny,
}

/// Static hero power data, looked up by key like cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPowerDefinition {
    pub key: CardKey,
    pub name: String,
    pub cost: u8,
    pub target: PowerTarget,
}

impl HeroPowerDefinition {
    #[must_use]
    pub fn new(key: impl Into<CardKey>, name: impl Into<String>, cost: u8, target: PowerTarget) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            cost,
            target,
        }
    }

    /// True for powers that deal damage to a chosen enemy.
    #[must_use]
    pub fn is_targeted_damage(&self) -> bool {
        self.target == PowerTarget::EnemyAny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targeted_damage() {
        let ping = HeroPowerDefinition::new("ping", "Ping", 2, PowerTarget::EnemyAny);
        let tap = HeroPowerDefinition::new("tap", "Tap", 2, PowerTarget::None);

        assert!(ping.is_targeted_damage());
        assert!(!tap.is_targeted_damage());
    }
}
