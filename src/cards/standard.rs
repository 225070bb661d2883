//! Built-in card set and starter deck.
//!
//! Covers every keyword, every spell targeting class, the draw deathrattle
//! and both hero power models, so a default match exercises the whole rule
//! set.

use super::definition::{CardDefinition, CardKey, Deathrattle, Keyword, SpellTarget};
use super::hero_power::{HeroPowerDefinition, PowerTarget};
use super::registry::{CardRegistry, RegistryError};

/// Hero power: pay 2, draw a card.
pub const LIFE_TAP: &str = "life_tap";
/// Hero power: pay 2, deal damage to an enemy.
pub const FIREBLAST: &str = "fireblast";

/// Every card in the built-in set.
#[must_use]
pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::minion("spark_imp", "Spark Imp", 1, 1, 2),
        CardDefinition::minion("river_croc", "River Croc", 2, 2, 3),
        CardDefinition::minion("stonehide_guard", "Stonehide Guard", 2, 1, 4)
            .with_keyword(Keyword::Taunt),
        CardDefinition::minion("shade_stalker", "Shade Stalker", 2, 3, 1)
            .with_keyword(Keyword::Stealth),
        CardDefinition::minion("loot_hoarder", "Loot Hoarder", 2, 2, 1)
            .with_deathrattle(Deathrattle::DrawCard),
        CardDefinition::minion("bloodfang", "Bloodfang", 3, 3, 2).with_keyword(Keyword::Lifesteal),
        CardDefinition::minion("aegis_knight", "Aegis Knight", 3, 2, 3).with_keyword(Keyword::Shield),
        CardDefinition::minion("veil_wraith", "Veil Wraith", 3, 2, 3).with_keyword(Keyword::Cloaked),
        CardDefinition::minion("iron_sentinel", "Iron Sentinel", 4, 3, 5)
            .with_keyword(Keyword::Resilient),
        CardDefinition::minion("ogre_brute", "Ogre Brute", 5, 5, 5),
        CardDefinition::minion("ancient_warden", "Ancient Warden", 6, 4, 7)
            .with_keyword(Keyword::Taunt)
            .with_keyword(Keyword::Shield),
        CardDefinition::spell("arcane_bolt", "Arcane Bolt", 1, SpellTarget::EnemyAny),
        CardDefinition::spell("mend", "Mend", 1, SpellTarget::FriendlyMinion),
        CardDefinition::spell("flare", "Flare", 1, SpellTarget::AnyMinion),
        CardDefinition::spell("war_drums", "War Drums", 1, SpellTarget::None),
    ]
}

/// Both hero powers.
#[must_use]
pub fn hero_powers() -> Vec<HeroPowerDefinition> {
    vec![
        HeroPowerDefinition::new(LIFE_TAP, "Life Tap", 2, PowerTarget::None),
        HeroPowerDefinition::new(FIREBLAST, "Fireblast", 2, PowerTarget::EnemyAny),
    ]
}

/// Registry holding the built-in set.
pub fn registry() -> Result<CardRegistry, RegistryError> {
    CardRegistry::from_definitions(cards(), hero_powers())
}

/// Twenty-card starter deck: two copies of ten cards.
#[must_use]
pub fn starter_deck() -> Vec<CardKey> {
    const LIST: [&str; 10] = [
        "spark_imp",
        "river_croc",
        "stonehide_guard",
        "shade_stalker",
        "loot_hoarder",
        "bloodfang",
        "aegis_knight",
        "iron_sentinel",
        "ogre_brute",
        "arcane_bolt",
    ];
    LIST.iter()
        .chain(LIST.iter())
        .map(|key| CardKey::from(*key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_registry_builds() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), cards().len());
        assert!(registry.hero_power(&CardKey::from(LIFE_TAP)).is_some());
        assert!(registry.hero_power(&CardKey::from(FIREBLAST)).is_some());
    }

    #[test]
    fn test_starter_deck_is_valid() {
        let registry = registry().unwrap();
        let deck = starter_deck();

        assert_eq!(deck.len(), 20);
        assert!(registry.validate_deck("starter", &deck).is_empty());
    }

    #[test]
    fn test_set_covers_every_spell_class() {
        let targets: Vec<_> = cards()
            .into_iter()
            .filter(|c| c.kind == CardKind::Spell)
            .map(|c| c.target)
            .collect();

        for class in [
            SpellTarget::None,
            SpellTarget::FriendlyMinion,
            SpellTarget::AnyMinion,
            SpellTarget::EnemyAny,
        ] {
            assert!(targets.contains(&class), "missing {:?}", class);
        }
    }
}
