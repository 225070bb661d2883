//! Match configuration.
//!
//! `MatchConfig` holds every rule constant and the decklists for one match.
//! It is plain data: build it with `Default` plus the `with_*` methods, or
//! load it from JSON, then hand it to the reducer alongside the registry.
//!
//! The hard caps (`MANA_CAP`, `BOARD_CAP`, `HAND_CAP`) are engine
//! invariants. A config may lower the limits but never raise them.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::player::{PlayerId, PlayerMap};
use crate::cards::{standard, CardKey, CardRegistry};

/// Highest max mana a hero can reach.
pub const MANA_CAP: u8 = 10;
/// Most minions a board can hold.
pub const BOARD_CAP: usize = 7;
/// Most cards a hand can hold.
pub const HAND_CAP: usize = 10;

/// Errors raised while loading or checking a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_mana {0} exceeds the cap of {MANA_CAP}")]
    ManaAboveCap(u8),
    #[error("max_board {0} exceeds the cap of {BOARD_CAP}")]
    BoardAboveCap(usize),
    #[error("max_hand {0} exceeds the cap of {HAND_CAP}")]
    HandAboveCap(usize),
    #[error("starting_health must be positive, got {0}")]
    NonPositiveHealth(i32),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Hero identity and hero power for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroLoadout {
    /// Hero identity (display only).
    pub hero: CardKey,
    /// Hero power key, looked up in the registry.
    pub hero_power: CardKey,
}

impl HeroLoadout {
    #[must_use]
    pub fn new(hero: impl Into<CardKey>, hero_power: impl Into<CardKey>) -> Self {
        Self {
            hero: hero.into(),
            hero_power: hero_power.into(),
        }
    }
}

/// Rule constants and decklists for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Starting (and maximum) hero health.
    pub starting_health: i32,

    /// Max mana reachable through turn starts (≤ `MANA_CAP`).
    pub max_mana: u8,

    /// Board size limit (≤ `BOARD_CAP`).
    pub max_board: usize,

    /// Hand size limit (≤ `HAND_CAP`). Draws into a full hand burn the card.
    pub max_hand: usize,

    /// Cards each seat draws before the first turn.
    pub opening_hand: usize,

    /// Whether the very first turn of the match draws a card.
    pub first_turn_draw: bool,

    /// Damage dealt by enemy-targeted spells.
    pub spell_damage: i32,

    /// Maximum healing of friendly-minion spells.
    pub heal_amount: i32,

    /// Damage dealt by targeted hero powers.
    pub power_damage: i32,

    /// Hero and hero power per seat.
    pub heroes: PlayerMap<HeroLoadout>,

    /// Decklists per seat, shuffled at match creation.
    pub decks: PlayerMap<Vec<CardKey>>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            max_mana: MANA_CAP,
            max_board: BOARD_CAP,
            max_hand: HAND_CAP,
            opening_hand: 5,
            first_turn_draw: false,
            spell_damage: 2,
            heal_amount: 3,
            power_damage: 2,
            heroes: PlayerMap::new(|p| match p {
                PlayerId::Player => HeroLoadout::new("sage", standard::LIFE_TAP),
                PlayerId::Enemy => HeroLoadout::new("pyromancer", standard::FIREBLAST),
            }),
            decks: PlayerMap::new(|_| standard::starter_deck()),
        }
    }
}

impl MatchConfig {
    /// Parse a config from JSON. Missing fields are an error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check_limits()?;
        Ok(config)
    }

    /// Set the starting hero health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, size: usize) -> Self {
        self.opening_hand = size;
        self
    }

    /// Set one seat's decklist.
    #[must_use]
    pub fn with_deck(mut self, player: PlayerId, deck: Vec<CardKey>) -> Self {
        self.decks[player] = deck;
        self
    }

    /// Set one seat's hero power.
    #[must_use]
    pub fn with_hero_power(mut self, player: PlayerId, power: impl Into<CardKey>) -> Self {
        self.heroes[player].hero_power = power.into();
        self
    }

    /// Max mana the reducer enforces: `max_mana` held under `MANA_CAP`.
    #[must_use]
    pub fn mana_limit(&self) -> u8 {
        self.max_mana.min(MANA_CAP)
    }

    /// Board size the reducer enforces: `max_board` held under `BOARD_CAP`.
    #[must_use]
    pub fn board_limit(&self) -> usize {
        self.max_board.min(BOARD_CAP)
    }

    /// Hand size the reducer enforces: `max_hand` held under `HAND_CAP`.
    #[must_use]
    pub fn hand_limit(&self) -> usize {
        self.max_hand.min(HAND_CAP)
    }

    /// Check the numeric limits against the engine caps.
    pub fn check_limits(&self) -> Result<(), ConfigError> {
        if self.max_mana > MANA_CAP {
            return Err(ConfigError::ManaAboveCap(self.max_mana));
        }
        if self.max_board > BOARD_CAP {
            return Err(ConfigError::BoardAboveCap(self.max_board));
        }
        if self.max_hand > HAND_CAP {
            return Err(ConfigError::HandAboveCap(self.max_hand));
        }
        if self.starting_health <= 0 {
            return Err(ConfigError::NonPositiveHealth(self.starting_health));
        }
        Ok(())
    }

    /// Startup check: hard limits, then decklists and hero powers against
    /// the registry.
    ///
    /// Unknown keys are logged as warnings and returned, not treated as
    /// errors; intents referencing them simply become no-ops.
    pub fn validate(&self, registry: &CardRegistry) -> Result<Vec<CardKey>, ConfigError> {
        self.check_limits()?;

        let mut missing = Vec::new();
        for (player, deck) in self.decks.iter() {
            missing.extend(registry.validate_deck(&player.to_string(), deck));
        }
        for (player, loadout) in self.heroes.iter() {
            if registry.hero_power(&loadout.hero_power).is_none() {
                warn!(%player, power = %loadout.hero_power, "hero power not registered");
                missing.push(loadout.hero_power.clone());
            }
        }
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.starting_health, 30);
        assert_eq!(config.max_mana, 10);
        assert_eq!(config.opening_hand, 5);
        assert!(!config.first_turn_draw);
        assert!(config.check_limits().is_ok());
    }

    #[test]
    fn test_default_config_is_consistent_with_standard_set() {
        let registry = standard::registry().unwrap();
        let missing = MatchConfig::default().validate(&registry).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_starting_health(5)
            .with_opening_hand(3)
            .with_deck(PlayerId::Enemy, vec![CardKey::from("river_croc")])
            .with_hero_power(PlayerId::Player, standard::FIREBLAST);

        assert_eq!(config.starting_health, 5);
        assert_eq!(config.opening_hand, 3);
        assert_eq!(config.decks[PlayerId::Enemy].len(), 1);
        assert_eq!(config.heroes[PlayerId::Player].hero_power, CardKey::from(standard::FIREBLAST));
    }

    #[test]
    fn test_limits_rejected() {
        let mut config = MatchConfig::default();
        config.max_mana = 11;
        assert!(matches!(config.check_limits(), Err(ConfigError::ManaAboveCap(11))));

        let mut config = MatchConfig::default();
        config.max_board = 8;
        assert!(matches!(config.check_limits(), Err(ConfigError::BoardAboveCap(8))));

        let config = MatchConfig::default().with_starting_health(0);
        assert!(matches!(config.check_limits(), Err(ConfigError::NonPositiveHealth(0))));
    }

    #[test]
    fn test_validate_reports_unknown_keys() {
        let registry = standard::registry().unwrap();
        let config = MatchConfig::default()
            .with_deck(PlayerId::Player, vec![CardKey::from("no_such_card")])
            .with_hero_power(PlayerId::Enemy, "no_such_power");

        let missing = config.validate(&registry).unwrap();
        assert_eq!(
            missing,
            vec![CardKey::from("no_such_card"), CardKey::from("no_such_power")]
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MatchConfig::default().with_starting_health(12);
        let json = serde_json::to_string(&config).unwrap();
        let loaded = MatchConfig::from_json(&json).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_json_limits_checked() {
        let mut config = MatchConfig::default();
        config.max_hand = 12;
        let json = serde_json::to_string(&config).unwrap();
        assert!(matches!(MatchConfig::from_json(&json), Err(ConfigError::HandAboveCap(12))));
        assert!(matches!(MatchConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
