//! Core engine types: seats, ids, RNG, configuration, intents, events, state.
//!
//! This module holds plain data. All rule logic lives in `rules`.

pub mod config;
pub mod entity;
pub mod event;
pub mod intent;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{ConfigError, HeroLoadout, MatchConfig, BOARD_CAP, HAND_CAP, MANA_CAP};
pub use entity::InstanceId;
pub use event::{EventKind, GameEvent, SlamProfile};
pub use intent::{Intent, TargetSpec};
pub use player::{PlayerId, PlayerMap};
pub use rng::{next_rng, shuffle, GameRng, GameRngState};
pub use state::{GameState, HandCard, HeroState, MinionInstance, PlayerState};
