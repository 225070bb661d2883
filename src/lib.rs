//! # rust-duel
//!
//! A deterministic two-player card duel engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Reducer**: `Reducer::apply(&state, &intent)` returns the next
//!    state and never mutates its input. Illegal intents return the input
//!    unchanged, so the call is safe to make speculatively.
//!
//! 2. **Deterministic**: A seed plus the ordered intent list rebuilds any
//!    reachable state. The only randomness is the seeded deck shuffle.
//!
//! 3. **Explicit Dependencies**: The card registry and rule constants are
//!    passed to the reducer at construction. There is no global state.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: The event log and decks use `im-rs`
//!   vectors, so cloning a state per reducer call is O(1).
//!
//! - **Accumulator Pipeline**: Rule helpers take and return an accumulator
//!   (working state + new events) instead of sharing a mutable draft.
//!
//! ## Modules
//!
//! - `core`: Seats, ids, RNG, configuration, intents, events, state
//! - `cards`: Card and hero power definitions, registry, built-in set
//! - `rules`: The reducer and its resolution pipeline
//! - `ai`: Greedy AI and the policy driver
//! - `replay`: Seed + intent list persistence
//!
//! ## Example
//!
//! ```
//! use rust_duel::cards::standard;
//! use rust_duel::{Intent, MatchConfig, PlayerId, Reducer};
//!
//! let rules = Reducer::new(standard::registry().unwrap(), MatchConfig::default());
//! let state = rules.initial_state(1337);
//!
//! // Not the enemy's turn: nothing happens.
//! let same = rules.apply(&state, &Intent::EndTurn { player: PlayerId::Enemy });
//! assert_eq!(same, state);
//!
//! let next = rules.apply(&state, &Intent::EndTurn { player: PlayerId::Player });
//! assert_eq!(next.turn, PlayerId::Enemy);
//! ```

pub mod ai;
pub mod cards;
pub mod core;
pub mod replay;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EventKind, GameEvent, GameRng, GameRngState, GameState, HandCard, HeroState, InstanceId,
    Intent, MatchConfig, MinionInstance, PlayerId, PlayerMap, PlayerState, SlamProfile,
    TargetSpec,
};

pub use crate::cards::{CardDefinition, CardKey, CardRegistry, HeroPowerDefinition};

pub use crate::rules::{Reducer, Rejection, RulesEngine, Transition};

pub use crate::ai::{GreedyAi, IntentPolicy, MatchOutcome};

pub use crate::replay::{Replay, ReplayError};
