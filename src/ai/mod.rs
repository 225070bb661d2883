//! AI opponents.
//!
//! Policies consume the same `GameState` the reducer produces and submit
//! intents through the same entry point as human input.

pub mod driver;
pub mod greedy;
pub mod policy;

pub use driver::{play_match, play_turn, MatchOutcome};
pub use greedy::GreedyAi;
pub use policy::{IntentPolicy, PassPolicy, UniformPolicy};
