//! Intent policies.
//!
//! A policy picks the next intent for the active seat. Policies never touch
//! the state directly; whatever they return goes through the same
//! `Reducer::apply` entry point as human input.
//!
//! - `GreedyAi`: deterministic single-ply heuristic (see `greedy`)
//! - `UniformPolicy`: uniformly random legal intent
//! - `PassPolicy`: always ends the turn

use rand::Rng;

use crate::core::{GameRng, GameState, Intent};
use crate::rules::{Reducer, RulesEngine};

/// Chooses the next intent for the seat whose turn it is.
pub trait IntentPolicy: Send + Sync {
    /// Pick an intent for `state.turn`, or `None` when the match is over.
    ///
    /// `rng` is only consulted by randomized policies.
    fn choose_intent(&self, rules: &Reducer, state: &GameState, rng: &mut GameRng) -> Option<Intent>;
}

/// Picks uniformly among the legal intents.
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy;

impl IntentPolicy for UniformPolicy {
    fn choose_intent(&self, rules: &Reducer, state: &GameState, rng: &mut GameRng) -> Option<Intent> {
        if state.is_over() {
            return None;
        }
        let legal = rules.legal_intents(state, state.turn);
        if legal.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..legal.len());
        legal.get(idx).copied()
    }
}

/// Ends the turn immediately.
#[derive(Clone, Debug, Default)]
pub struct PassPolicy;

impl IntentPolicy for PassPolicy {
    fn choose_intent(&self, _rules: &Reducer, state: &GameState, _rng: &mut GameRng) -> Option<Intent> {
        if state.is_over() {
            None
        } else {
            Some(Intent::EndTurn { player: state.turn })
        }
    }
}
