//! Drives policies through the reducer.
//!
//! The driver is the only place policies and the reducer meet. It applies
//! each chosen intent with `try_apply`; an intent the reducer refuses is
//! logged and replaced with `EndTurn`, so a buggy policy can stall a turn
//! but never a match.

use tracing::{debug, warn};

use super::policy::IntentPolicy;
use crate::core::{GameRng, GameState, Intent, PlayerId, PlayerMap};
use crate::rules::Reducer;

/// Final state of a driven match plus everything that was applied.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    pub state: GameState,
    /// Intents in application order; replays from the seed reproduce `state`.
    pub intents: Vec<Intent>,
}

impl MatchOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }
}

/// Apply one policy decision. Returns `None` once the policy has nothing
/// to do (match over).
fn step(
    rules: &Reducer,
    policy: &dyn IntentPolicy,
    state: &GameState,
    rng: &mut GameRng,
) -> Option<(GameState, Intent)> {
    let intent = policy.choose_intent(rules, state, rng)?;
    match rules.try_apply(state, &intent) {
        Ok(transition) => Some((transition.state, intent)),
        Err(reason) => {
            warn!(intent = intent.name(), %reason, "policy chose an illegal intent, ending turn");
            let fallback = Intent::EndTurn { player: state.turn };
            Some((rules.apply(state, &fallback), fallback))
        }
    }
}

/// Let `policy` play out the active seat's turn.
///
/// Stops when the turn passes, the match ends, or `max_intents` have been
/// applied. Returns the new state and the applied intents.
pub fn play_turn(
    rules: &Reducer,
    policy: &dyn IntentPolicy,
    state: &GameState,
    rng: &mut GameRng,
    max_intents: usize,
) -> (GameState, Vec<Intent>) {
    let seat = state.turn;
    let mut state = state.clone();
    let mut applied = Vec::new();

    while !state.is_over() && state.turn == seat && applied.len() < max_intents {
        let Some((next, intent)) = step(rules, policy, &state, rng) else {
            break;
        };
        state = next;
        applied.push(intent);
    }
    (state, applied)
}

/// Play a whole match from `seed`, one policy per seat.
///
/// Stops at a winner or after `max_intents` intents in total.
pub fn play_match(
    rules: &Reducer,
    policies: &PlayerMap<&dyn IntentPolicy>,
    seed: u32,
    rng: &mut GameRng,
    max_intents: usize,
) -> MatchOutcome {
    let mut state = rules.initial_state(seed);
    let mut intents = Vec::new();

    while !state.is_over() && intents.len() < max_intents {
        let policy = policies[state.turn];
        let Some((next, intent)) = step(rules, policy, &state, rng) else {
            break;
        };
        state = next;
        intents.push(intent);
    }

    debug!(
        seed,
        intents = intents.len(),
        turn = state.turn_number,
        winner = ?state.winner,
        "match finished"
    );
    MatchOutcome { state, intents }
}
