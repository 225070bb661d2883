//! Match replays.
//!
//! A seed plus the ordered intent list is enough to rebuild any reachable
//! state: the constructor shuffle and every reducer call are pure functions
//! of their inputs. Replays are stored with `bincode`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::MatchOutcome;
use crate::core::{GameState, Intent};
use crate::rules::Reducer;

/// Replay encode/decode failure.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to encode replay: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode replay: {0}")]
    Decode(#[source] bincode::Error),
}

/// Seed and intents of one match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub seed: u32,
    pub intents: Vec<Intent>,
}

impl Replay {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            intents: Vec::new(),
        }
    }

    /// Replay of a driven match.
    #[must_use]
    pub fn from_outcome(seed: u32, outcome: &MatchOutcome) -> Self {
        Self {
            seed,
            intents: outcome.intents.clone(),
        }
    }

    /// Record an intent after the ones already stored.
    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Rebuild the final state.
    #[must_use]
    pub fn reconstruct(&self, rules: &Reducer) -> GameState {
        self.reconstruct_prefix(rules, self.intents.len())
    }

    /// Rebuild the state after the first `count` intents.
    #[must_use]
    pub fn reconstruct_prefix(&self, rules: &Reducer, count: usize) -> GameState {
        self.intents
            .iter()
            .take(count)
            .fold(rules.initial_state(self.seed), |state, intent| rules.apply(&state, intent))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ReplayError> {
        bincode::serialize(self).map_err(ReplayError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReplayError> {
        bincode::deserialize(bytes).map_err(ReplayError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard;
    use crate::core::{MatchConfig, PlayerId};

    fn rules() -> Reducer {
        Reducer::new(standard::registry().unwrap(), MatchConfig::default())
    }

    #[test]
    fn test_empty_replay_is_initial_state() {
        let rules = rules();
        assert_eq!(Replay::new(42).reconstruct(&rules), rules.initial_state(42));
    }

    #[test]
    fn test_prefix() {
        let rules = rules();
        let mut replay = Replay::new(42);
        replay.push(Intent::EndTurn { player: PlayerId::Player });
        replay.push(Intent::EndTurn { player: PlayerId::Enemy });

        let one = replay.reconstruct_prefix(&rules, 1);
        assert_eq!(one.turn, PlayerId::Enemy);
        assert_eq!(replay.reconstruct(&rules).turn, PlayerId::Player);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut replay = Replay::new(7);
        replay.push(Intent::EndTurn { player: PlayerId::Player });

        let bytes = replay.to_bytes().unwrap();
        assert_eq!(Replay::from_bytes(&bytes).unwrap(), replay);
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let err = Replay::from_bytes(&[0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, ReplayError::Decode(_)));
    }
}
