//! The reducer: the single entry point that turns `(state, intent)` into
//! the next state.
//!
//! `apply` is total. Every illegal intent yields a clone of the input
//! state, so hosts can call it speculatively (affordance checks, AI probes)
//! without guarding. `try_apply` exposes the same logic with the rejection
//! reason for callers that want it.

use thiserror::Error;
use tracing::{debug, info};

use super::accumulator::{Accumulator, Transition};
use super::engine::RulesEngine;
use super::{combat, death, play, turn};
use crate::cards::{CardKey, CardRegistry};
use crate::core::{ConfigError, GameState, InstanceId, Intent, MatchConfig, PlayerId};

/// Why an intent was refused. The state is unchanged in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("the match is already over")]
    GameOver,
    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: PlayerId, actual: PlayerId },
    #[error("card {0} is not in hand")]
    CardNotInHand(InstanceId),
    #[error("card `{0}` is not registered")]
    UnknownCard(CardKey),
    #[error("hero power `{0}` is not registered")]
    UnknownHeroPower(CardKey),
    #[error("costs {required} mana, only {available} available")]
    InsufficientMana { required: u8, available: u8 },
    #[error("board is full")]
    BoardFull,
    #[error("a target is required")]
    MissingTarget,
    #[error("this action takes no target")]
    UnexpectedTarget,
    #[error("invalid target")]
    InvalidTarget,
    #[error("hero power already used this turn")]
    PowerAlreadyUsed,
    #[error("attacker {0} is not on the board")]
    AttackerNotFound(InstanceId),
    #[error("attacker {0} cannot attack right now")]
    AttackerNotReady(InstanceId),
    #[error("a taunt minion must be attacked first")]
    TauntLock,
}

/// Match reducer.
///
/// Holds the read-only registry and rule constants. Any number of matches
/// can run against one reducer; it keeps no per-match state.
#[derive(Clone, Debug)]
pub struct Reducer {
    registry: CardRegistry,
    config: MatchConfig,
}

impl Reducer {
    /// Create a reducer without checking the config.
    ///
    /// Limits above the engine caps are not errors here; the reducer holds
    /// them at the caps. Use [`Reducer::validated`] to refuse such configs.
    #[must_use]
    pub fn new(registry: CardRegistry, config: MatchConfig) -> Self {
        Self { registry, config }
    }

    /// Create a reducer after the one-time startup check.
    ///
    /// Hard limit violations are errors. Unknown card or hero power keys are
    /// logged as warnings and do not stop the match from being created.
    pub fn validated(registry: CardRegistry, config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate(&registry)?;
        Ok(Self::new(registry, config))
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Create the starting state for a seed.
    ///
    /// Shuffles both decks, draws the opening hands (Player first), then
    /// starts turn 1 for Player. The first turn draws only when
    /// `first_turn_draw` is set.
    #[must_use]
    pub fn initial_state(&self, seed: u32) -> GameState {
        let mut acc = Accumulator::new(GameState::new(seed, &self.config));
        for player in PlayerId::ALL {
            for _ in 0..self.config.opening_hand {
                acc = turn::draw_card(self, acc, player);
            }
        }
        acc = turn::start_turn(self, acc, PlayerId::Player, self.config.first_turn_draw);
        acc = death::check_winner(acc);
        info!(seed, "match created");
        acc.state
    }

    /// Apply an intent. Illegal intents return the state unchanged.
    #[must_use]
    pub fn apply(&self, state: &GameState, intent: &Intent) -> GameState {
        match self.try_apply(state, intent) {
            Ok(transition) => transition.state,
            Err(_) => state.clone(),
        }
    }

    /// Apply an intent, reporting why it was refused.
    pub fn try_apply(&self, state: &GameState, intent: &Intent) -> Result<Transition, Rejection> {
        self.resolve(state, intent)
            .map(Accumulator::finish)
            .map_err(|reason| {
                debug!(intent = intent.name(), player = %intent.player(), %reason, "intent rejected");
                reason
            })
    }

    fn resolve(&self, state: &GameState, intent: &Intent) -> Result<Accumulator, Rejection> {
        if state.is_over() {
            return Err(Rejection::GameOver);
        }
        if intent.player() != state.turn {
            return Err(Rejection::WrongTurn {
                expected: state.turn,
                actual: intent.player(),
            });
        }

        let acc = Accumulator::new(state.clone());
        match *intent {
            Intent::EndTurn { player } => Ok(turn::end_turn(self, acc, player)),
            Intent::PlayCard {
                player,
                hand_id,
                target,
            } => play::play_card(self, acc, player, hand_id, target),
            Intent::UseHeroPower { player, target } => {
                play::use_hero_power(self, acc, player, target)
            }
            Intent::DeclareAttack {
                player,
                attacker_id,
                target,
            } => combat::declare_attack(self, acc, player, attacker_id, target),
        }
    }
}

impl RulesEngine for Reducer {
    fn apply(&self, state: &GameState, intent: &Intent) -> GameState {
        Reducer::apply(self, state, intent)
    }

    fn is_legal(&self, state: &GameState, intent: &Intent) -> bool {
        self.resolve(state, intent).is_ok()
    }
}
