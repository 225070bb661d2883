//! Intent representation: what a seat asks the engine to do.
//!
//! Presentation and AI both produce `Intent` values and submit them through
//! the same reducer entry point. An intent is a request, not a command: the
//! reducer validates it and returns the state unchanged when it is illegal.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;

/// Something an effect or attack can be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSpec {
    /// A seat's hero.
    Hero { player: PlayerId },
    /// A minion on `owner`'s board.
    Minion { id: InstanceId, owner: PlayerId },
}

impl TargetSpec {
    /// Seat that owns the target.
    #[must_use]
    pub fn owner(self) -> PlayerId {
        match self {
            TargetSpec::Hero { player } => player,
            TargetSpec::Minion { owner, .. } => owner,
        }
    }
}

/// A request to perform one action.
///
/// ## Example
///
/// ```
/// use rust_duel::core::{InstanceId, Intent, PlayerId, TargetSpec};
///
/// let attack = Intent::DeclareAttack {
///     player: PlayerId::Player,
///     attacker_id: InstanceId(12),
///     target: TargetSpec::Hero { player: PlayerId::Enemy },
/// };
/// assert_eq!(attack.player(), PlayerId::Player);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Pass the turn.
    EndTurn { player: PlayerId },
    /// Play a card from hand.
    PlayCard {
        player: PlayerId,
        hand_id: InstanceId,
        target: Option<TargetSpec>,
    },
    /// Use the hero power.
    UseHeroPower {
        player: PlayerId,
        target: Option<TargetSpec>,
    },
    /// Attack with a minion.
    DeclareAttack {
        player: PlayerId,
        attacker_id: InstanceId,
        target: TargetSpec,
    },
}

impl Intent {
    /// Seat that submitted the intent.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            Intent::EndTurn { player }
            | Intent::PlayCard { player, .. }
            | Intent::UseHeroPower { player, .. }
            | Intent::DeclareAttack { player, .. } => player,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::EndTurn { .. } => "end_turn",
            Intent::PlayCard { .. } => "play_card",
            Intent::UseHeroPower { .. } => "use_hero_power",
            Intent::DeclareAttack { .. } => "declare_attack",
        }
    }
}
