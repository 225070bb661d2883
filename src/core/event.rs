//! Game event log types.
//!
//! Every observable occurrence during a reducer call appends one
//! `GameEvent` to the state's log. Ids start at 0 and increase by exactly
//! one per event for the whole match, so a consumer can resume from the
//! last id it rendered.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::intent::TargetSpec;
use super::player::PlayerId;
use crate::cards::CardKey;

/// Post-hoc severity of a resolved attack, for presentation weighting only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlamProfile {
    /// Nothing died.
    Light,
    /// At least one minion died.
    Heavy,
    /// The attack ended the match.
    Lethal,
}

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    TurnStarted {
        player: PlayerId,
        turn: u32,
    },
    TurnEnded {
        player: PlayerId,
    },
    CardDrawn {
        player: PlayerId,
        hand_id: InstanceId,
        card: CardKey,
    },
    /// Drawn into a full hand and discarded.
    CardBurned {
        player: PlayerId,
        card: CardKey,
    },
    CardPlayed {
        player: PlayerId,
        hand_id: InstanceId,
        card: CardKey,
        target: Option<TargetSpec>,
    },
    AttackDeclared {
        player: PlayerId,
        attacker_id: InstanceId,
        target: TargetSpec,
    },
    /// `amount` is the damage actually dealt (0 when a shield absorbed it).
    DamageDealt {
        target: TargetSpec,
        amount: i32,
    },
    MinionDied {
        id: InstanceId,
        owner: PlayerId,
        card: CardKey,
    },
    CombatResolved {
        player: PlayerId,
        attacker_id: InstanceId,
        target: TargetSpec,
        profile: SlamProfile,
    },
    HeroPowerUsed {
        player: PlayerId,
        power: CardKey,
        target: Option<TargetSpec>,
    },
    /// Drew from an empty deck; `damage` equals the new fatigue counter.
    Fatigue {
        player: PlayerId,
        damage: i32,
    },
}

/// A logged event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Position in the match log.
    pub id: u64,
    pub kind: EventKind,
}

impl GameEvent {
    #[must_use]
    pub fn new(id: u64, kind: EventKind) -> Self {
        Self { id, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::new(
            7,
            EventKind::CombatResolved {
                player: PlayerId::Player,
                attacker_id: InstanceId(3),
                target: TargetSpec::Hero { player: PlayerId::Enemy },
                profile: SlamProfile::Lethal,
            },
        );

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
