//! Rules engine trait.
//!
//! The reducer implements `RulesEngine`; AI policies and hosts talk to the
//! rules only through it:
//! - How intents modify state
//! - Which intents are legal
//! - Enumerating candidate intents for a seat
//!
//! ## Implementation Notes
//!
//! - `apply` must be total: illegal intents return the input state
//! - `apply` must be deterministic, or replays diverge
//! - `candidate_intents` may over-approximate; `legal_intents` filters

use crate::core::{GameState, Intent, PlayerId, TargetSpec};

/// Rules engine trait.
pub trait RulesEngine {
    /// Apply an intent. Illegal intents return a clone of `state`.
    fn apply(&self, state: &GameState, intent: &Intent) -> GameState;

    /// Whether `apply` would change the state for this intent.
    fn is_legal(&self, state: &GameState, intent: &Intent) -> bool;

    // === Convenience Methods ===

    /// Every intent shape `player` could submit against `state`.
    ///
    /// Includes illegal combinations; run through `legal_intents` to filter.
    /// Order is stable: end turn, then hand cards in hand order, then the
    /// hero power, then attacks in board order.
    fn candidate_intents(&self, state: &GameState, player: PlayerId) -> Vec<Intent> {
        let mut targets: Vec<Option<TargetSpec>> = vec![None];
        for seat in PlayerId::ALL {
            targets.push(Some(TargetSpec::Hero { player: seat }));
            targets.extend(state.players[seat].board.iter().map(|m| Some(m.target())));
        }

        let mut out = vec![Intent::EndTurn { player }];
        let seat = &state.players[player];
        for card in &seat.hand {
            out.extend(targets.iter().map(|&target| Intent::PlayCard {
                player,
                hand_id: card.id,
                target,
            }));
        }
        out.extend(
            targets
                .iter()
                .map(|&target| Intent::UseHeroPower { player, target }),
        );
        for attacker in &seat.board {
            out.extend(targets.iter().flatten().map(|&target| Intent::DeclareAttack {
                player,
                attacker_id: attacker.id,
                target,
            }));
        }
        out
    }

    /// Every legal intent for `player`.
    fn legal_intents(&self, state: &GameState, player: PlayerId) -> Vec<Intent> {
        self.candidate_intents(state, player)
            .into_iter()
            .filter(|intent| self.is_legal(state, intent))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard;
    use crate::core::MatchConfig;
    use crate::rules::Reducer;

    #[test]
    fn test_legal_intents_at_start() {
        let rules = Reducer::new(standard::registry().unwrap(), MatchConfig::default());
        let state = rules.initial_state(1337);

        let legal = rules.legal_intents(&state, PlayerId::Player);
        assert!(legal.contains(&Intent::EndTurn { player: PlayerId::Player }));
        for intent in &legal {
            assert_ne!(rules.apply(&state, intent), state);
        }
        // One mana on turn one: only one-cost cards, no hero power, no attacks.
        assert!(legal.iter().all(|i| !matches!(
            i,
            Intent::UseHeroPower { .. } | Intent::DeclareAttack { .. }
        )));
    }

    #[test]
    fn test_off_turn_seat_has_no_legal_intents() {
        let rules = Reducer::new(standard::registry().unwrap(), MatchConfig::default());
        let state = rules.initial_state(1337);

        assert!(rules.legal_intents(&state, PlayerId::Enemy).is_empty());
    }
}
