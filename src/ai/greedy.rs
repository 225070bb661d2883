//! Greedy single-ply AI.
//!
//! One intent per call, no lookahead and no randomness. The steps are tried
//! in order and the first one that yields a legal intent wins:
//!
//! 1. Targeted-damage hero power on an enemy minion it is sure to kill
//! 2. The most expensive playable card (minions before spells, then by key)
//! 3. The hero power on its default target
//! 4. An attack with the lowest-id ready minion
//! 5. End turn
//!
//! Targets are picked lowest-health first, ties broken by instance id.

use std::cmp::Reverse;

use super::policy::IntentPolicy;
use crate::cards::{CardDefinition, CardKind, SpellTarget};
use crate::core::{GameRng, GameState, HandCard, Intent, MinionInstance, PlayerId, TargetSpec};
use crate::rules::{Reducer, RulesEngine};

/// Deterministic greedy policy.
#[derive(Clone, Debug, Default)]
pub struct GreedyAi;

fn weakest<'a>(minions: impl Iterator<Item = &'a MinionInstance>) -> Option<&'a MinionInstance> {
    minions.min_by_key(|m| (m.health, m.id))
}

/// Lowest-health enemy minion the seat can target.
fn weakest_enemy(state: &GameState, player: PlayerId) -> Option<&MinionInstance> {
    weakest(state.players[player.opponent()].board.iter().filter(|m| m.is_targetable()))
}

/// Weakest targetable enemy minion, else the enemy hero.
fn enemy_any_target(state: &GameState, player: PlayerId) -> TargetSpec {
    weakest_enemy(state, player).map_or(TargetSpec::Hero { player: player.opponent() }, MinionInstance::target)
}

impl GreedyAi {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Pick the next intent for `state.turn`, or `None` once the match is over.
    #[must_use]
    pub fn choose_intent(&self, rules: &Reducer, state: &GameState) -> Option<Intent> {
        if state.is_over() {
            return None;
        }
        let player = state.turn;
        let legal = |intent: Intent| rules.is_legal(state, &intent).then_some(intent);

        self.power_kill(rules, state, player)
            .and_then(legal)
            .or_else(|| self.best_card(rules, state, player))
            .or_else(|| self.power_default(rules, state, player).and_then(legal))
            .or_else(|| self.attack(state, player).and_then(legal))
            .or(Some(Intent::EndTurn { player }))
    }

    fn power_kill(&self, rules: &Reducer, state: &GameState, player: PlayerId) -> Option<Intent> {
        let hero = &state.players[player].hero;
        let power = rules.registry().hero_power(&hero.hero_power)?;
        if !power.is_targeted_damage() {
            return None;
        }
        let victim = weakest(
            state.players[player.opponent()]
                .board
                .iter()
                .filter(|m| m.is_targetable() && m.health <= 1),
        )?;
        Some(Intent::UseHeroPower {
            player,
            target: Some(victim.target()),
        })
    }

    fn best_card(&self, rules: &Reducer, state: &GameState, player: PlayerId) -> Option<Intent> {
        let seat = &state.players[player];
        let mut candidates: Vec<(&HandCard, &CardDefinition)> = seat
            .hand
            .iter()
            .filter_map(|card| rules.registry().get(&card.card).map(|def| (card, def)))
            .filter(|(_, def)| def.cost <= seat.mana)
            .collect();
        candidates.sort_by_key(|(card, def)| {
            (Reverse(def.cost), def.kind != CardKind::Minion, def.key.clone(), card.id)
        });

        candidates.into_iter().find_map(|(card, def)| {
            let intent = Intent::PlayCard {
                player,
                hand_id: card.id,
                target: card_target(state, player, def),
            };
            rules.is_legal(state, &intent).then_some(intent)
        })
    }

    fn power_default(&self, rules: &Reducer, state: &GameState, player: PlayerId) -> Option<Intent> {
        let power = rules
            .registry()
            .hero_power(&state.players[player].hero.hero_power)?;
        let target = power
            .is_targeted_damage()
            .then(|| enemy_any_target(state, player));
        Some(Intent::UseHeroPower { player, target })
    }

    fn attack(&self, state: &GameState, player: PlayerId) -> Option<Intent> {
        let attacker = state.players[player]
            .board
            .iter()
            .filter(|m| m.ready_to_attack())
            .min_by_key(|m| m.id)?;

        let defender = &state.players[player.opponent()];
        let target = if defender.has_targetable_taunt() {
            weakest(defender.board.iter().filter(|m| m.taunt && m.is_targetable()))?.target()
        } else {
            enemy_any_target(state, player)
        };
        Some(Intent::DeclareAttack {
            player,
            attacker_id: attacker.id,
            target,
        })
    }
}

/// Target for a card given its fixed targeting class.
fn card_target(state: &GameState, player: PlayerId, def: &CardDefinition) -> Option<TargetSpec> {
    if def.kind == CardKind::Minion {
        return None;
    }
    let friendly = || weakest(state.players[player].board.iter());
    match def.target {
        SpellTarget::None => None,
        SpellTarget::FriendlyMinion => friendly().map(MinionInstance::target),
        SpellTarget::AnyMinion => {
            let enemy = weakest(state.players[player.opponent()].board.iter());
            match (friendly(), enemy) {
                (Some(mine), Some(theirs)) if theirs.health < mine.health => Some(theirs.target()),
                (Some(mine), _) => Some(mine.target()),
                (None, theirs) => theirs.map(MinionInstance::target),
            }
        }
        SpellTarget::EnemyAny => Some(enemy_any_target(state, player)),
    }
}

impl IntentPolicy for GreedyAi {
    fn choose_intent(&self, rules: &Reducer, state: &GameState, _rng: &mut GameRng) -> Option<Intent> {
        GreedyAi::choose_intent(self, rules, state)
    }
}
