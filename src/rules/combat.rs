//! Combat: declared attacks, the shared damage function, taunt lock,
//! lifesteal and slam profiles.

use super::accumulator::Accumulator;
use super::death;
use super::reducer::{Reducer, Rejection};
use crate::core::{EventKind, InstanceId, PlayerId, SlamProfile, TargetSpec};

/// Deal damage to a minion. Returns the damage actually dealt.
///
/// - Non-positive amounts do nothing.
/// - A shield absorbs the whole hit, is consumed, and reports 0.
/// - A resilient minion hit outside its controller's turn keeps at least
///   1 health; the report is the health it actually lost.
///
/// Does not remove dead minions; run `death::resolve_deaths` afterwards.
pub(crate) fn damage_minion(
    mut acc: Accumulator,
    owner: PlayerId,
    id: InstanceId,
    amount: i32,
) -> (Accumulator, i32) {
    if amount <= 0 {
        return (acc, 0);
    }
    let active = acc.state.turn;
    let Some(minion) = acc.state.player_mut(owner).minion_mut(id) else {
        return (acc, 0);
    };

    let dealt = if minion.shield {
        minion.shield = false;
        0
    } else {
        let before = minion.health;
        minion.health -= amount;
        if minion.resilient && active != minion.owner && minion.health < 1 {
            minion.health = 1;
            (before - 1).max(0)
        } else {
            amount
        }
    };

    let acc = acc.emit(EventKind::DamageDealt {
        target: TargetSpec::Minion { id, owner },
        amount: dealt,
    });
    (acc, dealt)
}

/// Deal damage to a hero. Heroes have no floor.
pub(crate) fn damage_hero(mut acc: Accumulator, player: PlayerId, amount: i32) -> (Accumulator, i32) {
    if amount <= 0 {
        return (acc, 0);
    }
    acc.state.player_mut(player).hero.health -= amount;
    let acc = acc.emit(EventKind::DamageDealt {
        target: TargetSpec::Hero { player },
        amount,
    });
    (acc, amount)
}

/// Deal damage to whatever `target` names.
pub(crate) fn damage_target(acc: Accumulator, target: TargetSpec, amount: i32) -> (Accumulator, i32) {
    match target {
        TargetSpec::Hero { player } => damage_hero(acc, player, amount),
        TargetSpec::Minion { id, owner } => damage_minion(acc, owner, id, amount),
    }
}

/// Heal a hero, capped at max health.
pub(crate) fn heal_hero(mut acc: Accumulator, player: PlayerId, amount: i32) -> Accumulator {
    let hero = &mut acc.state.player_mut(player).hero;
    hero.health = (hero.health + amount.max(0)).min(hero.max_health);
    acc
}

/// Check an attack target against the defending board.
///
/// While the defender has a targetable taunt minion, only taunt minions
/// may be attacked.
fn check_attack_target(acc: &Accumulator, player: PlayerId, target: TargetSpec) -> Result<(), Rejection> {
    let defender_id = player.opponent();
    if target.owner() != defender_id {
        return Err(Rejection::InvalidTarget);
    }
    let defender = &acc.state.players[defender_id];
    let taunt_up = defender.has_targetable_taunt();

    match target {
        TargetSpec::Hero { .. } => {
            if taunt_up {
                return Err(Rejection::TauntLock);
            }
        }
        TargetSpec::Minion { id, .. } => {
            let minion = defender
                .minion(id)
                .filter(|m| m.is_targetable())
                .ok_or(Rejection::InvalidTarget)?;
            if taunt_up && !minion.taunt {
                return Err(Rejection::TauntLock);
            }
        }
    }
    Ok(())
}

/// Resolve DECLARE_ATTACK.
pub(crate) fn declare_attack(
    rules: &Reducer,
    mut acc: Accumulator,
    player: PlayerId,
    attacker_id: InstanceId,
    target: TargetSpec,
) -> Result<Accumulator, Rejection> {
    let attacker = acc.state.players[player]
        .minion(attacker_id)
        .ok_or(Rejection::AttackerNotFound(attacker_id))?;
    if !attacker.ready_to_attack() {
        return Err(Rejection::AttackerNotReady(attacker_id));
    }
    let attack = attacker.attack;
    let lifesteal = attacker.lifesteal;
    check_attack_target(&acc, player, target)?;

    if let Some(attacker) = acc.state.player_mut(player).minion_mut(attacker_id) {
        attacker.can_attack = false;
        attacker.attacked_this_turn = true;
        attacker.stealth = false;
    }
    acc = acc.emit(EventKind::AttackDeclared {
        player,
        attacker_id,
        target,
    });

    let total = match target {
        TargetSpec::Hero { player: defender } => {
            let (next, dealt) = damage_hero(acc, defender, attack);
            acc = next;
            dealt
        }
        TargetSpec::Minion { id, owner } => {
            let counter = acc.state.players[owner].minion(id).map_or(0, |m| m.attack);
            let (next, dealt) = damage_minion(acc, owner, id, attack);
            let (next, reflected) = damage_minion(next, player, attacker_id, counter);
            acc = next;
            dealt + reflected
        }
    };

    if lifesteal && total > 0 {
        acc = heal_hero(acc, player, total);
    }

    let (next, died) = death::resolve_deaths(rules, acc);
    acc = death::check_winner(next);

    let profile = slam_profile(acc.state.winner.is_some(), died);
    Ok(acc.emit(EventKind::CombatResolved {
        player,
        attacker_id,
        target,
        profile,
    }))
}

/// Classify a resolved attack for presentation.
#[must_use]
pub fn slam_profile(match_over: bool, minions_died: usize) -> SlamProfile {
    if match_over {
        SlamProfile::Lethal
    } else if minions_died > 0 {
        SlamProfile::Heavy
    } else {
        SlamProfile::Light
    }
}
