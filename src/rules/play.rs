//! PLAY_CARD and USE_HERO_POWER resolution.
//!
//! Both follow the same shape: validate everything against the untouched
//! working state, then pay, log, and resolve the effect. Nothing is paid or
//! removed from hand unless the whole intent is legal.

use super::accumulator::Accumulator;
use super::combat;
use super::death;
use super::reducer::{Reducer, Rejection};
use super::turn;
use crate::cards::{CardDefinition, CardKind, PowerTarget, SpellTarget};
use crate::core::{EventKind, GameState, InstanceId, MinionInstance, PlayerId, TargetSpec};

/// What a validated spell will do once paid for.
enum SpellEffect {
    Nothing,
    Heal { owner: PlayerId, id: InstanceId },
    Reveal { owner: PlayerId, id: InstanceId },
    Damage(TargetSpec),
}

fn no_target(target: Option<TargetSpec>) -> Result<(), Rejection> {
    match target {
        None => Ok(()),
        Some(_) => Err(Rejection::UnexpectedTarget),
    }
}

/// Enemy hero, or an enemy minion the player can target.
pub(crate) fn check_enemy_target(
    state: &GameState,
    player: PlayerId,
    target: Option<TargetSpec>,
) -> Result<TargetSpec, Rejection> {
    let target = target.ok_or(Rejection::MissingTarget)?;
    if target.owner() != player.opponent() {
        return Err(Rejection::InvalidTarget);
    }
    match target {
        TargetSpec::Hero { .. } => Ok(target),
        TargetSpec::Minion { id, owner } => state.players[owner]
            .minion(id)
            .filter(|m| m.is_targetable())
            .map(MinionInstance::target)
            .ok_or(Rejection::InvalidTarget),
    }
}

/// A living minion; friendly-only when `friendly_only` is set.
fn check_minion_target(
    state: &GameState,
    player: PlayerId,
    target: Option<TargetSpec>,
    friendly_only: bool,
) -> Result<(PlayerId, InstanceId), Rejection> {
    match target.ok_or(Rejection::MissingTarget)? {
        TargetSpec::Hero { .. } => Err(Rejection::InvalidTarget),
        TargetSpec::Minion { id, owner } => {
            if friendly_only && owner != player {
                return Err(Rejection::InvalidTarget);
            }
            state.players[owner]
                .minion(id)
                .filter(|m| m.is_alive())
                .map(|_| (owner, id))
                .ok_or(Rejection::InvalidTarget)
        }
    }
}

fn check_spell(
    state: &GameState,
    player: PlayerId,
    def: &CardDefinition,
    target: Option<TargetSpec>,
) -> Result<SpellEffect, Rejection> {
    match def.target {
        SpellTarget::None => no_target(target).map(|()| SpellEffect::Nothing),
        SpellTarget::FriendlyMinion => check_minion_target(state, player, target, true)
            .map(|(owner, id)| SpellEffect::Heal { owner, id }),
        SpellTarget::AnyMinion => check_minion_target(state, player, target, false)
            .map(|(owner, id)| SpellEffect::Reveal { owner, id }),
        SpellTarget::EnemyAny => check_enemy_target(state, player, target).map(SpellEffect::Damage),
    }
}

/// Resolve PLAY_CARD.
pub(crate) fn play_card(
    rules: &Reducer,
    mut acc: Accumulator,
    player: PlayerId,
    hand_id: InstanceId,
    target: Option<TargetSpec>,
) -> Result<Accumulator, Rejection> {
    let seat = &acc.state.players[player];
    let card = seat
        .hand_card(hand_id)
        .ok_or(Rejection::CardNotInHand(hand_id))?
        .card
        .clone();
    let def = rules
        .registry()
        .get(&card)
        .ok_or_else(|| Rejection::UnknownCard(card.clone()))?;
    if def.cost > seat.mana {
        return Err(Rejection::InsufficientMana {
            required: def.cost,
            available: seat.mana,
        });
    }

    let effect = match def.kind {
        CardKind::Minion => {
            if seat.board.len() >= rules.config().board_limit() {
                return Err(Rejection::BoardFull);
            }
            no_target(target)?;
            None
        }
        CardKind::Spell => Some(check_spell(&acc.state, player, def, target)?),
    };

    let seat = acc.state.player_mut(player);
    seat.mana -= def.cost;
    seat.hand.retain(|c| c.id != hand_id);
    acc = acc.emit(EventKind::CardPlayed {
        player,
        hand_id,
        card,
        target,
    });

    let Some(effect) = effect else {
        let id = acc.state.alloc_instance();
        let minion = MinionInstance::from_definition(id, player, def);
        acc.state.player_mut(player).board.push(minion);
        return Ok(acc);
    };

    Ok(match effect {
        SpellEffect::Nothing => acc,
        SpellEffect::Heal { owner, id } => {
            let amount = rules.config().heal_amount;
            if let Some(minion) = acc.state.player_mut(owner).minion_mut(id) {
                minion.health += amount.min(minion.max_health - minion.health).max(0);
            }
            acc
        }
        SpellEffect::Reveal { owner, id } => {
            if let Some(minion) = acc.state.player_mut(owner).minion_mut(id) {
                minion.stealth = false;
                minion.cloaked = false;
            }
            acc
        }
        SpellEffect::Damage(target) => {
            let (acc, _) = combat::damage_target(acc, target, rules.config().spell_damage);
            let (acc, _) = death::resolve_deaths(rules, acc);
            death::check_winner(acc)
        }
    })
}

/// Resolve USE_HERO_POWER.
pub(crate) fn use_hero_power(
    rules: &Reducer,
    mut acc: Accumulator,
    player: PlayerId,
    target: Option<TargetSpec>,
) -> Result<Accumulator, Rejection> {
    let seat = &acc.state.players[player];
    if seat.hero.hero_power_used {
        return Err(Rejection::PowerAlreadyUsed);
    }
    let key = &seat.hero.hero_power;
    let power = rules
        .registry()
        .hero_power(key)
        .ok_or_else(|| Rejection::UnknownHeroPower(key.clone()))?;
    if power.cost > seat.mana {
        return Err(Rejection::InsufficientMana {
            required: power.cost,
            available: seat.mana,
        });
    }

    let aimed = match power.target {
        PowerTarget::None => {
            no_target(target)?;
            None
        }
        PowerTarget::EnemyAny => Some(check_enemy_target(&acc.state, player, target)?),
    };

    let seat = acc.state.player_mut(player);
    seat.mana -= power.cost;
    seat.hero.hero_power_used = true;
    acc = acc.emit(EventKind::HeroPowerUsed {
        player,
        power: power.key.clone(),
        target,
    });

    acc = match aimed {
        None => turn::draw_card(rules, acc, player),
        Some(target) => {
            let (next, _) = combat::damage_target(acc, target, rules.config().power_damage);
            let (next, _) = death::resolve_deaths(rules, next);
            next
        }
    };
    Ok(death::check_winner(acc))
}
