//! Turn lifecycle: turn start, turn end, drawing and fatigue.

use tracing::debug;

use super::accumulator::Accumulator;
use super::death;
use super::reducer::Reducer;
use crate::core::{EventKind, HandCard, PlayerId};

/// Begin `player`'s turn.
///
/// Advances the turn counter, grows and refills mana, clears the hero power
/// flag and readies only `player`'s own board. Minions summoned during the
/// opponent's turn stay sick until this runs for their owner.
pub(crate) fn start_turn(rules: &Reducer, mut acc: Accumulator, player: PlayerId, draw: bool) -> Accumulator {
    let cap = rules.config().mana_limit();
    acc.state.turn_number += 1;
    let turn = acc.state.turn_number;

    let seat = acc.state.player_mut(player);
    seat.max_mana = seat.max_mana.saturating_add(1).min(cap);
    seat.mana = seat.max_mana;
    seat.hero.hero_power_used = false;
    for minion in seat.board.iter_mut() {
        minion.summoning_sick = false;
        minion.can_attack = true;
        minion.attacked_this_turn = false;
    }

    debug!(%player, turn, "turn started");
    acc = acc.emit(EventKind::TurnStarted { player, turn });
    if draw {
        acc = draw_card(rules, acc, player);
    }
    acc
}

/// End `player`'s turn and start the opponent's.
///
/// The opponent's turn-start draw can cause fatigue, so the winner check
/// runs afterwards.
pub(crate) fn end_turn(rules: &Reducer, mut acc: Accumulator, player: PlayerId) -> Accumulator {
    acc = acc.emit(EventKind::TurnEnded { player });
    let next = player.opponent();
    acc.state.turn = next;
    acc = start_turn(rules, acc, next, true);
    death::check_winner(acc)
}

/// Draw one card for `player`.
///
/// - Deck not empty, hand not full: the card enters the hand with a fresh id.
/// - Deck not empty, hand full: the card is burned.
/// - Deck empty: fatigue goes up by one and the hero takes that much damage.
///
/// Does not check for a winner; callers that can be reached by fatigue run
/// `death::check_winner` afterwards.
pub(crate) fn draw_card(rules: &Reducer, mut acc: Accumulator, player: PlayerId) -> Accumulator {
    let max_hand = rules.config().hand_limit();
    let seat = &acc.state.players[player];

    if seat.deck_remaining() == 0 {
        let hero = &mut acc.state.player_mut(player).hero;
        hero.fatigue += 1;
        let damage = hero.fatigue;
        hero.health -= damage;
        debug!(%player, damage, "fatigue");
        return acc.emit(EventKind::Fatigue { player, damage });
    }

    let Some(card) = seat.deck.get(seat.draw_index).cloned() else {
        return acc;
    };
    acc.state.player_mut(player).draw_index += 1;

    if acc.state.players[player].hand.len() >= max_hand {
        return acc.emit(EventKind::CardBurned { player, card });
    }

    let hand_id = acc.state.alloc_instance();
    acc.state.player_mut(player).hand.push(HandCard {
        id: hand_id,
        card: card.clone(),
    });
    acc.emit(EventKind::CardDrawn {
        player,
        hand_id,
        card,
    })
}
