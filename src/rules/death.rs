//! Death resolution, deathrattles and win detection.

use tracing::info;

use super::accumulator::Accumulator;
use super::reducer::Reducer;
use super::turn;
use crate::cards::Deathrattle;
use crate::core::{EventKind, MinionInstance, PlayerId};

/// Remove every minion at or below zero health and run their deathrattles.
///
/// Both boards are scanned against the same snapshot before anything is
/// removed, so a mutual kill resolves the same way whichever side took
/// damage first. Deathrattle draws are queued and run only after every
/// removal is complete. Returns the number of minions that died.
pub(crate) fn resolve_deaths(rules: &Reducer, mut acc: Accumulator) -> (Accumulator, usize) {
    let dead: Vec<MinionInstance> = PlayerId::ALL
        .into_iter()
        .flat_map(|p| acc.state.players[p].board.iter().filter(|m| !m.is_alive()).cloned())
        .collect();
    if dead.is_empty() {
        return (acc, 0);
    }

    for player in PlayerId::ALL {
        acc.state.player_mut(player).board.retain(|m| m.is_alive());
    }

    let mut queued_draws = Vec::new();
    for minion in &dead {
        acc = acc.emit(EventKind::MinionDied {
            id: minion.id,
            owner: minion.owner,
            card: minion.card.clone(),
        });
        match minion.deathrattle {
            Some(Deathrattle::DrawCard) => queued_draws.push(minion.owner),
            None => {}
        }
    }

    for owner in queued_draws {
        acc = turn::draw_card(rules, acc, owner);
    }
    (acc, dead.len())
}

/// Set the winner if a hero is dead.
///
/// Player's hero is checked first, so when both heroes drop to zero from
/// the same action the Enemy seat wins.
pub(crate) fn check_winner(mut acc: Accumulator) -> Accumulator {
    if acc.state.winner.is_some() {
        return acc;
    }
    let loser = PlayerId::ALL
        .into_iter()
        .find(|&p| acc.state.players[p].hero.is_dead());
    if let Some(loser) = loser {
        let winner = loser.opponent();
        info!(%winner, turn = acc.state.turn_number, "match decided");
        acc.state.winner = Some(winner);
    }
    acc
}
