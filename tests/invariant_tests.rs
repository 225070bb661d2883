//! Property tests over random intent sequences.
//!
//! Every step picks from the full candidate list, legal or not, so the same
//! run checks both the state invariants and that refused intents leave the
//! state untouched.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_duel::cards::{standard, CardKey};
use rust_duel::core::{next_rng, shuffle, GameRngState, MANA_CAP};
use rust_duel::{
    GameState, HandCard, InstanceId, Intent, MatchConfig, MinionInstance, PlayerId, Reducer, RulesEngine,
    TargetSpec,
};

fn reducer() -> Reducer {
    Reducer::new(standard::registry().unwrap(), MatchConfig::default())
}

fn assert_invariants(state: &GameState) {
    let mut ids = HashSet::new();
    for (player, seat) in state.players.iter() {
        assert!(seat.mana <= seat.max_mana, "{player}: mana above max");
        assert!(seat.max_mana <= MANA_CAP, "{player}: max mana above cap");
        assert!(seat.board.len() <= 7, "{player}: board overflow");
        assert!(seat.hand.len() <= 10, "{player}: hand overflow");
        for id in seat.hand.iter().map(|c| c.id).chain(seat.board.iter().map(|m| m.id)) {
            assert!(ids.insert(id), "duplicate instance id {id}");
        }
        assert!(seat.board.iter().all(|m| m.health > 0), "{player}: dead minion left on board");
    }
    for (index, event) in state.events.iter().enumerate() {
        assert_eq!(event.id, index as u64);
    }
    assert_eq!(state.next_event_id, state.events.len() as u64);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_random_play_keeps_invariants(seed in any::<u32>(), picks in prop::collection::vec(any::<usize>(), 0..150)) {
        let rules = reducer();
        let mut state = rules.initial_state(seed);
        assert_invariants(&state);

        for pick in picks {
            let seat = if pick % 7 == 0 { state.turn.opponent() } else { state.turn };
            let candidates = rules.candidate_intents(&state, seat);
            let intent = candidates[pick % candidates.len()];

            let next = rules.apply(&state, &intent);
            if rules.is_legal(&state, &intent) {
                prop_assert_ne!(&next, &state);
            } else {
                prop_assert_eq!(&next, &state);
            }
            assert_invariants(&next);
            if state.winner.is_some() {
                prop_assert_eq!(next.winner, state.winner);
            }
            state = next;
        }
    }

    #[test]
    fn test_construction_deterministic(seed in any::<u32>()) {
        let rules = reducer();
        prop_assert_eq!(rules.initial_state(seed), rules.initial_state(seed));
    }

    #[test]
    fn test_shuffle_is_pure_permutation(items in prop::collection::vec(0u8..50, 0..40), seed in any::<u32>()) {
        let (first, first_rng) = shuffle(items.clone(), GameRngState::new(seed));
        let (second, second_rng) = shuffle(items.clone(), GameRngState::new(seed));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first_rng, second_rng);

        let mut sorted = first;
        sorted.sort_unstable();
        let mut expected = items;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn test_rng_value_in_unit_interval(seed in any::<u32>()) {
        let (value, _) = next_rng(GameRngState::new(seed));
        prop_assert!((0.0..1.0).contains(&value));
    }
}

// =============================================================================
// No-op Safety per Illegal Intent Class
// =============================================================================

fn quiet() -> (Reducer, GameState) {
    let rules = Reducer::new(standard::registry().unwrap(), MatchConfig::default().with_opening_hand(0));
    let state = rules.initial_state(31);
    (rules, state)
}

fn give(state: &mut GameState, card: &str) -> InstanceId {
    let id = state.alloc_instance();
    state.player_mut(PlayerId::Player).hand.push(HandCard {
        id,
        card: CardKey::from(card),
    });
    id
}

fn play(hand_id: InstanceId, target: Option<TargetSpec>) -> Intent {
    Intent::PlayCard {
        player: PlayerId::Player,
        hand_id,
        target,
    }
}

#[test]
fn test_wrong_turn_noop() {
    let (rules, state) = quiet();
    assert_eq!(rules.apply(&state, &Intent::EndTurn { player: PlayerId::Enemy }), state);
}

#[test]
fn test_insufficient_mana_noop() {
    let (rules, mut state) = quiet();
    let ogre = give(&mut state, "ogre_brute");
    assert_eq!(rules.apply(&state, &play(ogre, None)), state);
}

#[test]
fn test_missing_target_noop() {
    let (rules, mut state) = quiet();
    let bolt = give(&mut state, "arcane_bolt");
    let ghost = TargetSpec::Minion {
        id: InstanceId(4242),
        owner: PlayerId::Enemy,
    };
    assert_eq!(rules.apply(&state, &play(bolt, Some(ghost))), state);
    assert_eq!(rules.apply(&state, &play(bolt, None)), state);
}

#[test]
fn test_dead_target_noop() {
    let (rules, mut state) = quiet();
    let id = state.alloc_instance();
    let def = rules.registry().get(&CardKey::from("river_croc")).unwrap().clone();
    let mut corpse = MinionInstance::from_definition(id, PlayerId::Enemy, &def);
    corpse.health = 0;
    state.player_mut(PlayerId::Enemy).board.push(corpse);
    let bolt = give(&mut state, "arcane_bolt");

    let target = Some(TargetSpec::Minion {
        id,
        owner: PlayerId::Enemy,
    });
    assert_eq!(rules.apply(&state, &play(bolt, target)), state);
}

#[test]
fn test_full_board_noop() {
    let (rules, mut state) = quiet();
    let def = rules.registry().get(&CardKey::from("spark_imp")).unwrap().clone();
    for _ in 0..7 {
        let id = state.alloc_instance();
        state
            .player_mut(PlayerId::Player)
            .board
            .push(MinionInstance::from_definition(id, PlayerId::Player, &def));
    }
    let imp = give(&mut state, "spark_imp");
    assert_eq!(rules.apply(&state, &play(imp, None)), state);
}

#[test]
fn test_power_reuse_noop() {
    let (rules, mut state) = quiet();
    let seat = state.player_mut(PlayerId::Player);
    seat.max_mana = 4;
    seat.mana = 4;
    let power = Intent::UseHeroPower {
        player: PlayerId::Player,
        target: None,
    };

    let used = rules.apply(&state, &power);
    assert_ne!(used, state);
    assert_eq!(rules.apply(&used, &power), used);
}

#[test]
fn test_unknown_ids_noop() {
    let (rules, mut state) = quiet();
    assert_eq!(rules.apply(&state, &play(InstanceId(777), None)), state);

    let mystery = give(&mut state, "not_a_card");
    assert_eq!(rules.apply(&state, &play(mystery, None)), state);

    let attack = Intent::DeclareAttack {
        player: PlayerId::Player,
        attacker_id: InstanceId(778),
        target: TargetSpec::Hero { player: PlayerId::Enemy },
    };
    assert_eq!(rules.apply(&state, &attack), state);
}
