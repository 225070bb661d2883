//! AI-vs-AI play and replay tests.

use rust_duel::ai::{play_match, GreedyAi, IntentPolicy, PassPolicy, UniformPolicy};
use rust_duel::cards::standard;
use rust_duel::{GameRng, GameState, Intent, MatchConfig, PlayerId, PlayerMap, Reducer, Replay, RulesEngine};

fn reducer() -> Reducer {
    Reducer::new(standard::registry().unwrap(), MatchConfig::default())
}

/// Greedy-vs-greedy without the driver's fallback, asserting every choice.
fn greedy_match(rules: &Reducer, seed: u32, limit: usize) -> (GameState, Vec<Intent>) {
    let ai = GreedyAi::new();
    let mut state = rules.initial_state(seed);
    let mut intents = Vec::new();
    while let Some(intent) = ai.choose_intent(rules, &state) {
        assert!(
            rules.is_legal(&state, &intent),
            "seed {seed}: greedy chose illegal {intent:?}"
        );
        state = rules.apply(&state, &intent);
        intents.push(intent);
        assert!(intents.len() < limit, "seed {seed}: match did not finish");
    }
    (state, intents)
}

// =============================================================================
// Greedy AI
// =============================================================================

#[test]
fn test_greedy_matches_terminate_with_legal_intents() {
    let rules = reducer();
    for seed in 0..20 {
        let (state, _) = greedy_match(&rules, seed, 5_000);
        assert!(state.winner.is_some(), "seed {seed}: no winner");
    }
}

#[test]
fn test_greedy_is_deterministic() {
    let rules = reducer();
    let (first, first_intents) = greedy_match(&rules, 1337, 5_000);
    let (second, second_intents) = greedy_match(&rules, 1337, 5_000);
    assert_eq!(first, second);
    assert_eq!(first_intents, second_intents);
}

#[test]
fn test_greedy_beats_passing() {
    let rules = reducer();
    let greedy: &dyn IntentPolicy = &GreedyAi;
    let pass: &dyn IntentPolicy = &PassPolicy;
    let policies = PlayerMap::new(|p| match p {
        PlayerId::Player => greedy,
        PlayerId::Enemy => pass,
    });

    let mut rng = GameRng::new(0);
    let outcome = play_match(&rules, &policies, 5, &mut rng, 5_000);
    assert_eq!(outcome.winner(), Some(PlayerId::Player));
}

// =============================================================================
// Replay
// =============================================================================

#[test]
fn test_replay_reconstructs_driven_match() {
    let rules = reducer();
    let policies: PlayerMap<&dyn IntentPolicy> = PlayerMap::with_value(&UniformPolicy as &dyn IntentPolicy);

    for seed in [3u32, 77, 1337] {
        let mut rng = GameRng::new(seed);
        let outcome = play_match(&rules, &policies, seed, &mut rng, 400);
        let replay = Replay::from_outcome(seed, &outcome);

        assert_eq!(replay.reconstruct(&rules), outcome.state);
    }
}

#[test]
fn test_replay_survives_bincode() {
    let rules = reducer();
    let (state, intents) = greedy_match(&rules, 42, 5_000);
    let replay = Replay { seed: 42, intents };

    let bytes = replay.to_bytes().unwrap();
    let decoded = Replay::from_bytes(&bytes).unwrap();

    assert_eq!(decoded, replay);
    assert_eq!(decoded.reconstruct(&rules), state);
}

#[test]
fn test_state_serializes_to_json() {
    let rules = reducer();
    let (state, _) = greedy_match(&rules, 9, 5_000);

    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
