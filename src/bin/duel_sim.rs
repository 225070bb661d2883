//! Headless AI-vs-AI duel simulator.
//!
//! Usage: cargo run --release --bin duel-sim -- --matches 100 --seed 7

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_duel::ai::{play_match, GreedyAi, IntentPolicy, PassPolicy, UniformPolicy};
use rust_duel::cards::standard;
use rust_duel::{GameRng, MatchConfig, PlayerId, PlayerMap, Reducer, Replay};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    Greedy,
    Uniform,
    Pass,
}

impl PolicyKind {
    fn policy(self) -> &'static dyn IntentPolicy {
        match self {
            PolicyKind::Greedy => &GreedyAi,
            PolicyKind::Uniform => &UniformPolicy,
            PolicyKind::Pass => &PassPolicy,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "duel-sim", about = "Run AI-vs-AI duels through the match reducer")]
struct Args {
    /// Seed of the first match; match `i` uses `seed + i`.
    #[arg(long, default_value_t = 1337)]
    seed: u32,

    /// Number of matches to run.
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Intent limit per match.
    #[arg(long, default_value_t = 2_000)]
    max_intents: usize,

    /// Policy for the Player seat.
    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    player_ai: PolicyKind,

    /// Policy for the Enemy seat.
    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    enemy_ai: PolicyKind,

    /// JSON match config; defaults to the built-in rules and starter decks.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the replay of the last match here.
    #[arg(long)]
    replay_out: Option<PathBuf>,

    /// Rebuild a stored replay and print its result instead of simulating.
    #[arg(long, conflicts_with = "replay_out")]
    replay_in: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MatchConfig::from_json(&fs::read_to_string(path)?)?,
        None => MatchConfig::default(),
    };
    let rules = Reducer::validated(standard::registry()?, config)?;

    if let Some(path) = &args.replay_in {
        let replay = Replay::from_bytes(&fs::read(path)?)?;
        let state = replay.reconstruct(&rules);
        println!(
            "replay seed={} intents={} turn={} winner={}",
            replay.seed,
            replay.intents.len(),
            state.turn_number,
            state.winner.map_or_else(|| "none".to_string(), |w| w.to_string())
        );
        return Ok(());
    }

    let policies: PlayerMap<&dyn IntentPolicy> = PlayerMap::new(|p| match p {
        PlayerId::Player => args.player_ai.policy(),
        PlayerId::Enemy => args.enemy_ai.policy(),
    });

    let mut wins = PlayerMap::with_value(0u32);
    let mut unfinished = 0u32;
    let mut last = None;
    for i in 0..args.matches {
        let seed = args.seed.wrapping_add(i);
        let mut rng = GameRng::new(seed);
        let outcome = play_match(&rules, &policies, seed, &mut rng, args.max_intents);
        match outcome.winner() {
            Some(winner) => wins[winner] += 1,
            None => unfinished += 1,
        }
        last = Some(Replay::from_outcome(seed, &outcome));
    }

    info!(
        matches = args.matches,
        player_wins = wins[PlayerId::Player],
        enemy_wins = wins[PlayerId::Enemy],
        unfinished,
        "simulation finished"
    );
    println!(
        "matches={} player={} enemy={} unfinished={}",
        args.matches,
        wins[PlayerId::Player],
        wins[PlayerId::Enemy],
        unfinished
    );

    if let (Some(path), Some(replay)) = (&args.replay_out, last) {
        fs::write(path, replay.to_bytes()?)?;
        info!(path = %path.display(), "replay written");
    }
    Ok(())
}
