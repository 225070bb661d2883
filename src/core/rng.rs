//! Deterministic random number generation for match setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Replayable**: The whole generator is one `u32`, stored in `GameState`
//! - **Pure helpers**: `next_rng` and `shuffle` take a state and return the
//!   successor state, so they can be threaded through the reducer by value
//!
//! The generator is a 32-bit linear congruential generator
//! (multiplier 1664525, increment 1013904223, modulus 2^32). Match replay
//! depends on this exact sequence, so the constants must never change.
//!
//! ```
//! use rust_duel::core::rng::{next_rng, GameRngState};
//!
//! let (a, s1) = next_rng(GameRngState::new(1337));
//! let (b, _) = next_rng(GameRngState::new(1337));
//!
//! assert_eq!(a, b);
//! assert!((0.0..1.0).contains(&a));
//! assert_ne!(s1, GameRngState::new(1337));
//! ```

use rand::RngCore;
use serde::{Deserialize, Serialize};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// Serializable generator state. The full state is a single `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRngState(pub u32);

impl GameRngState {
    /// Create a state from a seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Get the raw state value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    const fn step(self) -> Self {
        Self(self.0.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT))
    }
}

/// Advance the generator once.
///
/// Returns a value in `[0, 1)` and the successor state.
#[must_use]
pub fn next_rng(state: GameRngState) -> (f64, GameRngState) {
    let next = state.step();
    (f64::from(next.0) / MODULUS, next)
}

/// Fisher–Yates shuffle driven by `next_rng`.
///
/// Walks from the last index down, swapping index `i` with
/// `floor(next * (i + 1))`. Inputs of length 0 or 1 are returned untouched
/// and consume no randomness.
#[must_use]
pub fn shuffle<T>(mut items: Vec<T>, state: GameRngState) -> (Vec<T>, GameRngState) {
    let mut state = state;
    for i in (1..items.len()).rev() {
        let (value, next) = next_rng(state);
        state = next;
        let j = (value * (i + 1) as f64) as usize;
        items.swap(i, j);
    }
    (items, state)
}

/// Mutable wrapper around `GameRngState` for hosts that prefer `&mut`
/// style or want to drive `rand` APIs with the match generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRng {
    state: GameRngState,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameRngState::new(seed),
        }
    }

    /// Generate a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let (value, next) = next_rng(self.state);
        self.state = next;
        value
    }

    /// Shuffle a slice in place, consuming the same values as [`shuffle`].
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64) as usize;
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.state
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: GameRngState) -> Self {
        Self { state }
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.step();
        self.state.0
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
