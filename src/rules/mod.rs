//! Match rules.
//!
//! `Reducer` is the only entry point: it validates an `Intent` and, if
//! legal, produces the next `GameState` plus the events that occurred.
//! The submodules are the resolution pipeline it drives:
//! - `turn`: turn start/end, draw, burn, fatigue
//! - `play`: cards and hero powers
//! - `combat`: attacks and the shared damage function
//! - `death`: death resolution, deathrattles, win detection

pub mod accumulator;
mod combat;
mod death;
pub mod engine;
mod play;
pub mod reducer;
mod turn;

pub use accumulator::{Accumulator, Transition};
pub use combat::slam_profile;
pub use engine::RulesEngine;
pub use reducer::{Reducer, Rejection};
