//! Card system: definitions, hero powers and the registry.
//!
//! ## Key Types
//!
//! - `CardKey`: Stable string identifier for card and hero power definitions
//! - `CardDefinition`: Static card data (cost, kind, stats, keywords)
//! - `HeroPowerDefinition`: Static hero power data
//! - `CardRegistry`: Read-only lookup passed explicitly to the engine
//!
//! `standard` provides a built-in set and starter deck.

pub mod definition;
pub mod hero_power;
pub mod registry;
pub mod standard;

pub use definition::{CardDefinition, CardKey, CardKind, Deathrattle, Keyword, SpellTarget};
pub use hero_power::{HeroPowerDefinition, PowerTarget};
pub use registry::{CardRegistry, RegistryError};
