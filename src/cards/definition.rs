//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: cost, kind,
//! stats, keywords. A minion on the board copies what it needs from its
//! definition at creation time, so nothing in the match ever points back
//! into the registry to read mutable data.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Stable string identifier for a card definition.
///
/// Ordering is lexical; the AI uses it as its final tie-break.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey(pub String);

impl CardKey {
    /// Create a new card key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a card becomes when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Minion,
    Spell,
}

/// Minion keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// Enemy attacks must target a taunt minion while one is targetable.
    Taunt,
    /// Damage this minion deals in an attack heals its owner's hero.
    Lifesteal,
    /// Cannot be targeted by the opponent. Broken by attacking.
    Stealth,
    /// Absorbs the next hit completely.
    Shield,
    /// Cannot be reduced below 1 health outside its controller's turn.
    Resilient,
    /// Cannot be targeted by the opponent until revealed.
    Cloaked,
}

/// Fixed targeting class of a spell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellTarget {
    /// Resolves without a target.
    #[default]
    None,
    /// Heals a friendly minion.
    FriendlyMinion,
    /// Reveals any minion (clears stealth and cloak).
    AnyMinion,
    /// Deals damage to the enemy hero or an enemy minion.
    EnemyAny,
}

/// Effect queued when a minion dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deathrattle {
    /// Owner draws one card.
    DrawCard,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_duel::cards::{CardDefinition, Keyword};
///
/// let guard = CardDefinition::minion("shield_bearer", "Shield Bearer", 2, 1, 4)
///     .with_keyword(Keyword::Taunt);
///
/// assert!(guard.has_keyword(Keyword::Taunt));
/// assert_eq!(guard.health, Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique key for this card definition.
    pub key: CardKey,

    /// Card name (for display/debugging).
    pub name: String,

    /// Mana cost.
    pub cost: u8,

    /// Minion or spell.
    pub kind: CardKind,

    /// Attack for minions, `None` for spells.
    pub attack: Option<i32>,

    /// Health for minions, `None` for spells.
    pub health: Option<i32>,

    /// Keywords copied onto the minion when summoned.
    #[serde(default)]
    pub keywords: SmallVec<[Keyword; 4]>,

    /// Targeting class (spells only).
    #[serde(default)]
    pub target: SpellTarget,

    /// Effect run when the minion dies.
    #[serde(default)]
    pub deathrattle: Option<Deathrattle>,
}

impl CardDefinition {
    /// Create a minion definition.
    #[must_use]
    pub fn minion(
        key: impl Into<CardKey>,
        name: impl Into<String>,
        cost: u8,
        attack: i32,
        health: i32,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            cost,
            kind: CardKind::Minion,
            attack: Some(attack),
            health: Some(health),
            keywords: SmallVec::new(),
            target: SpellTarget::None,
            deathrattle: None,
        }
    }

    /// Create a spell definition.
    #[must_use]
    pub fn spell(
        key: impl Into<CardKey>,
        name: impl Into<String>,
        cost: u8,
        target: SpellTarget,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            cost,
            kind: CardKind::Spell,
            attack: None,
            health: None,
            keywords: SmallVec::new(),
            target,
            deathrattle: None,
        }
    }

    /// Add a keyword (builder pattern).
    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        if !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
        self
    }

    /// Set the deathrattle (builder pattern).
    #[must_use]
    pub fn with_deathrattle(mut self, deathrattle: Deathrattle) -> Self {
        self.deathrattle = Some(deathrattle);
        self
    }

    /// Check for a keyword.
    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.keywords.contains(&keyword)
    }

    #[must_use]
    pub fn is_minion(&self) -> bool {
        self.kind == CardKind::Minion
    }
}

impl From<String> for CardKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
