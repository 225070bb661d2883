//! Match state.
//!
//! ## GameState
//!
//! The complete, authoritative state of one match:
//! - Active seat, turn counter, winner
//! - Per-seat `PlayerState` (hero, deck, hand, board, mana)
//! - Full event log
//! - RNG state and id counters
//!
//! Uses `im` persistent vectors for the event log and decks so that the
//! reducer can clone the whole state on every call at O(1) cost. Hands and
//! boards are small and bounded, so they live in `SmallVec`s.
//!
//! A `GameState` is never mutated from the caller's perspective: the
//! reducer clones it, transforms the clone, and returns the clone.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{MatchConfig, BOARD_CAP, HAND_CAP};
use super::entity::InstanceId;
use super::event::GameEvent;
use super::intent::TargetSpec;
use super::player::{PlayerId, PlayerMap};
use super::rng::{shuffle, GameRngState};
use crate::cards::{CardDefinition, CardKey, Deathrattle, Keyword};

/// A seat's hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroState {
    /// Hero identity.
    pub hero: CardKey,
    pub health: i32,
    pub max_health: i32,
    /// Number of empty-deck draws so far; each one deals this much damage.
    pub fatigue: i32,
    /// Hero power key, looked up in the registry.
    pub hero_power: CardKey,
    pub hero_power_used: bool,
}

impl HeroState {
    #[must_use]
    pub fn new(hero: CardKey, hero_power: CardKey, health: i32) -> Self {
        Self {
            hero,
            health,
            max_health: health,
            fatigue: 0,
            hero_power,
            hero_power_used: false,
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// A card in hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    pub id: InstanceId,
    pub card: CardKey,
}

/// A minion on the board.
///
/// Keyword flags are copied from the card definition when summoned and
/// can change afterwards (a shield is consumed, stealth is revealed).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinionInstance {
    pub id: InstanceId,
    pub card: CardKey,
    pub owner: PlayerId,
    pub attack: i32,
    pub health: i32,
    pub max_health: i32,
    /// Consumed by each declared attack, restored at the owner's turn start.
    pub can_attack: bool,
    /// True from summon until the owner's next turn start.
    pub summoning_sick: bool,
    pub taunt: bool,
    pub lifesteal: bool,
    pub stealth: bool,
    pub shield: bool,
    pub resilient: bool,
    pub cloaked: bool,
    /// Per-turn transient: set when the minion attacks.
    pub attacked_this_turn: bool,
    pub deathrattle: Option<Deathrattle>,
}

impl MinionInstance {
    /// Summon a minion from its definition: sick and unable to attack.
    ///
    /// The registry only accepts minions with positive health.
    #[must_use]
    pub fn from_definition(id: InstanceId, owner: PlayerId, def: &CardDefinition) -> Self {
        let health = def.health.unwrap_or(1);
        Self {
            id,
            card: def.key.clone(),
            owner,
            attack: def.attack.unwrap_or(0),
            health,
            max_health: health,
            can_attack: false,
            summoning_sick: true,
            taunt: def.has_keyword(Keyword::Taunt),
            lifesteal: def.has_keyword(Keyword::Lifesteal),
            stealth: def.has_keyword(Keyword::Stealth),
            shield: def.has_keyword(Keyword::Shield),
            resilient: def.has_keyword(Keyword::Resilient),
            cloaked: def.has_keyword(Keyword::Cloaked),
            attacked_this_turn: false,
            deathrattle: def.deathrattle,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Whether the opposing seat may choose this minion as a target.
    #[must_use]
    pub fn is_targetable(&self) -> bool {
        self.is_alive() && !self.stealth && !self.cloaked
    }

    /// Whether this minion may declare an attack right now.
    #[must_use]
    pub fn ready_to_attack(&self) -> bool {
        self.can_attack && !self.summoning_sick
    }

    /// Target spec pointing at this minion.
    #[must_use]
    pub fn target(&self) -> TargetSpec {
        TargetSpec::Minion {
            id: self.id,
            owner: self.owner,
        }
    }
}

/// Everything one seat owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub hero: HeroState,
    /// Shuffled decklist. Cards are never removed; `draw_index` advances.
    pub deck: Vector<CardKey>,
    pub draw_index: usize,
    pub hand: SmallVec<[HandCard; HAND_CAP]>,
    pub board: SmallVec<[MinionInstance; BOARD_CAP]>,
    pub mana: u8,
    pub max_mana: u8,
}

impl PlayerState {
    #[must_use]
    pub fn new(hero: HeroState, deck: Vector<CardKey>) -> Self {
        Self {
            hero,
            deck,
            draw_index: 0,
            hand: SmallVec::new(),
            board: SmallVec::new(),
            mana: 0,
            max_mana: 0,
        }
    }

    /// Cards left to draw.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len().saturating_sub(self.draw_index)
    }

    #[must_use]
    pub fn hand_card(&self, id: InstanceId) -> Option<&HandCard> {
        self.hand.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn minion(&self, id: InstanceId) -> Option<&MinionInstance> {
        self.board.iter().find(|m| m.id == id)
    }

    pub fn minion_mut(&mut self, id: InstanceId) -> Option<&mut MinionInstance> {
        self.board.iter_mut().find(|m| m.id == id)
    }

    /// True when the board holds a taunt minion the opponent can target.
    #[must_use]
    pub fn has_targetable_taunt(&self) -> bool {
        self.board.iter().any(|m| m.taunt && m.is_targetable())
    }
}

/// Complete match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Active seat.
    pub turn: PlayerId,

    /// Turn counter (0 before the first turn, 1 on the first turn).
    pub turn_number: u32,

    pub players: PlayerMap<PlayerState>,

    /// Set once a hero dies; the state is terminal afterwards.
    pub winner: Option<PlayerId>,

    /// Full ordered event log.
    pub events: Vector<GameEvent>,

    pub rng: GameRngState,

    /// Next id for hand cards and minions.
    pub next_instance_id: InstanceId,

    /// Id the next logged event will get.
    pub next_event_id: u64,
}

impl GameState {
    /// Create the pre-game state for a seed: heroes at full health, decks
    /// shuffled (Player first, then Enemy), hands and boards empty, no turn
    /// started yet.
    ///
    /// The reducer's `initial_state` draws opening hands and begins the
    /// first turn on top of this.
    #[must_use]
    pub fn new(seed: u32, config: &MatchConfig) -> Self {
        let mut rng = GameRngState::new(seed);
        let mut decks = PlayerMap::new(|_| Vector::new());
        for player in PlayerId::ALL {
            let (shuffled, next) = shuffle(config.decks[player].clone(), rng);
            rng = next;
            decks[player] = shuffled.into_iter().collect::<Vector<_>>();
        }

        let players = PlayerMap::new(|p| {
            let loadout = &config.heroes[p];
            let hero = HeroState::new(
                loadout.hero.clone(),
                loadout.hero_power.clone(),
                config.starting_health,
            );
            PlayerState::new(hero, decks[p].clone())
        });

        Self {
            turn: PlayerId::Player,
            turn_number: 0,
            players,
            winner: None,
            events: Vector::new(),
            rng,
            next_instance_id: InstanceId(0),
            next_event_id: 0,
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// True once a winner is set.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Allocate a new instance id.
    pub fn alloc_instance(&mut self) -> InstanceId {
        let id = self.next_instance_id;
        self.next_instance_id = id.next();
        id
    }

    /// Events with id `since` or later. Event ids equal their log index.
    pub fn events_since(&self, since: u64) -> impl Iterator<Item = &GameEvent> {
        let skip = usize::try_from(since).unwrap_or(usize::MAX);
        self.events.iter().skip(skip)
    }

    /// Find a minion on either board.
    #[must_use]
    pub fn find_minion(&self, id: InstanceId) -> Option<&MinionInstance> {
        PlayerId::ALL
            .into_iter()
            .find_map(|p| self.players[p].minion(id))
    }
}
