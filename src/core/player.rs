//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! A match always has exactly two seats: `Player` (moves first) and `Enemy`.
//!
//! ## PlayerMap
//!
//! Per-seat storage indexed by `PlayerId`. Every field that differs between
//! the two seats lives in a `PlayerMap` so rules code never branches on
//! which seat is active to pick a field.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// The seat that takes the first turn.
    Player,
    /// The second seat (usually the AI).
    Enemy,
}

impl PlayerId {
    /// Both seats in fixed order: `Player`, then `Enemy`.
    pub const ALL: [PlayerId; 2] = [PlayerId::Player, PlayerId::Enemy];

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player => 0,
            PlayerId::Enemy => 1,
        }
    }

    /// The other seat.
    ///
    /// ```
    /// use rust_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::Player.opponent(), PlayerId::Enemy);
    /// assert_eq!(PlayerId::Enemy.opponent(), PlayerId::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Player => PlayerId::Enemy,
            PlayerId::Enemy => PlayerId::Player,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Player => write!(f, "player"),
            PlayerId::Enemy => write!(f, "enemy"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_duel::core::{PlayerId, PlayerMap};
///
/// let mut health: PlayerMap<i32> = PlayerMap::with_value(30);
/// health[PlayerId::Enemy] -= 4;
///
/// assert_eq!(health[PlayerId::Player], 30);
/// assert_eq!(health[PlayerId::Enemy], 26);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::Player), factory(PlayerId::Enemy)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::Player.index(), 0);
        assert_eq!(PlayerId::Enemy.index(), 1);
        assert_eq!(format!("{}", PlayerId::Enemy), "enemy");
    }

    #[test]
    fn test_opponent_is_involution() {
        for p in PlayerId::ALL {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::Player], 0);
        assert_eq!(map[PlayerId::Enemy], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();

        map[PlayerId::Player] = 10;
        map[PlayerId::Enemy] = 20;

        assert_eq!(map[PlayerId::Player], 10);
        assert_eq!(map[PlayerId::Enemy], 20);
    }

    #[test]
    fn test_player_map_iter_order() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::Player, &0), (PlayerId::Enemy, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
