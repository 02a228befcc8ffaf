//! The ordered player list and its invariants.
//!
//! A [`PlayerList`] always holds between [`MIN_PLAYERS`] and [`MAX_PLAYERS`]
//! players with pairwise distinct ids, each with a level in `1..=10` and a
//! valid palette index. The only way to build one is through
//! [`PlayerList::new`], which checks these, or [`PlayerList::default`], which
//! yields the single default player.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::ids::PlayerId;
use crate::palette::{ColorPalette, PALETTE_SIZE};
use crate::player::{MAX_LEVEL, MIN_LEVEL, Player, default_name, level_in_range};

/// Smallest allowed list size.
pub const MIN_PLAYERS: usize = 1;

/// Largest allowed list size.
pub const MAX_PLAYERS: usize = 6;

/// Reasons a sequence of players cannot form a [`PlayerList`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The list has no players.
    #[error("player list is empty")]
    Empty,

    /// The list has more players than allowed.
    #[error("player list has {count} players (max {MAX_PLAYERS})")]
    TooMany {
        /// Number of players supplied.
        count: usize,
    },

    /// Two players share an id.
    #[error("duplicate player id {id}")]
    DuplicateId {
        /// The repeated id.
        id: PlayerId,
    },

    /// A player's level is outside the allowed range.
    #[error("player {id} has level {level} (allowed {MIN_LEVEL}..={MAX_LEVEL})")]
    LevelOutOfRange {
        /// The offending player.
        id: PlayerId,
        /// The stored level.
        level: i32,
    },

    /// A player's card colour is not a palette index.
    #[error("player {id} has colour index {index} (palette has {PALETTE_SIZE})")]
    ColorOutOfRange {
        /// The offending player.
        id: PlayerId,
        /// The stored palette index.
        index: usize,
    },
}

/// Ordered, invariant-checked list of players.
///
/// Order is insertion order, which is also display order. Serializes as a
/// bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayerList(Vec<Player>);

impl PlayerList {
    /// Build a list, checking size, id uniqueness, and each player's level
    /// and colour.
    ///
    /// # Errors
    ///
    /// Returns the [`RosterError`] for the first invariant that does not hold.
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        if players.is_empty() {
            return Err(RosterError::Empty);
        }
        if players.len() > MAX_PLAYERS {
            return Err(RosterError::TooMany {
                count: players.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for player in &players {
            if !seen.insert(player.id) {
                return Err(RosterError::DuplicateId { id: player.id });
            }
            if !level_in_range(player.level) {
                return Err(RosterError::LevelOutOfRange {
                    id: player.id,
                    level: player.level,
                });
            }
            if !ColorPalette.contains(player.card_color_index) {
                return Err(RosterError::ColorOutOfRange {
                    id: player.id,
                    index: player.card_color_index,
                });
            }
        }
        Ok(Self(players))
    }

    /// The players in display order.
    pub fn players(&self) -> &[Player] {
        &self.0
    }

    /// Iterate over the players in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    /// Number of players.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed list; present for API symmetry.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether another player can be added.
    pub const fn is_full(&self) -> bool {
        self.0.len() >= MAX_PLAYERS
    }

    /// Whether a player can be removed.
    pub const fn at_minimum(&self) -> bool {
        self.0.len() <= MIN_PLAYERS
    }

    /// Look up a player by id.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Whether a player with `id` is present.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Id for the next new player: one past the current maximum.
    ///
    /// Returns `None` only if the maximum id is `u32::MAX`.
    pub fn next_id(&self) -> Option<PlayerId> {
        self.0
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(Some(PlayerId(1)), PlayerId::next)
    }

    /// Consume the list, returning the players.
    pub fn into_vec(self) -> Vec<Player> {
        self.0
    }
}

impl Default for PlayerList {
    /// The single-player list used on first start, after a reset, and as the
    /// fallback for unreadable persisted data.
    fn default() -> Self {
        Self(vec![Player::new(PlayerId(1), default_name(1))])
    }
}

impl TryFrom<Vec<Player>> for PlayerList {
    type Error = RosterError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        Self::new(players)
    }
}

impl<'a> IntoIterator for &'a PlayerList {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
