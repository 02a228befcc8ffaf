//! The player record shown on each card.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;

/// Lowest level a player can hold.
pub const MIN_LEVEL: i32 = 1;

/// Highest level a player can hold.
pub const MAX_LEVEL: i32 = 10;

/// Gear value of a freshly created player.
pub const DEFAULT_GEAR: i32 = 0;

/// Palette index of a freshly created player.
pub const DEFAULT_COLOR_INDEX: usize = 0;

/// A single player card.
///
/// Field names serialize in camel case (`cardColorIndex`) to match the
/// persisted layout. Every field is required on decode; a record with a
/// missing field is treated as corrupt by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Identifier, unique within the list.
    pub id: PlayerId,
    /// Display name. Never blank once stored.
    pub name: String,
    /// Level in `MIN_LEVEL..=MAX_LEVEL`.
    pub level: i32,
    /// Gear bonus. Unconstrained.
    pub gear: i32,
    /// Index into the colour palette.
    pub card_color_index: usize,
}

impl Player {
    /// Create a player with default level, gear, and colour.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level: MIN_LEVEL,
            gear: DEFAULT_GEAR,
            card_color_index: DEFAULT_COLOR_INDEX,
        }
    }

    /// Combined strength: level plus gear.
    ///
    /// Widened to `i64` so extreme gear values cannot overflow.
    pub fn total_power(&self) -> i64 {
        i64::from(self.level).saturating_add(i64::from(self.gear))
    }
}

/// Whether `level` is an accepted level value.
pub const fn level_in_range(level: i32) -> bool {
    level >= MIN_LEVEL && level <= MAX_LEVEL
}

/// Default name for the player at 1-based `position`.
pub fn default_name(position: usize) -> String {
    format!("Player {position}")
}
