//! Shared type definitions for Power Counter.
//!
//! This crate is the single source of truth for the player data model used
//! by the store, core, and app crates.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe integer wrappers for player identifiers
//! - [`enums`] -- Small enumerations (counter [`Step`])
//! - [`player`] -- The [`Player`] record and level bounds
//! - [`roster`] -- The invariant-checked [`PlayerList`]
//! - [`palette`] -- The fixed card [`ColorPalette`]

pub mod enums;
pub mod ids;
pub mod palette;
pub mod player;
pub mod roster;

// Re-export all public types at crate root for convenience.
pub use enums::Step;
pub use ids::PlayerId;
pub use palette::{Color, ColorPalette, PALETTE, PALETTE_SIZE};
pub use player::{
    DEFAULT_COLOR_INDEX, DEFAULT_GEAR, MAX_LEVEL, MIN_LEVEL, Player, default_name, level_in_range,
};
pub use roster::{MAX_PLAYERS, MIN_PLAYERS, PlayerList, RosterError};
