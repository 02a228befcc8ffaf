//! The state controller: the only component that mutates the player list.
//!
//! Each operation reads the current list, derives a new one that satisfies
//! every list invariant, and hands it to the [`PlayerRepository`]. Invalid
//! input (out-of-range level, blank name, non-numeric gear text, unknown id)
//! is rejected silently: the call returns `None` and nothing changes.
//!
//! Read, derive, and replace run as one atomic step inside
//! [`PlayerRepository::update`], so mutations arriving from several tasks
//! cannot lose each other's changes.

use power_counter_types::{
    ColorPalette, Player, PlayerId, PlayerList, Step, default_name, level_in_range,
};
use tokio::sync::watch;
use tracing::debug;

use crate::repository::{PlayerRepository, WriteReceipt};

/// Mutation API over the player list.
#[derive(Debug)]
pub struct PlayerController {
    repository: PlayerRepository,
}

impl PlayerController {
    /// Create a controller that writes through `repository`.
    pub const fn new(repository: PlayerRepository) -> Self {
        Self { repository }
    }

    /// The underlying repository.
    pub const fn repository(&self) -> &PlayerRepository {
        &self.repository
    }

    /// Snapshot of the current list.
    pub fn players(&self) -> PlayerList {
        self.repository.current()
    }

    /// Subscribe to list changes. See [`PlayerRepository::observe`].
    pub fn subscribe(&self) -> watch::Receiver<PlayerList> {
        self.repository.observe()
    }

    /// Wait for all queued writes. See [`PlayerRepository::flush`].
    pub async fn flush(&self) {
        self.repository.flush().await;
    }

    // -----------------------------------------------------------------------
    // List shape
    // -----------------------------------------------------------------------

    /// Append a new default player. No-op when the list is full.
    pub fn add_player(&self) -> Option<WriteReceipt> {
        let receipt = self.repository.update(with_player_added);
        if receipt.is_none() {
            debug!("add_player rejected: list is full");
        }
        receipt
    }

    /// Replace the list with the single default player.
    pub fn reset_all(&self) -> WriteReceipt {
        debug!("Resetting player list");
        self.repository.save(PlayerList::default())
    }

    /// Remove the player with `id`. No-op for the last player or an unknown id.
    pub fn delete_player(&self, id: PlayerId) -> Option<WriteReceipt> {
        let receipt = self
            .repository
            .update(|list| with_player_removed(list, id));
        if receipt.is_none() {
            debug!(%id, "delete_player rejected");
        }
        receipt
    }

    // -----------------------------------------------------------------------
    // Level
    // -----------------------------------------------------------------------

    /// Set the level. Values outside `1..=10` are rejected, not clamped.
    pub fn set_level(&self, id: PlayerId, level: i32) -> Option<WriteReceipt> {
        if !level_in_range(level) {
            debug!(%id, level, "set_level rejected: out of range");
            return None;
        }
        self.edit(id, |p| Some(Player { level, ..p.clone() }))
    }

    /// Move the level one step. No-op at either bound.
    pub fn step_level(&self, id: PlayerId, step: Step) -> Option<WriteReceipt> {
        self.edit(id, |p| {
            let level = step.apply(p.level).filter(|l| level_in_range(*l))?;
            Some(Player { level, ..p.clone() })
        })
    }

    // -----------------------------------------------------------------------
    // Gear
    // -----------------------------------------------------------------------

    /// Set the gear bonus. Any integer is accepted.
    pub fn set_gear(&self, id: PlayerId, gear: i32) -> Option<WriteReceipt> {
        self.edit(id, |p| Some(Player { gear, ..p.clone() }))
    }

    /// Set the gear bonus from free text. Empty or non-numeric text is rejected.
    pub fn set_gear_text(&self, id: PlayerId, text: &str) -> Option<WriteReceipt> {
        let Ok(gear) = text.trim().parse::<i32>() else {
            debug!(%id, text, "set_gear_text rejected: not an integer");
            return None;
        };
        self.set_gear(id, gear)
    }

    /// Move the gear bonus one step. Only integer overflow is rejected.
    pub fn step_gear(&self, id: PlayerId, step: Step) -> Option<WriteReceipt> {
        self.edit(id, |p| {
            let gear = step.apply(p.gear)?;
            Some(Player { gear, ..p.clone() })
        })
    }

    // -----------------------------------------------------------------------
    // Name and colour
    // -----------------------------------------------------------------------

    /// Rename a player. Blank names are rejected; others are stored as given.
    pub fn set_name(&self, id: PlayerId, name: &str) -> Option<WriteReceipt> {
        if name.trim().is_empty() {
            debug!(%id, "set_name rejected: blank");
            return None;
        }
        let name = name.to_owned();
        self.edit(id, move |p| {
            Some(Player {
                name,
                ..p.clone()
            })
        })
    }

    /// Pick a card colour by palette index.
    ///
    /// The presentation layer only offers valid indices; an out-of-range
    /// index is ignored.
    pub fn set_color(&self, id: PlayerId, index: usize) -> Option<WriteReceipt> {
        if !ColorPalette.contains(index) {
            debug!(%id, index, "set_color rejected: not a palette index");
            return None;
        }
        self.edit(id, |p| {
            Some(Player {
                card_color_index: index,
                ..p.clone()
            })
        })
    }

    fn edit<F>(&self, id: PlayerId, edit: F) -> Option<WriteReceipt>
    where
        F: FnOnce(&Player) -> Option<Player>,
    {
        self.repository
            .update(|list| with_player_edited(list, id, edit))
    }
}

/// The list with one more default player, or `None` if it is full.
fn with_player_added(list: &PlayerList) -> Option<PlayerList> {
    if list.is_full() {
        return None;
    }
    let id = list.next_id()?;
    let position = list.len().checked_add(1)?;
    let mut players = list.players().to_vec();
    players.push(Player::new(id, default_name(position)));
    PlayerList::new(players).ok()
}

/// The list without `id`, or `None` if that would empty it or `id` is absent.
fn with_player_removed(list: &PlayerList, id: PlayerId) -> Option<PlayerList> {
    if list.at_minimum() || !list.contains(id) {
        return None;
    }
    let players = list.iter().filter(|p| p.id != id).cloned().collect();
    PlayerList::new(players).ok()
}

/// The list with `id` replaced by `edit`'s result.
///
/// `None` if `id` is absent, `edit` rejects, or nothing actually changed.
fn with_player_edited<F>(list: &PlayerList, id: PlayerId, edit: F) -> Option<PlayerList>
where
    F: FnOnce(&Player) -> Option<Player>,
{
    let current = list.get(id)?;
    let updated = edit(current)?;
    if &updated == current {
        return None;
    }
    let mut players = list.players().to_vec();
    let slot = players.iter_mut().find(|p| p.id == id)?;
    *slot = updated;
    PlayerList::new(players).ok()
}
