//! JSON codec for the persisted player list.
//!
//! The list is stored as a JSON array of player objects:
//!
//! ```json
//! [{"id":1,"name":"Player 1","level":1,"gear":0,"cardColorIndex":0}]
//! ```
//!
//! Decoding never fails from the caller's point of view. A missing blob or
//! one that does not parse (bad JSON, missing field, wrong type) is replaced
//! by the single-player default list. An empty array is valid codec input;
//! size checks belong to [`PlayerList::new`].

use power_counter_types::{Player, PlayerList};

/// Store key under which the player list is persisted.
pub const PLAYERS_KEY: &str = "players_list";

/// Errors produced while encoding or parsing a player list blob.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The blob is not a valid JSON array of player records.
    #[error("malformed player list: {source}")]
    Malformed {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

/// Serialize `players` to a JSON blob, preserving order and every field.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if serialization fails.
pub fn encode(players: &[Player]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(players)?)
}

/// Parse a blob, reporting why it could not be read.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] for any structural or type error.
pub fn try_decode(blob: &str) -> Result<Vec<Player>, CodecError> {
    Ok(serde_json::from_str(blob)?)
}

/// Parse a blob, substituting the default list on absence or error.
pub fn decode(blob: Option<&str>) -> Vec<Player> {
    let Some(blob) = blob else {
        tracing::info!("No stored player list, using default");
        return PlayerList::default().into_vec();
    };
    match try_decode(blob) {
        Ok(players) => players,
        Err(e) => {
            tracing::warn!(error = %e, "Stored player list is corrupt, using default");
            PlayerList::default().into_vec()
        }
    }
}

/// Parse a blob into a checked [`PlayerList`].
///
/// Applies [`decode`], then the list invariants. A decoded list that breaks
/// an invariant (empty, more than six players, duplicate ids, a level outside
/// `1..=10`, a colour outside the palette) falls back to the default list the
/// same way a corrupt blob does.
pub fn decode_list(blob: Option<&str>) -> PlayerList {
    PlayerList::new(decode(blob)).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Stored player list violates invariants, using default");
        PlayerList::default()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use power_counter_types::PlayerId;

    use super::*;

    fn default_players() -> Vec<Player> {
        vec![Player::new(PlayerId(1), "Player 1")]
    }

    fn sample() -> Vec<Player> {
        let mut a = Player::new(PlayerId(1), "Ann");
        a.level = 7;
        a.gear = 12;
        a.card_color_index = 4;
        let mut b = Player::new(PlayerId(3), "Bob \"the\" Bold");
        b.gear = -2;
        b.card_color_index = 17;
        vec![a, b]
    }

    #[test]
    fn encode_matches_persisted_layout() {
        let blob = encode(&default_players()).unwrap();
        assert_eq!(
            blob,
            r#"[{"id":1,"name":"Player 1","level":1,"gear":0,"cardColorIndex":0}]"#
        );
    }

    #[test]
    fn encode_is_deterministic() {
        assert_eq!(encode(&sample()).unwrap(), encode(&sample()).unwrap());
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let players = sample();
        let blob = encode(&players).unwrap();
        assert_eq!(decode(Some(&blob)), players);
    }

    #[test]
    fn absent_blob_decodes_to_default() {
        assert_eq!(decode(None), default_players());
    }

    #[test]
    fn not_json_decodes_to_default() {
        assert_eq!(decode(Some("not json")), default_players());
    }

    #[test]
    fn missing_field_decodes_to_default() {
        let blob = r#"[{"id":1,"name":"A","level":1,"gear":0}]"#;
        assert!(try_decode(blob).is_err());
        assert_eq!(decode(Some(blob)), default_players());
    }

    #[test]
    fn wrong_type_decodes_to_default() {
        let blob = r#"[{"id":"one","name":"A","level":1,"gear":0,"cardColorIndex":0}]"#;
        assert_eq!(decode(Some(blob)), default_players());
    }

    #[test]
    fn object_instead_of_array_decodes_to_default() {
        let blob = r#"{"id":1,"name":"A","level":1,"gear":0,"cardColorIndex":0}"#;
        assert_eq!(decode(Some(blob)), default_players());
    }

    #[test]
    fn empty_array_is_valid_codec_input() {
        assert_eq!(try_decode("[]").unwrap(), Vec::new());
        assert!(decode(Some("[]")).is_empty());
    }

    #[test]
    fn decode_list_falls_back_on_invariant_violation() {
        assert_eq!(decode_list(Some("[]")), PlayerList::default());

        let dup = r#"[
            {"id":2,"name":"A","level":1,"gear":0,"cardColorIndex":0},
            {"id":2,"name":"B","level":1,"gear":0,"cardColorIndex":0}
        ]"#;
        assert_eq!(decode_list(Some(dup)), PlayerList::default());
    }

    #[test]
    fn decode_list_falls_back_on_level_out_of_range() {
        let blob = r#"[{"id":1,"name":"A","level":42,"gear":0,"cardColorIndex":0}]"#;
        assert_eq!(decode(Some(blob)).len(), 1);
        assert_eq!(decode_list(Some(blob)), PlayerList::default());

        let zero = r#"[{"id":1,"name":"A","level":0,"gear":0,"cardColorIndex":0}]"#;
        assert_eq!(decode_list(Some(zero)), PlayerList::default());
    }

    #[test]
    fn decode_list_falls_back_on_colour_out_of_palette() {
        let blob = r#"[
            {"id":1,"name":"A","level":3,"gear":0,"cardColorIndex":2},
            {"id":2,"name":"B","level":1,"gear":0,"cardColorIndex":99}
        ]"#;
        assert_eq!(decode_list(Some(blob)), PlayerList::default());
    }

    #[test]
    fn decode_list_keeps_valid_list() {
        let blob = encode(&sample()).unwrap();
        assert_eq!(decode_list(Some(&blob)).into_vec(), sample());
    }
}
