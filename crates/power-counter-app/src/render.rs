//! Plain-text rendering of the player table and the palette.

use std::fmt::Write as _;

use power_counter_types::{Color, ColorPalette, PlayerList};

/// Two spaces on a truecolour background.
fn swatch(color: &Color) -> String {
    format!("\x1b[48;2;{};{};{}m  \x1b[0m", color.r, color.g, color.b)
}

/// Render the player table, one row per player in display order.
///
/// With `ansi` set, each row starts with a swatch of the card colour.
pub fn players(list: &PlayerList, ansi: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<16} {:>5} {:>6} {:>6}  {}",
        "id", "name", "level", "gear", "power", "colour"
    );
    for player in list {
        let color = ColorPalette.get_or_default(player.card_color_index);
        let chip = if ansi { swatch(color) } else { String::new() };
        let _ = writeln!(
            out,
            "{:>4}  {:<16} {:>5} {:>6} {:>6}  {chip}{}",
            player.id,
            player.name,
            player.level,
            player.gear,
            player.total_power(),
            color.name,
        );
    }
    out
}

/// Render the palette with the index `color` expects.
pub fn palette(ansi: bool) -> String {
    let mut out = String::new();
    for (index, color) in ColorPalette.iter() {
        let chip = if ansi { swatch(color) } else { String::new() };
        let _ = writeln!(out, "{index:>3}  {chip}{:<10} {}", color.name, color.hex());
    }
    out
}

#[cfg(test)]
mod tests {
    use power_counter_types::{Player, PlayerId};

    use super::*;

    #[test]
    fn table_lists_players_in_order() {
        let mut second = Player::new(PlayerId(4), "Dana");
        second.level = 3;
        second.gear = 5;
        second.card_color_index = 1;
        let list = PlayerList::new(vec![Player::new(PlayerId(1), "Player 1"), second])
            .unwrap_or_default();

        let text = players(&list, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.first().is_some_and(|l| l.contains("power")));
        assert!(lines.get(1).is_some_and(|l| l.contains("Player 1") && l.contains("Slate")));
        assert!(
            lines
                .get(2)
                .is_some_and(|l| l.contains("Dana") && l.contains('8') && l.contains("Steel"))
        );
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn ansi_adds_swatches() {
        let text = players(&PlayerList::default(), true);
        assert!(text.contains("\x1b[48;2;"));
    }

    #[test]
    fn palette_has_every_colour() {
        let text = palette(false);
        assert_eq!(text.lines().count(), ColorPalette.len());
        assert!(text.contains(" 17  Sage"));
        assert!(text.contains("#6c757d"));
    }
}
