//! Fixed card colour palette.
//!
//! Players pick a card colour by index. The palette is fixed at compile time
//! and index 0 is the neutral default.

use serde::Serialize;

/// An RGB colour with a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    /// Human-readable name shown in the colour picker.
    pub name: &'static str,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    const fn new(name: &'static str, rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self { name, r, g, b }
    }

    /// `#rrggbb` hex form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Number of entries in the palette.
pub const PALETTE_SIZE: usize = 18;

const SLATE: Color = Color::new("Slate", 0x006c_757d);

/// Colour used for index 0 and for out-of-range indices.
static FALLBACK: Color = SLATE;

/// The card colours, in picker order.
pub static PALETTE: [Color; PALETTE_SIZE] = [
    SLATE,
    Color::new("Steel", 0x005f_798d),
    Color::new("Moss", 0x0066_7d60),
    Color::new("Clay", 0x008d_6b62),
    Color::new("Mauve", 0x008d_6e89),
    Color::new("Ochre", 0x009d_875c),
    Color::new("Denim", 0x005a_6e8a),
    Color::new("Silver", 0x00a1_a1a1),
    Color::new("Umber", 0x007a_6c5d),
    Color::new("Pine", 0x004a_5e5a),
    Color::new("Rosewood", 0x009a_7e6e),
    Color::new("Plum", 0x0063_5f6d),
    Color::new("Sand", 0x00b0_a38f),
    Color::new("Fog", 0x007e_8a97),
    Color::new("Taupe", 0x009c_8c82),
    Color::new("Charcoal", 0x0056_6573),
    Color::new("Stone", 0x00a4_9e97),
    Color::new("Sage", 0x008c_9288),
];

/// Read-only view over [`PALETTE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPalette;

impl ColorPalette {
    /// Number of colours.
    pub const fn len(self) -> usize {
        PALETTE_SIZE
    }

    /// Always `false`; the palette is fixed and non-empty.
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Whether `index` names a palette entry.
    pub const fn contains(self, index: usize) -> bool {
        index < PALETTE_SIZE
    }

    /// The colour at `index`, if any.
    pub fn get(self, index: usize) -> Option<&'static Color> {
        PALETTE.get(index)
    }

    /// The colour at `index`, falling back to the neutral default.
    pub fn get_or_default(self, index: usize) -> &'static Color {
        self.get(index).unwrap_or(&FALLBACK)
    }

    /// Iterate over `(index, colour)` pairs in picker order.
    pub fn iter(self) -> impl Iterator<Item = (usize, &'static Color)> {
        PALETTE.iter().enumerate()
    }
}
