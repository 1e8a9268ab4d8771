//! Color constants and the selectable color palette.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: bits 11-15 (0-31)
//! - Green: bits 5-10 (0-63)
//! - Blue: bits 0-4 (0-31)
//!
//! Colors are stored as raw `u16` values so they can be matched against the
//! values used by the remote's LED controller, then wrapped in [`Rgb565`] for
//! drawing.
//!
//! # Palette
//!
//! [`PALETTE`] maps every [`Color`] the user can pick for the vehicle's LEDs
//! to its packed value. The table is ordered by the enum's ordinal; a
//! compile-time check rejects gaps, duplicates and reordering.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::IntoStorage;

/// Convert a raw packed value into an [`Rgb565`] color.
#[inline]
pub const fn rgb565(raw: u16) -> Rgb565 {
    Rgb565::new((raw >> 11) as u8 & 0x1F, (raw >> 5) as u8 & 0x3F, raw as u8 & 0x1F)
}

// =============================================================================
// Indicator Colors
// =============================================================================

/// Pure black. Text on the connection indicator.
pub const BLACK: Rgb565 = rgb565(0x0000);

/// Pure red. Disconnected state.
pub const RED: Rgb565 = rgb565(0xF800);

/// Pure green. Connected state.
pub const GREEN: Rgb565 = rgb565(0x07E0);

/// Pure blue. Power symbol while connected.
pub const BLUE: Rgb565 = rgb565(0x001F);

/// Neutral silver used for outlines, glyphs and labels.
pub const SILVER: Rgb565 = rgb565(0xC618);

/// Empty part of the battery gauge.
pub const DARK_GRAY: Rgb565 = rgb565(0x0861);

/// Medium gray panel background.
pub const MED_GRAY: Rgb565 = rgb565(0x2104);

/// Background behind the channel number.
pub const LIGHT_GRAY: Rgb565 = rgb565(0x4208);

/// Battery charge color when fully charged.
pub const TEAL: Rgb565 = rgb565(0x07CC);

// =============================================================================
// Selectable Palette
// =============================================================================

/// Colors selectable for the vehicle's lights, in palette order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    LightBlue,
    Blue,
    Purple,
    Pink,
    White,
    Black,
}

impl Color {
    /// Number of palette colors, counted by walking [`Color::next`] so a new
    /// variant cannot be added without growing `ALL` and `PALETTE`.
    pub const COUNT: usize = {
        let mut count = 1;
        let mut color = Self::Red;
        while let Some(next) = color.next() {
            color = next;
            count += 1;
        }
        count
    };

    /// Every color in palette order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::LightBlue,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::White,
        Self::Black,
    ];

    /// Look up a color by palette index.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT { Some(Self::ALL[index]) } else { None }
    }

    /// Following color in palette order, `None` after the last one.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Red => Some(Self::Orange),
            Self::Orange => Some(Self::Yellow),
            Self::Yellow => Some(Self::Green),
            Self::Green => Some(Self::Cyan),
            Self::Cyan => Some(Self::LightBlue),
            Self::LightBlue => Some(Self::Blue),
            Self::Blue => Some(Self::Purple),
            Self::Purple => Some(Self::Pink),
            Self::Pink => Some(Self::White),
            Self::White => Some(Self::Black),
            Self::Black => None,
        }
    }

    /// Position of this color in the palette.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Packed value of this color.
    #[inline]
    pub const fn rgb565(self) -> Rgb565 { PALETTE[self as usize].rgb565 }
}

/// One palette slot.
#[derive(Clone, Copy, Debug)]
pub struct PaletteEntry {
    pub color: Color,
    pub rgb565: Rgb565,
}

/// Selectable palette, indexed by [`Color::index`].
pub const PALETTE: [PaletteEntry; Color::COUNT] = [
    PaletteEntry { color: Color::Red, rgb565: rgb565(0xF800) },
    PaletteEntry { color: Color::Orange, rgb565: rgb565(0xEBC3) },
    PaletteEntry { color: Color::Yellow, rgb565: rgb565(0xFFE0) },
    PaletteEntry { color: Color::Green, rgb565: rgb565(0x07E0) },
    PaletteEntry { color: Color::Cyan, rgb565: rgb565(0x07FF) },
    PaletteEntry { color: Color::LightBlue, rgb565: rgb565(0x9E7F) },
    PaletteEntry { color: Color::Blue, rgb565: rgb565(0x001F) },
    PaletteEntry { color: Color::Purple, rgb565: rgb565(0x780F) },
    PaletteEntry { color: Color::Pink, rgb565: rgb565(0xFE19) },
    PaletteEntry { color: Color::White, rgb565: rgb565(0xFFFF) },
    PaletteEntry { color: Color::Black, rgb565: rgb565(0x0000) },
];

// Slot i must hold the color with ordinal i, and the walk must end on the
// highest ordinal.
const _: () = {
    assert!(Color::COUNT == Color::Black as usize + 1, "Color::next does not end on the last variant");
    let mut i = 0;
    while i < PALETTE.len() {
        assert!(PALETTE[i].color as usize == i, "palette out of order");
        assert!(Color::ALL[i] as usize == i, "Color::ALL out of order");
        i += 1;
    }
};

/// Packed value of a palette color.
#[inline]
pub const fn palette_color(color: Color) -> Rgb565 { color.rgb565() }

/// Packed value for a palette index.
///
/// The index is expected to be validated by the caller.
///
/// # Panics
/// Panics if `index >= Color::COUNT`. Use [`try_palette_color`] when the
/// index comes from an unvalidated source.
#[inline]
pub fn palette_color_at(index: usize) -> Rgb565 { PALETTE[index].rgb565 }

/// Checked variant of [`palette_color_at`].
#[inline]
pub fn try_palette_color(index: usize) -> Option<Rgb565> { PALETTE.get(index).map(|entry| entry.rgb565) }

// =============================================================================
// Color Interpolation
// =============================================================================

/// Linear interpolation between two packed Rgb565 values.
///
/// `percentage <= 0` returns `from` and `percentage >= 100` returns `to`
/// unchanged. In between, each channel is blended independently with
/// truncating integer division.
pub fn interpolate_raw(from: u16, to: u16, percentage: i32) -> u16 {
    if percentage <= 0 {
        return from;
    }
    if percentage >= 100 {
        return to;
    }

    let from_r = i32::from((from >> 11) & 0x1F);
    let from_g = i32::from((from >> 5) & 0x3F);
    let from_b = i32::from(from & 0x1F);

    let to_r = i32::from((to >> 11) & 0x1F);
    let to_g = i32::from((to >> 5) & 0x3F);
    let to_b = i32::from(to & 0x1F);

    let keep = 100 - percentage;
    let r = (from_r * keep + to_r * percentage) / 100;
    let g = (from_g * keep + to_g * percentage) / 100;
    let b = (from_b * keep + to_b * percentage) / 100;

    ((r as u16) << 11) | ((g as u16) << 5) | (b as u16)
}

/// [`interpolate_raw`] on [`Rgb565`] colors.
#[inline]
pub fn interpolate(from: Rgb565, to: Rgb565, percentage: i32) -> Rgb565 {
    let raw = interpolate_raw(from.into_storage(), to.into_storage(), percentage);
    Rgb565::from(RawU16::new(raw))
}

// =============================================================================
// Unit Tests
// =============================================================================
