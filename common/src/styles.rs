//! Pre-computed text styles and fonts.
//!
//! The canvas keeps text color and size as state (like the display driver's
//! own canvas API); these constants cover the parts that never change.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_12_POINT;

/// Text centered both horizontally and vertically on its anchor.
pub const MIDDLE_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Text left-aligned on its anchor, vertically centered.
pub const MIDDLE_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Relative text scale.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// Base size (scale 1.0). Used on the connection indicator.
    #[default]
    Normal,
    /// One and a half times the base size. Used for the channel number.
    Large,
}

impl TextSize {
    /// Font used to render this size.
    pub const fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Normal => &FONT_6X10,
            Self::Large => &PROFONT_12_POINT,
        }
    }
}
