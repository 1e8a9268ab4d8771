//! Application state snapshot and renderable actions.
//!
//! Both are owned by the remote's main loop and handed to the renderer per
//! frame; the renderer only reads them.

/// Snapshot of the data needed to draw every icon for one frame.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct State {
    /// Index into [`PALETTE`](crate::colors::PALETTE). Must be below
    /// [`Color::COUNT`](crate::colors::Color::COUNT).
    pub color_index: usize,
    /// Whether the Bluetooth link to the vehicle is up.
    pub connected: bool,
    /// Active IR channel, 0-indexed (displayed as `channel + 1`).
    pub channel: u8,
}

impl State {
    pub const fn new(color_index: usize, connected: bool, channel: u8) -> Self {
        Self { color_index, connected, channel }
    }
}

/// Icon kinds bound to the remote's buttons.
///
/// Discriminants are the raw ids used by the input layer's key map.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Action {
    /// Bluetooth connect/disconnect button (power symbol).
    Connection = 0,
    /// Light color selection (color swatch).
    ColorSwatch = 1,
    /// IR channel selection (channel number).
    Channel = 2,
    /// Reserved for the color-cycle trigger. Has no icon.
    ColorCycle = 3,
    SpeedUp = 4,
    SpeedDown = 5,
    Brake = 6,
}

impl Action {
    /// Every action in raw id order.
    pub const ALL: [Self; 7] = [
        Self::Connection,
        Self::ColorSwatch,
        Self::Channel,
        Self::ColorCycle,
        Self::SpeedUp,
        Self::SpeedDown,
        Self::Brake,
    ];

    /// Whether this action has an icon.
    pub const fn has_symbol(self) -> bool { !matches!(self, Self::ColorCycle) }
}

impl TryFrom<u8> for Action {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> { Self::ALL.get(usize::from(id)).copied().ok_or(id) }
}
