//! Icon geometry constants.
//!
//! All sizes are in pixels. Icons are anchored on their vertical center, so
//! most offsets below are half-heights applied to the caller's `y`.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (M5 Cardputer ST7789V2 panel: 240x135).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 135;

// =============================================================================
// Connection Indicator
// =============================================================================

pub const CONNECTION_WIDTH: u32 = 32;
pub const CONNECTION_HEIGHT: u32 = 14;
pub const CONNECTION_RADIUS: u32 = 6;

// =============================================================================
// Battery Indicator
// =============================================================================

pub const BATTERY_WIDTH: u32 = 24;
pub const BATTERY_HEIGHT: u32 = 11;
pub const BATTERY_RADIUS: u32 = 2;

/// Width of the charge area inside the 1px outline.
pub const BATTERY_INNER_WIDTH: u32 = BATTERY_WIDTH - 2;

/// Height of the charge area inside the 1px outline.
pub const BATTERY_INNER_HEIGHT: u32 = BATTERY_HEIGHT - 2;

/// Terminal nub on the left of the battery body.
pub const BATTERY_NUB_WIDTH: u32 = 2;
pub const BATTERY_NUB_HEIGHT: u32 = 4;

// =============================================================================
// Power Symbol
// =============================================================================

pub const POWER_OUTER_RADIUS: u32 = 8;
pub const POWER_INNER_RADIUS: u32 = 6;

/// The ring is split in two segments leaving a gap at the top for the bar.
pub const POWER_ARC_RIGHT: (f32, f32) = (0.0, 230.0);
pub const POWER_ARC_LEFT: (f32, f32) = (310.0, 359.0);

pub const POWER_BAR_WIDTH: u32 = 3;
pub const POWER_BAR_HEIGHT: u32 = 9;

// =============================================================================
// Color Swatch
// =============================================================================

pub const SWATCH_SIZE: u32 = 16;
pub const SWATCH_RADIUS: u32 = 6;

// =============================================================================
// Drive Glyphs
// =============================================================================

/// Half-width of the speed up/down triangles.
pub const ARROW_HALF_WIDTH: i32 = 6;
pub const ARROW_HEIGHT: i32 = 9;

pub const STOP_SIZE: u32 = 9;

// =============================================================================
// Channels
// =============================================================================

/// Number of IR channels selectable on the remote (shown as 1-16).
pub const CHANNEL_COUNT: u8 = 16;
