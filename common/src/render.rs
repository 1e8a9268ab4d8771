//! Button symbol dispatch.
//!
//! Maps an [`Action`] plus the current [`State`] to the icon drawn next to
//! the button bound to that action. Each call is independent: drawing the
//! same action with the same state twice produces the same pixels.
//!
//! | Action        | Icon           | State field   |
//! |---------------|----------------|---------------|
//! | `Connection`  | Power symbol   | `connected`   |
//! | `ColorSwatch` | Color swatch   | `color_index` |
//! | `Channel`     | Channel number | `channel`     |
//! | `SpeedUp`     | Up triangle    | -             |
//! | `SpeedDown`   | Down triangle  | -             |
//! | `Brake`       | Stop square    | -             |
//! | `ColorCycle`  | nothing        | -             |

use crate::canvas::Canvas;
use crate::state::{Action, State};
use crate::widgets::{
    draw_channel_indicator,
    draw_color_swatch,
    draw_power_symbol,
    draw_speed_down_symbol,
    draw_speed_up_symbol,
    draw_stop_symbol,
};

/// Draw the symbol for `action` centered on `(x, y)`.
///
/// # Panics
/// Panics if `action` is [`Action::ColorSwatch`] and `state.color_index` is
/// outside the palette.
pub fn draw_action_symbol<C: Canvas>(canvas: &mut C, action: Action, x: i32, y: i32, state: &State) {
    #[cfg(feature = "defmt")]
    defmt::trace!("draw {} at ({}, {})", action, x, y);

    match action {
        Action::Connection => draw_power_symbol(canvas, x, y, state.connected),
        Action::ColorSwatch => draw_color_swatch(canvas, x, y, state.color_index),
        Action::Channel => draw_channel_indicator(canvas, x, y, state.channel),
        Action::SpeedUp => draw_speed_up_symbol(canvas, x, y),
        Action::SpeedDown => draw_speed_down_symbol(canvas, x, y),
        Action::Brake => draw_stop_symbol(canvas, x, y),
        Action::ColorCycle => {}
    }
}

/// Draw the symbol for a raw action id from the input layer's key map.
///
/// Unknown ids draw nothing.
pub fn draw_raw_action_symbol<C: Canvas>(canvas: &mut C, action_id: u8, x: i32, y: i32, state: &State) {
    match Action::try_from(action_id) {
        Ok(action) => draw_action_symbol(canvas, action, x, y, state),
        Err(_unknown) => {
            #[cfg(feature = "defmt")]
            defmt::trace!("no symbol for action id {}", _unknown);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
