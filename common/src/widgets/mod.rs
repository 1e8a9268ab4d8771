//! Icon renderers.
//!
//! All widgets draw through [`Canvas`](crate::canvas::Canvas) and take an
//! anchor whose `y` is the vertical center of the icon.

mod glyphs;
mod indicators;

pub use glyphs::{draw_speed_down_symbol, draw_speed_up_symbol, draw_stop_symbol};
pub use indicators::{
    battery_charge_color,
    battery_charge_width,
    channel_label,
    draw_battery_indicator,
    draw_channel_indicator,
    draw_color_swatch,
    draw_connection_indicator,
    draw_power_symbol,
};
