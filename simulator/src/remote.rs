//! Simulated remote application state.
//!
//! Stands in for the firmware's input handling and radio link: key presses
//! flip the connection, step the channel and cycle the light color, and the
//! battery slowly drains so the gauge can be watched through its full range.

use core::fmt::Write;

use heapless::String;
use remote_icons::config::CHANNEL_COUNT;
use remote_icons::{Action, Color, State};

/// Everything the simulated remote tracks between frames.
pub struct Remote {
    pub connected: bool,
    pub color: Color,
    pub channel: u8,
    pub battery_pct: i32,
    /// Last button pressed, highlighted on screen.
    pub active: Option<Action>,
    /// One-line event log shown at the bottom of the screen.
    pub last_event: String<32>,
}

impl Remote {
    pub fn new() -> Self {
        Self {
            connected: false,
            color: Color::Red,
            channel: 0,
            battery_pct: 100,
            active: None,
            last_event: String::new(),
        }
    }

    /// Snapshot handed to the renderers.
    pub const fn state(&self) -> State { State::new(self.color.index(), self.connected, self.channel) }

    /// Apply a button press.
    pub fn press(&mut self, action: Action) {
        self.active = Some(action);
        self.last_event.clear();
        match action {
            Action::Connection => {
                self.connected = !self.connected;
                let _ = write!(self.last_event, "BT {}", if self.connected { "connected" } else { "lost" });
            }
            Action::ColorSwatch | Action::ColorCycle => {
                self.color = next_color(self.color);
                let _ = write!(self.last_event, "Color: {:?}", self.color);
            }
            Action::Channel => {
                self.channel = (self.channel + 1) % CHANNEL_COUNT;
                let _ = write!(self.last_event, "IR channel {}", self.channel + 1);
            }
            Action::SpeedUp => {
                let _ = write!(self.last_event, "Speed +");
            }
            Action::SpeedDown => {
                let _ = write!(self.last_event, "Speed -");
            }
            Action::Brake => {
                let _ = write!(self.last_event, "Brake");
            }
        }
    }

    /// Drop the battery by 1%, wrapping back to full once empty.
    pub fn drain_battery(&mut self) { self.battery_pct = if self.battery_pct <= 0 { 100 } else { self.battery_pct - 1 }; }
}

impl Default for Remote {
    fn default() -> Self { Self::new() }
}

fn next_color(color: Color) -> Color { color.next().unwrap_or(Color::Red) }
