//! Status icons for a handheld Bluetooth/IR remote-control display.
//!
//! This crate turns a small application [`State`] into pixels. It contains
//! no input handling, radio protocol or main loop; the remote firmware and
//! the desktop simulator own those and call into the renderers each frame.
//!
//! - [`colors`]: RGB565 constants, the selectable palette and interpolation
//! - [`config`]: Icon geometry constants
//! - [`styles`]: Text alignment and size presets
//! - [`state`]: [`State`] snapshot and [`Action`] ids
//! - [`canvas`]: [`Canvas`] drawing capability and its `DrawTarget` adapter
//! - [`widgets`]: One renderer per icon
//! - [`render`]: Action to icon dispatch
//!
//! # Testing
//!
//! Tests run on the host with `std` enabled (via `cfg_attr`), while firmware
//! builds stay `no_std`:
//! ```bash
//! cargo test -p remote-icons
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod colors;
pub mod config;
pub mod render;
pub mod state;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use canvas::{Canvas, DisplayCanvas};
pub use colors::{Color, interpolate, interpolate_raw};
pub use render::{draw_action_symbol, draw_raw_action_symbol};
pub use state::{Action, State};
