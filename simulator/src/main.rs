//! Remote-control display simulator for desktop.
//!
//! Renders the status bar and button symbols with the
//! embedded-graphics-simulator crate.
//!
//! # Keys
//!
//! | Key     | Action                     |
//! |---------|----------------------------|
//! | `C`     | Toggle Bluetooth link      |
//! | `V`     | Cycle light color          |
//! | `N`     | Next IR channel            |
//! | `Up`    | Speed up                   |
//! | `Down`  | Speed down                 |
//! | `Space` | Brake                      |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod remote;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use remote_icons::colors::{BLACK, MED_GRAY, SILVER};
use remote_icons::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use remote_icons::styles::{MIDDLE_CENTER, MIDDLE_LEFT, TextSize};
use remote_icons::widgets::{draw_battery_indicator, draw_connection_indicator};
use remote_icons::{Action, Canvas, DisplayCanvas, draw_action_symbol};

use crate::remote::Remote;
use crate::timing::{BATTERY_DRAIN_FRAMES, FRAME_TIME};

const STATUS_Y: i32 = 10;
const CONNECTION_X: i32 = 4;
const BATTERY_X: i32 = SCREEN_WIDTH as i32 - 28;
const EVENT_POS: Point = Point::new(4, SCREEN_HEIGHT as i32 - 8);

/// Button symbols in a 3x2 grid: action, key hint, center.
const BUTTONS: [(Action, &str, Point); 6] = [
    (Action::Connection, "C", Point::new(40, 45)),
    (Action::ColorSwatch, "V", Point::new(120, 45)),
    (Action::Channel, "N", Point::new(200, 45)),
    (Action::SpeedUp, "UP", Point::new(40, 90)),
    (Action::Brake, "SPC", Point::new(120, 90)),
    (Action::SpeedDown, "DN", Point::new(200, 90)),
];

const HIGHLIGHT_SIZE: u32 = 28;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Remote Control Sim", &output_settings);

    let mut remote = Remote::new();
    let mut frame_count = 0u32;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::C => remote.press(Action::Connection),
                        Keycode::V => remote.press(Action::ColorCycle),
                        Keycode::N => remote.press(Action::Channel),
                        Keycode::Up => remote.press(Action::SpeedUp),
                        Keycode::Down => remote.press(Action::SpeedDown),
                        Keycode::Space => remote.press(Action::Brake),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if frame_count % BATTERY_DRAIN_FRAMES == 0 {
            remote.drain_battery();
        }

        let mut canvas = DisplayCanvas::new(&mut display);
        canvas.display().clear(BLACK).ok();
        draw_frame(&mut canvas, &remote);
        window.update(&display);

        frame_count = frame_count.wrapping_add(1);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

fn draw_frame<C: Canvas>(canvas: &mut C, remote: &Remote) {
    let state = remote.state();

    draw_connection_indicator(canvas, CONNECTION_X, STATUS_Y, state.connected);
    draw_battery_indicator(canvas, BATTERY_X, STATUS_Y, remote.battery_pct);

    // The swatch button shows the color, pressing V cycles it.
    let highlighted = remote.active.map(|action| match action {
        Action::ColorCycle => Action::ColorSwatch,
        other => other,
    });

    for (action, key, center) in BUTTONS {
        if highlighted == Some(action) {
            let half = (HIGHLIGHT_SIZE / 2) as i32;
            canvas.fill_round_rect(
                Rectangle::new(center - Point::new(half, half), Size::new(HIGHLIGHT_SIZE, HIGHLIGHT_SIZE)),
                6,
                MED_GRAY,
            );
        }
        draw_action_symbol(canvas, action, center.x, center.y, &state);

        canvas.set_text_size(TextSize::Normal);
        canvas.set_text_color(SILVER, BLACK);
        canvas.draw_text(key, center + Point::new(0, 22), MIDDLE_CENTER);
    }

    canvas.set_text_size(TextSize::Normal);
    canvas.set_text_color(SILVER, BLACK);
    canvas.draw_text(&remote.last_event, EVENT_POS, MIDDLE_LEFT);
}
