//! Status indicators: link state, battery, power symbol, color and channel.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::canvas::Canvas;
use crate::colors::{BLACK, BLUE, DARK_GRAY, GREEN, LIGHT_GRAY, RED, SILVER, TEAL, palette_color_at};
use crate::config::{
    BATTERY_HEIGHT,
    BATTERY_INNER_HEIGHT,
    BATTERY_INNER_WIDTH,
    BATTERY_NUB_HEIGHT,
    BATTERY_NUB_WIDTH,
    BATTERY_RADIUS,
    BATTERY_WIDTH,
    CONNECTION_HEIGHT,
    CONNECTION_RADIUS,
    CONNECTION_WIDTH,
    POWER_ARC_LEFT,
    POWER_ARC_RIGHT,
    POWER_BAR_HEIGHT,
    POWER_BAR_WIDTH,
    POWER_INNER_RADIUS,
    POWER_OUTER_RADIUS,
    SWATCH_RADIUS,
    SWATCH_SIZE,
};
use crate::styles::{MIDDLE_CENTER, TextSize};

// =============================================================================
// Connection Indicator
// =============================================================================

/// Draw the "CON"/"D/C" pill. `x` is the left edge, `y` the vertical center.
pub fn draw_connection_indicator<C: Canvas>(canvas: &mut C, x: i32, y: i32, connected: bool) {
    let top = y - (CONNECTION_HEIGHT / 2) as i32;
    let (fill, label) = if connected { (GREEN, "CON") } else { (RED, "D/C") };

    canvas.fill_round_rect(
        Rectangle::new(Point::new(x, top), Size::new(CONNECTION_WIDTH, CONNECTION_HEIGHT)),
        CONNECTION_RADIUS,
        fill,
    );
    canvas.set_text_size(TextSize::Normal);
    canvas.set_text_color(BLACK, fill);
    canvas.draw_text(
        label,
        Point::new(x + (CONNECTION_WIDTH / 2) as i32, top + (CONNECTION_HEIGHT / 2) as i32),
        MIDDLE_CENTER,
    );
}

// =============================================================================
// Battery Indicator
// =============================================================================

/// Width in pixels of the charged part of the gauge.
///
/// `pct` is clamped to `0..=100`.
pub fn battery_charge_width(pct: i32) -> u32 { BATTERY_INNER_WIDTH * pct.clamp(0, 100) as u32 / 100 }

/// Color of the charged part of the gauge.
///
/// Teal when full, otherwise a red to green ramp built directly from the
/// percentage and packed with the canvas' own mixing function. This ramp is
/// intentionally not [`interpolate`](crate::colors::interpolate): the two
/// produce different hues.
pub fn battery_charge_color<C: Canvas + ?Sized>(canvas: &C, pct: i32) -> Rgb565 {
    let pct = pct.clamp(0, 100);
    if pct == 100 {
        return TEAL;
    }
    let r = ((100 - pct) * 256 / 100).min(255) as u8;
    let g = (pct * 256 / 100).min(255) as u8;
    canvas.color565(r, g, 0)
}

/// Draw the battery gauge. `x` is the left edge of the body (the terminal
/// nub sits 2px further left), `y` the vertical center.
pub fn draw_battery_indicator<C: Canvas>(canvas: &mut C, x: i32, y: i32, pct: i32) {
    let top = y - (BATTERY_HEIGHT / 2) as i32;
    let charge_w = battery_charge_width(pct);
    let empty_w = BATTERY_INNER_WIDTH - charge_w;
    let charge_color = battery_charge_color(&*canvas, pct);

    canvas.fill_round_rect(
        Rectangle::new(Point::new(x, top), Size::new(BATTERY_WIDTH, BATTERY_HEIGHT)),
        BATTERY_RADIUS,
        SILVER,
    );
    canvas.fill_rect(
        Rectangle::new(
            Point::new(x - BATTERY_NUB_WIDTH as i32, y - (BATTERY_NUB_HEIGHT / 2) as i32),
            Size::new(BATTERY_NUB_WIDTH, BATTERY_NUB_HEIGHT),
        ),
        SILVER,
    );

    // Charge drains from the nub side: empty on the left, charge on the right.
    canvas.fill_rect(
        Rectangle::new(Point::new(x + 1, top + 1), Size::new(empty_w, BATTERY_INNER_HEIGHT)),
        DARK_GRAY,
    );
    canvas.fill_rect(
        Rectangle::new(
            Point::new(x + 1 + empty_w as i32, top + 1),
            Size::new(charge_w, BATTERY_INNER_HEIGHT),
        ),
        charge_color,
    );
}

// =============================================================================
// Power Symbol
// =============================================================================

/// Draw the power glyph (open ring plus bar) centered on `(x, y)`.
pub fn draw_power_symbol<C: Canvas>(canvas: &mut C, x: i32, y: i32, connected: bool) {
    let color = if connected { BLUE } else { RED };
    let center = Point::new(x, y);

    for (start, end) in [POWER_ARC_RIGHT, POWER_ARC_LEFT] {
        canvas.fill_arc(center, POWER_OUTER_RADIUS, POWER_INNER_RADIUS, start, end, color);
    }
    canvas.fill_rect(
        Rectangle::new(
            Point::new(x - 1, y - POWER_BAR_HEIGHT as i32),
            Size::new(POWER_BAR_WIDTH, POWER_BAR_HEIGHT),
        ),
        color,
    );
}

// =============================================================================
// Color Swatch
// =============================================================================

/// Draw the selected light color as a rounded square centered on `(x, y)`.
///
/// # Panics
/// Panics if `color_index` is not a valid palette index. Callers validate
/// the index when they change it.
pub fn draw_color_swatch<C: Canvas>(canvas: &mut C, x: i32, y: i32, color_index: usize) {
    let half = (SWATCH_SIZE / 2) as i32;
    canvas.fill_round_rect(
        Rectangle::new(Point::new(x - half, y - half), Size::new(SWATCH_SIZE, SWATCH_SIZE)),
        SWATCH_RADIUS,
        palette_color_at(color_index),
    );
}

// =============================================================================
// Channel Number
// =============================================================================

/// 1-indexed label for a 0-indexed channel.
pub fn channel_label(channel: u8) -> String<4> {
    let mut label = String::new();
    let _ = write!(label, "{}", u16::from(channel) + 1);
    label
}

/// Draw the IR channel number centered on `(x, y)`.
pub fn draw_channel_indicator<C: Canvas>(canvas: &mut C, x: i32, y: i32, channel: u8) {
    canvas.set_text_color(SILVER, LIGHT_GRAY);
    canvas.set_text_size(TextSize::Large);
    canvas.draw_text(&channel_label(channel), Point::new(x, y), MIDDLE_CENTER);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::RgbColor;
    use embedded_graphics::text::Alignment;

    use super::*;
    use crate::canvas::DisplayCanvas;
    use crate::canvas::recording::{Call, RecordingCanvas};
    use crate::colors::{Color, PALETTE};

    // -------------------------------------------------------------------------
    // Connection Indicator
    // -------------------------------------------------------------------------

    #[test]
    fn test_connection_indicator_disconnected() {
        let mut canvas = RecordingCanvas::new();
        draw_connection_indicator(&mut canvas, 4, 10, false);

        assert_eq!(
            canvas.calls[0],
            Call::FillRoundRect(Rectangle::new(Point::new(4, 3), Size::new(32, 14)), 6, RED)
        );
        assert!(canvas.calls.contains(&Call::TextColor(BLACK, RED)), "text should sit on the red fill");
        assert_eq!(canvas.texts(), ["D/C"]);
    }

    #[test]
    fn test_connection_indicator_connected() {
        let mut canvas = RecordingCanvas::new();
        draw_connection_indicator(&mut canvas, 0, 7, true);

        assert!(matches!(canvas.calls[0], Call::FillRoundRect(_, _, color) if color == GREEN));
        assert_eq!(canvas.texts(), ["CON"]);
        let Some(Call::Text(_, position, style)) = canvas.calls.last() else {
            panic!("last call should draw the label");
        };
        assert_eq!(*position, Point::new(16, 7), "label should be centered on the pill");
        assert_eq!(style.alignment, Alignment::Center);
    }

    #[test]
    fn test_connection_indicator_pixels() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_connection_indicator(&mut DisplayCanvas::new(&mut display), 2, 20, false);

        // Left edge, vertical center is outside the glyphs.
        assert_eq!(display.get_pixel(Point::new(3, 20)), Some(RED));
        assert_eq!(display.affected_area(), Rectangle::new(Point::new(2, 13), Size::new(32, 14)));
    }

    // -------------------------------------------------------------------------
    // Battery Indicator
    // -------------------------------------------------------------------------

    #[test]
    fn test_battery_charge_width_bounds() {
        assert_eq!(battery_charge_width(0), 0, "empty battery has no charge bar");
        assert_eq!(battery_charge_width(100), BATTERY_INNER_WIDTH, "full battery fills the gauge");
        assert_eq!(battery_charge_width(50), 11);
        assert_eq!(battery_charge_width(-20), 0);
        assert_eq!(battery_charge_width(250), BATTERY_INNER_WIDTH);
    }

    #[test]
    fn test_battery_charge_width_monotonic() {
        let mut prev = 0;
        for pct in 0..=100 {
            let width = battery_charge_width(pct);
            assert!(width >= prev, "width shrank at {pct}%: {width} < {prev}");
            prev = width;
        }
    }

    #[test]
    fn test_battery_charge_color_ramp() {
        let canvas = RecordingCanvas::new();
        assert_eq!(battery_charge_color(&canvas, 100), TEAL);
        assert_eq!(battery_charge_color(&canvas, 0), Rgb565::new(31, 0, 0), "empty battery is red");
        // 50%: r = g = 128
        assert_eq!(battery_charge_color(&canvas, 50), Rgb565::new(16, 32, 0));

        let low = battery_charge_color(&canvas, 10);
        let high = battery_charge_color(&canvas, 90);
        assert!(low.r() > high.r(), "red fades as charge rises");
        assert!(low.g() < high.g(), "green grows as charge rises");
        assert_eq!(low.b(), 0);
    }

    #[test]
    fn test_battery_indicator_layout() {
        let mut canvas = RecordingCanvas::new();
        draw_battery_indicator(&mut canvas, 10, 20, 50);

        assert_eq!(
            canvas.calls,
            [
                Call::FillRoundRect(Rectangle::new(Point::new(10, 15), Size::new(24, 11)), 2, SILVER),
                Call::FillRect(Rectangle::new(Point::new(8, 18), Size::new(2, 4)), SILVER),
                Call::FillRect(Rectangle::new(Point::new(11, 16), Size::new(11, 9)), DARK_GRAY),
                Call::FillRect(
                    Rectangle::new(Point::new(22, 16), Size::new(11, 9)),
                    Rgb565::new(16, 32, 0)
                ),
            ]
        );
    }

    #[test]
    fn test_battery_indicator_full_uses_teal() {
        let mut canvas = RecordingCanvas::new();
        draw_battery_indicator(&mut canvas, 0, 10, 100);

        assert_eq!(
            canvas.calls.last(),
            Some(&Call::FillRect(Rectangle::new(Point::new(1, 6), Size::new(22, 9)), TEAL))
        );
    }

    fn battery_pixels(pct: i32) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_battery_indicator(&mut DisplayCanvas::new(&mut display), 10, 20, pct);
        display
    }

    #[test]
    fn test_battery_indicator_empty_pixels() {
        let display = battery_pixels(0);

        // Whole interior is the empty color, the zero-width charge bar draws nothing.
        for point in Rectangle::new(Point::new(11, 16), Size::new(22, 9)).points() {
            assert_eq!(display.get_pixel(point), Some(DARK_GRAY), "interior pixel {point:?}");
        }
        assert_eq!(display.get_pixel(Point::new(33, 20)), Some(SILVER), "right edge of the body");
        assert_eq!(display.get_pixel(Point::new(8, 20)), Some(SILVER), "terminal nub");

        battery_pixels(-20).assert_eq(&display);
    }

    #[test]
    fn test_battery_indicator_full_pixels() {
        let display = battery_pixels(100);

        for point in Rectangle::new(Point::new(11, 16), Size::new(22, 9)).points() {
            assert_eq!(display.get_pixel(point), Some(TEAL), "interior pixel {point:?}");
        }
        assert_eq!(display.get_pixel(Point::new(10, 20)), Some(SILVER), "left edge of the body");
        assert_eq!(display.get_pixel(Point::new(9, 19)), Some(SILVER), "terminal nub");

        battery_pixels(150).assert_eq(&display);
    }

    // -------------------------------------------------------------------------
    // Power Symbol
    // -------------------------------------------------------------------------

    #[test]
    fn test_power_symbol_colors() {
        for (connected, expected) in [(true, BLUE), (false, RED)] {
            let mut canvas = RecordingCanvas::new();
            draw_power_symbol(&mut canvas, 20, 20, connected);

            assert_eq!(canvas.calls.len(), 3, "two arcs and a bar");
            for call in &canvas.calls {
                let color = match call {
                    Call::FillArc { color, .. } | Call::FillRect(_, color) => *color,
                    other => panic!("unexpected call {other:?}"),
                };
                assert_eq!(color, expected, "connected={connected}");
            }
        }
    }

    #[test]
    fn test_power_symbol_gap_at_top() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_power_symbol(&mut DisplayCanvas::new(&mut display), 20, 20, true);

        // Bottom of the ring is drawn, the ring is open above the bar.
        assert_eq!(display.get_pixel(Point::new(20, 27)), Some(BLUE));
        assert_eq!(display.get_pixel(Point::new(17, 14)), None);
        // Bar runs up from the center.
        assert_eq!(display.get_pixel(Point::new(20, 12)), Some(BLUE));
    }

    // -------------------------------------------------------------------------
    // Color Swatch
    // -------------------------------------------------------------------------

    #[test]
    fn test_color_swatch_first_entry() {
        let mut canvas = RecordingCanvas::new();
        draw_color_swatch(&mut canvas, 30, 30, 0);

        assert_eq!(
            canvas.calls,
            [Call::FillRoundRect(
                Rectangle::new(Point::new(22, 22), Size::new(16, 16)),
                6,
                PALETTE[0].rgb565
            )]
        );
    }

    #[test]
    fn test_color_swatch_pixels() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        draw_color_swatch(&mut DisplayCanvas::new(&mut display), 30, 30, Color::Cyan.index());

        assert_eq!(display.get_pixel(Point::new(30, 30)), Some(Color::Cyan.rgb565()));
        assert_eq!(display.get_pixel(Point::new(22, 22)), None, "corners are rounded");
    }

    #[test]
    #[should_panic]
    fn test_color_swatch_invalid_index_panics() {
        let mut canvas = RecordingCanvas::new();
        draw_color_swatch(&mut canvas, 0, 0, Color::COUNT);
    }

    // -------------------------------------------------------------------------
    // Channel Number
    // -------------------------------------------------------------------------

    #[test]
    fn test_channel_label_is_one_indexed() {
        assert_eq!(channel_label(0).as_str(), "1");
        assert_eq!(channel_label(15).as_str(), "16");
        assert_eq!(channel_label(u8::MAX).as_str(), "256");
    }

    #[test]
    fn test_channel_indicator_calls() {
        let mut canvas = RecordingCanvas::new();
        draw_channel_indicator(&mut canvas, 40, 12, 15);

        assert_eq!(canvas.calls[0], Call::TextColor(SILVER, LIGHT_GRAY));
        assert_eq!(canvas.calls[1], Call::TextSize(TextSize::Large));
        assert!(matches!(&canvas.calls[2], Call::Text(text, p, _) if text == "16" && *p == Point::new(40, 12)));
    }
}
