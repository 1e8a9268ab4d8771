//! Drawing surface capability used by the icon renderers.
//!
//! [`Canvas`] mirrors the small canvas API of the remote's display driver:
//! filled shapes, stateful text color/size, and a color mixing helper.
//! [`DisplayCanvas`] implements it for any `DrawTarget<Color = Rgb565>`, so
//! the same renderers draw to the ST7789 framebuffer, the desktop simulator
//! or a `MockDisplay` in tests.
//!
//! Draw errors from the target are discarded. A frame with a failed write is
//! simply redrawn on the next update.

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};
use embedded_graphics::text::{Text, TextStyle};

use crate::styles::TextSize;

/// Primitive draw operations needed by the icons.
pub trait Canvas {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565);

    /// Fill a rectangle with all four corners rounded by `radius`.
    fn fill_round_rect(&mut self, area: Rectangle, radius: u32, color: Rgb565);

    /// Fill the ring segment between `inner_radius` and `outer_radius`.
    ///
    /// Angles are in degrees, 0° at 3 o'clock, increasing clockwise. A start
    /// angle greater than the end angle wraps through 0°.
    fn fill_arc(
        &mut self,
        center: Point,
        outer_radius: u32,
        inner_radius: u32,
        start_deg: f32,
        end_deg: f32,
        color: Rgb565,
    );

    /// Fill a triangle.
    fn fill_triangle(&mut self, triangle: Triangle, color: Rgb565);

    /// Set the glyph and background colors for subsequent text.
    fn set_text_color(&mut self, foreground: Rgb565, background: Rgb565);

    /// Set the scale for subsequent text.
    fn set_text_size(&mut self, size: TextSize);

    /// Draw `text` anchored at `position` using the current text color/size.
    fn draw_text(&mut self, text: &str, position: Point, style: TextStyle);

    /// Pack 8-bit channels into Rgb565 by dropping the low bits.
    fn color565(&self, r: u8, g: u8, b: u8) -> Rgb565 { Rgb565::new(r >> 3, g >> 2, b >> 3) }
}

/// [`Canvas`] over an `embedded-graphics` draw target.
pub struct DisplayCanvas<'a, D> {
    display: &'a mut D,
    text_color: Rgb565,
    text_background: Option<Rgb565>,
    text_size: TextSize,
}

impl<'a, D> DisplayCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a display. Text starts white on a transparent background.
    pub fn new(display: &'a mut D) -> Self {
        Self {
            display,
            text_color: Rgb565::WHITE,
            text_background: None,
            text_size: TextSize::Normal,
        }
    }

    /// Access the wrapped display, e.g. to clear it between frames.
    pub fn display(&mut self) -> &mut D { &mut *self.display }
}

impl<D> Canvas for DisplayCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) {
        area.into_styled(PrimitiveStyle::with_fill(color))
            .draw(self.display)
            .ok();
    }

    fn fill_round_rect(&mut self, area: Rectangle, radius: u32, color: Rgb565) {
        RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self.display)
            .ok();
    }

    fn fill_arc(
        &mut self,
        center: Point,
        outer_radius: u32,
        inner_radius: u32,
        start_deg: f32,
        end_deg: f32,
        color: Rgb565,
    ) {
        let (r_min, r_max) = if inner_radius <= outer_radius {
            (inner_radius as i32, outer_radius as i32)
        } else {
            (outer_radius as i32, inner_radius as i32)
        };
        let min_sq = r_min * r_min;
        let max_sq = r_max * r_max;

        let pixels = (-r_max..=r_max)
            .flat_map(move |dy| (-r_max..=r_max).map(move |dx| (dx, dy)))
            .filter(move |&(dx, dy)| {
                let dist_sq = dx * dx + dy * dy;
                (min_sq..=max_sq).contains(&dist_sq) && angle_within(pixel_angle(dx, dy), start_deg, end_deg)
            })
            .map(move |(dx, dy)| Pixel(center + Point::new(dx, dy), color));

        self.display.draw_iter(pixels).ok();
    }

    fn fill_triangle(&mut self, triangle: Triangle, color: Rgb565) {
        triangle
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self.display)
            .ok();
    }

    fn set_text_color(&mut self, foreground: Rgb565, background: Rgb565) {
        self.text_color = foreground;
        self.text_background = Some(background);
    }

    fn set_text_size(&mut self, size: TextSize) { self.text_size = size; }

    fn draw_text(&mut self, text: &str, position: Point, style: TextStyle) {
        let mut builder = MonoTextStyleBuilder::new()
            .font(self.text_size.font())
            .text_color(self.text_color);
        if let Some(background) = self.text_background {
            builder = builder.background_color(background);
        }

        Text::with_text_style(text, position, builder.build(), style)
            .draw(self.display)
            .ok();
    }
}

/// Screen angle of an offset from the center in degrees, in `[0, 360)`.
///
/// Y grows downward, so positive angles run clockwise.
fn pixel_angle(dx: i32, dy: i32) -> f32 {
    let radians = micromath::F32(dy as f32).atan2(micromath::F32(dx as f32)).0;
    let degrees = radians * (180.0 / core::f32::consts::PI);
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

fn angle_within(angle: f32, start_deg: f32, end_deg: f32) -> bool {
    if start_deg <= end_deg {
        angle >= start_deg && angle <= end_deg
    } else {
        angle >= start_deg || angle <= end_deg
    }
}

// =============================================================================
// Test Double
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================
