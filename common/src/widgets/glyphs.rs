//! Drive control glyphs shown next to the speed and brake buttons.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, Triangle};

use crate::canvas::Canvas;
use crate::colors::SILVER;
use crate::config::{ARROW_HALF_WIDTH, ARROW_HEIGHT, STOP_SIZE};

/// Upward triangle centered on `(x, y)`.
pub fn draw_speed_up_symbol<C: Canvas>(canvas: &mut C, x: i32, y: i32) {
    let half_h = ARROW_HEIGHT / 2;
    canvas.fill_triangle(
        Triangle::new(
            Point::new(x, y - half_h),
            Point::new(x - ARROW_HALF_WIDTH, y + half_h),
            Point::new(x + ARROW_HALF_WIDTH, y + half_h),
        ),
        SILVER,
    );
}

/// Square stop glyph centered on `(x, y)`.
pub fn draw_stop_symbol<C: Canvas>(canvas: &mut C, x: i32, y: i32) {
    let half = (STOP_SIZE / 2) as i32;
    canvas.fill_rect(
        Rectangle::new(Point::new(x - half, y - half), Size::new(STOP_SIZE, STOP_SIZE)),
        SILVER,
    );
}

/// Downward triangle centered on `(x, y)`.
pub fn draw_speed_down_symbol<C: Canvas>(canvas: &mut C, x: i32, y: i32) {
    let half_h = ARROW_HEIGHT / 2;
    canvas.fill_triangle(
        Triangle::new(
            Point::new(x, y + half_h),
            Point::new(x + ARROW_HALF_WIDTH, y - half_h),
            Point::new(x - ARROW_HALF_WIDTH, y - half_h),
        ),
        SILVER,
    );
}
