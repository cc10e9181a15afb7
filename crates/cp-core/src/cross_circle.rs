//! Filled circle with a red "X" over it.
//!
//! The circle is inscribed in the drawable area; the cross spans a square of
//! side `min_dimension / 2` centered on the circle. Everything scales with the
//! draw-time size, so the declared intrinsic size only matters to layout.

use crate::canvas::Canvas;
use crate::model::{Color, Offset, Size};
use crate::painter::Painter;

pub const CIRCLE_COLOR: Color = Color::BLUE;
pub const CROSS_COLOR: Color = Color::RED;
pub const CROSS_STROKE_WIDTH: f32 = 5.0;
pub const INTRINSIC_SIZE: Size = Size::square(100.0);

/// Positions computed for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossCircleGeometry {
    pub center: Offset,
    pub radius: f32,
    /// Top-left → bottom-right.
    pub falling: (Offset, Offset),
    /// Bottom-left → top-right.
    pub rising: (Offset, Offset),
}

impl CrossCircleGeometry {
    pub fn for_size(size: Size) -> Self {
        let min_dim = size.min_dimension();
        let center = size.center();
        let arm = min_dim / 4.0;

        Self {
            center,
            radius: min_dim / 2.0,
            falling: (center.translate(-arm, -arm), center.translate(arm, arm)),
            rising: (center.translate(-arm, arm), center.translate(arm, -arm)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CrossCirclePainter;

impl CrossCirclePainter {
    pub fn new() -> Self {
        Self
    }
}

impl Painter for CrossCirclePainter {
    fn intrinsic_size(&self) -> Size {
        INTRINSIC_SIZE
    }

    fn render(&self, canvas: &mut dyn Canvas, width: f32, height: f32) {
        let geo = CrossCircleGeometry::for_size(Size::new(width, height));
        log::trace!(
            "PAINT cross-circle {}x{} r={} at ({}, {})",
            width,
            height,
            geo.radius,
            geo.center.x,
            geo.center.y
        );

        canvas.draw_circle(CIRCLE_COLOR, geo.center, geo.radius);

        let (start, end) = geo.falling;
        canvas.draw_line(CROSS_COLOR, start, end, CROSS_STROKE_WIDTH);
        let (start, end) = geo.rising;
        canvas.draw_line(CROSS_COLOR, start, end, CROSS_STROKE_WIDTH);
    }
}
