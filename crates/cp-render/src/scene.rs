//! Canvas primitives → Vello drawing commands.
//!
//! Wraps a caller-owned `vello::Scene`. The caller clears the scene each
//! frame and presents it via wgpu.

use cp_core::{Canvas, Color, Offset, Size};
use kurbo::{Affine, Cap, Circle, Line, Point, Rect, Stroke};
use peniko::Fill;
use vello::Scene;

/// A `Canvas` that appends fills and strokes to a Vello scene.
pub struct VelloCanvas<'a> {
    scene: &'a mut Scene,
    size: Size,
    transform: Affine,
}

impl<'a> VelloCanvas<'a> {
    pub fn new(scene: &'a mut Scene, size: Size) -> Self {
        Self {
            scene,
            size,
            transform: Affine::IDENTITY,
        }
    }

    /// Apply `transform` to every primitive, e.g. a device-pixel scale.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }
}

impl Canvas for VelloCanvas<'_> {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_circle(&mut self, color: Color, center: Offset, radius: f32) {
        let shape = Circle::new(to_point(center), radius as f64);
        self.scene
            .fill(Fill::NonZero, self.transform, to_color(color), None, &shape);
    }

    fn draw_line(&mut self, color: Color, start: Offset, end: Offset, stroke_width: f32) {
        let shape = Line::new(to_point(start), to_point(end));
        let stroke = Stroke::new(stroke_width as f64).with_caps(Cap::Butt);
        self.scene
            .stroke(&stroke, self.transform, to_color(color), None, &shape);
    }

    fn draw_rect(&mut self, color: Color, origin: Offset, size: Size) {
        let shape = Rect::from_origin_size(
            to_point(origin),
            (size.width as f64, size.height as f64),
        );
        self.scene
            .fill(Fill::NonZero, self.transform, to_color(color), None, &shape);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn to_point(p: Offset) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

fn to_color(c: Color) -> peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    peniko::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cp_core::{CrossCirclePainter, Painter, ScreenConfig, main_screen, paint_screen};

    #[test]
    fn painter_fills_scene() {
        let mut scene = Scene::new();
        {
            let mut canvas = VelloCanvas::new(&mut scene, Size::square(100.0));
            CrossCirclePainter::new().draw(&mut canvas);
        }
        assert!(!scene.encoding().is_empty());
    }

    #[test]
    fn screen_paints_through_transform() {
        let mut scene = Scene::new();
        {
            let mut canvas = VelloCanvas::new(&mut scene, Size::new(160.0, 260.0))
                .with_transform(Affine::scale(2.0));
            paint_screen(&main_screen(), &ScreenConfig::default(), &mut canvas);
        }
        assert!(!scene.encoding().is_empty());
    }

    #[test]
    fn color_conversion_is_8_bit() {
        let rgba = to_color(Color::GRAY).to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (136, 136, 136, 255));
    }
}
