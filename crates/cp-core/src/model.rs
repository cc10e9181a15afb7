//! Geometry and color primitives shared by painters, canvases and layout.
//!
//! All coordinates are `f32` in canvas units with the origin at the top-left
//! corner and y growing downwards.

use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLUE: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgba(1.0, 1.0, 0.0, 1.0);
    /// `#888888`
    pub const GRAY: Color = Color::rgba(136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as 8-bit values, rounded.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Emit `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Offset) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Width and height of a drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// The shorter of the two sides.
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> Offset {
        Offset::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Absolute position and size of a laid-out element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ResolvedBounds {
    pub fn new(origin: Offset, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Offset {
        Offset::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrink every side by `amount`. Sides never go negative.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2.0 * amount).max(0.0),
            height: (self.height - 2.0 * amount).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_as_hex() {
        assert_eq!(Color::BLUE.to_hex(), "#0000FF");
        assert_eq!(Color::RED.to_hex(), "#FF0000");
        assert_eq!(Color::GRAY.to_hex(), "#888888");
        assert_eq!(Color::YELLOW.to_hex(), "#FFFF00");
    }

    #[test]
    fn translucent_hex_carries_alpha() {
        let c = Color::rgba(1.0, 0.0, 0.0, 128.0 / 255.0);
        assert_eq!(c.to_rgba8(), [255, 0, 0, 128]);
        assert_eq!(c.to_hex(), "#FF000080");
    }

    #[test]
    fn size_min_dimension_and_center() {
        let s = Size::new(200.0, 100.0);
        assert_eq!(s.min_dimension(), 100.0);
        assert_eq!(s.center(), Offset::new(100.0, 50.0));
    }

    #[test]
    fn bounds_inset_clamps_to_zero() {
        let b = ResolvedBounds::new(Offset::ZERO, Size::square(40.0));
        let inner = b.inset(30.0);
        assert_eq!(inner.origin(), Offset::new(30.0, 30.0));
        assert_eq!(inner.size(), Size::ZERO);
    }
}
