//! The hook a host calls back into during its render pass.

use crate::canvas::Canvas;
use crate::model::Size;

/// Something that can draw itself onto a canvas of any size.
///
/// Implementations must be pure with respect to their inputs: two calls with
/// the same dimensions issue the same command sequence.
pub trait Painter: Send + Sync {
    /// Size hint for layout. Not enforced at draw time.
    fn intrinsic_size(&self) -> Size;

    /// Draw into `canvas`, treating `width` × `height` as the drawable area.
    fn render(&self, canvas: &mut dyn Canvas, width: f32, height: f32);

    /// Draw at the canvas's own size.
    fn draw(&self, canvas: &mut dyn Canvas) {
        let size = canvas.size();
        self.render(canvas, size.width, size.height);
    }
}

impl std::fmt::Debug for dyn Painter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.intrinsic_size();
        write!(f, "Painter({}x{})", s.width, s.height)
    }
}
