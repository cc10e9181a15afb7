//! Screen composition: a column of painter-backed elements.
//!
//! Sizes in modifiers are density-independent (`dp`) and converted with
//! `ScreenConfig::density`. Painter intrinsic sizes are already in pixels
//! and are never scaled by density.

use crate::canvas::{Canvas, RegionCanvas};
use crate::cross_circle::CrossCirclePainter;
use crate::model::{Color, Offset, ResolvedBounds, Size};
use crate::painter::Painter;
use std::sync::Arc;

// ─── Config ───────────────────────────────────────────────────────────────

/// Display parameters for laying out a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig {
    /// Pixels per dp.
    pub density: f32,
    /// Space reserved above the column, in dp.
    pub status_bar_inset: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            status_bar_inset: 0.0,
        }
    }
}

impl ScreenConfig {
    fn px(&self, dp: f32) -> f32 {
        dp * self.density
    }
}

// ─── Tree ─────────────────────────────────────────────────────────────────

/// How a painter is fitted into the region it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentScale {
    /// Scale up or down, preserving aspect ratio, until it touches the region.
    Fit,
    /// Like `Fit`, but never scale up.
    Inside,
}

/// One link in an element's modifier chain, applied outer → inner.
#[derive(Debug, Clone)]
pub enum Modifier {
    /// Fixed size in dp.
    Size(Size),
    /// Uniform padding on every side, in dp.
    Padding(f32),
    Background(Color),
    /// Size the content to the painter's intrinsic size and draw it.
    Paint(Arc<dyn Painter>),
}

#[derive(Debug, Clone)]
pub enum Element {
    /// Draws its painter fitted into whatever region the modifiers leave.
    Image {
        painter: Arc<dyn Painter>,
        modifiers: Vec<Modifier>,
    },
    /// A container whose only content comes from its modifiers.
    Box { modifiers: Vec<Modifier> },
}

impl Element {
    fn modifiers(&self) -> &[Modifier] {
        match self {
            Element::Image { modifiers, .. } | Element::Box { modifiers } => modifiers,
        }
    }
}

/// A vertical stack of elements, left-aligned.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub children: Vec<Element>,
}

/// The demo screen: one painter in a 100dp image, a second one painted into
/// a yellow box padded 30dp inside a gray one.
pub fn main_screen() -> Screen {
    let first: Arc<dyn Painter> = Arc::new(CrossCirclePainter::new());
    let second: Arc<dyn Painter> = Arc::new(CrossCirclePainter::new());

    Screen {
        children: vec![
            Element::Image {
                painter: first,
                modifiers: vec![Modifier::Size(Size::square(100.0))],
            },
            Element::Box {
                modifiers: vec![
                    Modifier::Background(Color::GRAY),
                    Modifier::Padding(30.0),
                    Modifier::Background(Color::YELLOW),
                    Modifier::Paint(second),
                ],
            },
        ],
    }
}

// ─── Measure ──────────────────────────────────────────────────────────────

/// Size an element wants, walking its modifiers inner → outer.
pub fn measure(element: &Element, config: &ScreenConfig) -> Size {
    let mut size = match element {
        Element::Image { painter, .. } => painter.intrinsic_size(),
        Element::Box { .. } => Size::ZERO,
    };

    for modifier in element.modifiers().iter().rev() {
        size = match modifier {
            Modifier::Size(s) => s.scale(config.density),
            Modifier::Padding(p) => {
                let p = config.px(*p);
                Size::new(size.width + 2.0 * p, size.height + 2.0 * p)
            }
            Modifier::Background(_) => size,
            Modifier::Paint(painter) => {
                let intrinsic = painter.intrinsic_size();
                Size::new(size.width.max(intrinsic.width), size.height.max(intrinsic.height))
            }
        };
    }

    size
}

/// Resolve the bounds of every child of `screen`, in order.
pub fn resolve_layout(screen: &Screen, config: &ScreenConfig) -> Vec<ResolvedBounds> {
    let mut y = config.px(config.status_bar_inset);
    let mut out = Vec::with_capacity(screen.children.len());

    for child in &screen.children {
        let size = measure(child, config);
        out.push(ResolvedBounds::new(Offset::new(0.0, y), size));
        y += size.height;
    }

    log::debug!("LAYOUT {} children, column height {}", out.len(), y);
    out
}

// ─── Paint ────────────────────────────────────────────────────────────────

/// Place a painter of `intrinsic` size inside `region`, centered.
pub fn fit_bounds(region: ResolvedBounds, intrinsic: Size, mode: ContentScale) -> ResolvedBounds {
    if intrinsic.width <= 0.0 || intrinsic.height <= 0.0 {
        return region;
    }

    let mut scale = (region.width / intrinsic.width).min(region.height / intrinsic.height);
    if mode == ContentScale::Inside {
        scale = scale.min(1.0);
    }

    let size = intrinsic.scale(scale);
    let origin = Offset::new(
        region.x + (region.width - size.width) / 2.0,
        region.y + (region.height - size.height) / 2.0,
    );
    ResolvedBounds::new(origin, size)
}

fn paint_into(painter: &dyn Painter, canvas: &mut dyn Canvas, bounds: ResolvedBounds) {
    let mut region = RegionCanvas::new(canvas, bounds);
    painter.draw(&mut region);
}

fn paint_element(
    element: &Element,
    canvas: &mut dyn Canvas,
    bounds: ResolvedBounds,
    config: &ScreenConfig,
) {
    let mut region = bounds;

    for modifier in element.modifiers() {
        match modifier {
            Modifier::Size(s) => {
                let s = s.scale(config.density);
                region.width = region.width.min(s.width);
                region.height = region.height.min(s.height);
            }
            Modifier::Padding(p) => region = region.inset(config.px(*p)),
            Modifier::Background(color) => canvas.draw_rect(*color, region.origin(), region.size()),
            Modifier::Paint(painter) => {
                let target = fit_bounds(region, painter.intrinsic_size(), ContentScale::Inside);
                paint_into(painter.as_ref(), canvas, target);
            }
        }
    }

    if let Element::Image { painter, .. } = element {
        let target = fit_bounds(region, painter.intrinsic_size(), ContentScale::Fit);
        paint_into(painter.as_ref(), canvas, target);
    }
}

/// Lay out `screen` and paint it, top to bottom.
pub fn paint_screen(screen: &Screen, config: &ScreenConfig, canvas: &mut dyn Canvas) {
    let bounds = resolve_layout(screen, config);
    for (child, b) in screen.children.iter().zip(bounds) {
        log::trace!("PAINT element at ({}, {}) {}x{}", b.x, b.y, b.width, b.height);
        paint_element(child, canvas, b, config);
    }
}

/// Smallest canvas that holds the whole laid-out screen.
pub fn screen_extent(screen: &Screen, config: &ScreenConfig) -> Size {
    resolve_layout(screen, config)
        .iter()
        .fold(Size::ZERO, |acc, b| {
            Size::new(acc.width.max(b.x + b.width), acc.height.max(b.y + b.height))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn image_takes_its_fixed_size() {
        let screen = main_screen();
        let size = measure(&screen.children[0], &ScreenConfig::default());
        assert_eq!(size, Size::square(100.0));
    }

    #[test]
    fn padded_box_wraps_intrinsic_painter() {
        let screen = main_screen();
        let config = ScreenConfig {
            density: 2.0,
            ..Default::default()
        };
        // 100px intrinsic + 2 × 30dp × 2
        assert_eq!(measure(&screen.children[1], &config), Size::square(220.0));
    }

    #[test]
    fn column_starts_below_inset() {
        let config = ScreenConfig {
            density: 1.5,
            status_bar_inset: 24.0,
        };
        let bounds = resolve_layout(&main_screen(), &config);
        assert_eq!(bounds[0].y, 36.0);
        assert_eq!(bounds[1].y, 36.0 + 150.0);
    }

    #[test]
    fn fit_scales_up_inside_does_not() {
        let region = ResolvedBounds::new(Offset::new(10.0, 10.0), Size::new(300.0, 200.0));
        let fit = fit_bounds(region, Size::square(100.0), ContentScale::Fit);
        assert_eq!(fit, ResolvedBounds::new(Offset::new(60.0, 10.0), Size::square(200.0)));

        let inside = fit_bounds(region, Size::square(100.0), ContentScale::Inside);
        assert_eq!(inside, ResolvedBounds::new(Offset::new(110.0, 60.0), Size::square(100.0)));
    }

    #[test]
    fn extent_covers_both_children() {
        let extent = screen_extent(&main_screen(), &ScreenConfig::default());
        assert_eq!(extent, Size::new(160.0, 260.0));
    }
}
