//! Drawing surface abstraction.
//!
//! A `Canvas` is supplied by the host for every draw pass. Painters only
//! issue primitives through it; they never own or keep a canvas.

use crate::model::{Color, Offset, ResolvedBounds, Size};
use serde::{Deserialize, Serialize};

/// Primitive drawing operations a host surface must provide.
pub trait Canvas {
    /// Current drawable area.
    fn size(&self) -> Size;

    /// Fill a circle.
    fn draw_circle(&mut self, color: Color, center: Offset, radius: f32);

    /// Stroke a straight segment with butt caps.
    fn draw_line(&mut self, color: Color, start: Offset, end: Offset, stroke_width: f32);

    /// Fill an axis-aligned rectangle.
    fn draw_rect(&mut self, color: Color, origin: Offset, size: Size);
}

// ─── Recorded commands ───────────────────────────────────────────────────

/// One primitive as issued to a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Circle {
        color: Color,
        center: Offset,
        radius: f32,
    },
    Line {
        color: Color,
        start: Offset,
        end: Offset,
        stroke_width: f32,
    },
    Rect {
        color: Color,
        origin: Offset,
        size: Size,
    },
}

impl DrawCommand {
    /// Replay this command onto another canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        match *self {
            DrawCommand::Circle {
                color,
                center,
                radius,
            } => canvas.draw_circle(color, center, radius),
            DrawCommand::Line {
                color,
                start,
                end,
                stroke_width,
            } => canvas.draw_line(color, start, end, stroke_width),
            DrawCommand::Rect {
                color,
                origin,
                size,
            } => canvas.draw_rect(color, origin, size),
        }
    }

    /// True when every coordinate and extent is a finite number.
    pub fn is_finite(&self) -> bool {
        let values: [f32; 5] = match *self {
            DrawCommand::Circle { center, radius, .. } => {
                [center.x, center.y, radius, 0.0, 0.0]
            }
            DrawCommand::Line {
                start,
                end,
                stroke_width,
                ..
            } => [start.x, start.y, end.x, end.y, stroke_width],
            DrawCommand::Rect { origin, size, .. } => {
                [origin.x, origin.y, size.width, size.height, 0.0]
            }
        };
        values.iter().all(|v| v.is_finite())
    }
}

/// Canvas that stores every command instead of rasterizing.
///
/// Used for off-screen rendering, export, and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Serialize the recorded commands as pretty JSON.
    ///
    /// # Errors
    /// Fails on the first command holding a NaN or infinite value, since
    /// `serde_json` would silently write those as `null`.
    pub fn to_json(&self) -> Result<String, String> {
        if let Some(i) = self.commands.iter().position(|c| !c.is_finite()) {
            return Err(format!("command {i} has a non-finite value: {:?}", self.commands[i]));
        }
        serde_json::to_string_pretty(&self.commands).map_err(|e| format!("JSON encode: {e}"))
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_circle(&mut self, color: Color, center: Offset, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            color,
            center,
            radius,
        });
    }

    fn draw_line(&mut self, color: Color, start: Offset, end: Offset, stroke_width: f32) {
        self.commands.push(DrawCommand::Line {
            color,
            start,
            end,
            stroke_width,
        });
    }

    fn draw_rect(&mut self, color: Color, origin: Offset, size: Size) {
        self.commands.push(DrawCommand::Rect {
            color,
            origin,
            size,
        });
    }
}

// ─── Regions ─────────────────────────────────────────────────────────────

/// A sub-rectangle of a parent canvas, presented as a canvas of its own.
///
/// Coordinates are relative to the region's top-left corner. Nothing is
/// clipped: primitives that overflow the region reach the parent unchanged.
pub struct RegionCanvas<'a> {
    parent: &'a mut dyn Canvas,
    bounds: ResolvedBounds,
}

impl<'a> RegionCanvas<'a> {
    pub fn new(parent: &'a mut dyn Canvas, bounds: ResolvedBounds) -> Self {
        Self { parent, bounds }
    }

    fn to_parent(&self, p: Offset) -> Offset {
        p.translate(self.bounds.x, self.bounds.y)
    }
}

impl Canvas for RegionCanvas<'_> {
    fn size(&self) -> Size {
        self.bounds.size()
    }

    fn draw_circle(&mut self, color: Color, center: Offset, radius: f32) {
        let center = self.to_parent(center);
        self.parent.draw_circle(color, center, radius);
    }

    fn draw_line(&mut self, color: Color, start: Offset, end: Offset, stroke_width: f32) {
        let (start, end) = (self.to_parent(start), self.to_parent(end));
        self.parent.draw_line(color, start, end, stroke_width);
    }

    fn draw_rect(&mut self, color: Color, origin: Offset, size: Size) {
        let origin = self.to_parent(origin);
        self.parent.draw_rect(color, origin, size);
    }
}
