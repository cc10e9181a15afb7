//! Recorded draw commands → standalone SVG document.

use cp_core::{
    Canvas, Color, DrawCommand, RecordingCanvas, Screen, ScreenConfig, Size, paint_screen,
    screen_extent,
};

/// SVG paint attributes take opaque hex; alpha goes in `*-opacity`.
fn paint_attr(name: &str, c: Color) -> String {
    let hex = Color { a: 1.0, ..c }.to_hex();
    if c.to_rgba8()[3] == 255 {
        format!("{name}=\"{hex}\"")
    } else {
        format!("{name}=\"{hex}\" {name}-opacity=\"{}\"", c.a)
    }
}

/// Emit `commands` as an SVG of the given canvas size, in order.
pub fn render_svg_commands(commands: &[DrawCommand], size: Size) -> String {
    let (width, height) = (size.width, size.height);
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));

    for cmd in commands {
        match *cmd {
            DrawCommand::Circle {
                color,
                center,
                radius,
            } => svg.push_str(&format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {} />\n",
                center.x,
                center.y,
                radius,
                paint_attr("fill", color)
            )),
            DrawCommand::Line {
                color,
                start,
                end,
                stroke_width,
            } => svg.push_str(&format!(
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} stroke-width=\"{}\" stroke-linecap=\"butt\" />\n",
                start.x,
                start.y,
                end.x,
                end.y,
                paint_attr("stroke", color),
                stroke_width
            )),
            DrawCommand::Rect {
                color,
                origin,
                size,
            } => svg.push_str(&format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {} />\n",
                origin.x,
                origin.y,
                size.width,
                size.height,
                paint_attr("fill", color)
            )),
        }
    }

    svg.push_str("</svg>\n");
    log::debug!("SVG export: {} commands, {} bytes", commands.len(), svg.len());
    svg
}

/// Lay out and paint `screen`, then export it at its natural extent.
pub fn render_svg(screen: &Screen, config: &ScreenConfig) -> String {
    let mut canvas = RecordingCanvas::new(screen_extent(screen, config));
    paint_screen(screen, config, &mut canvas);
    render_svg_commands(canvas.commands(), canvas.size())
}
