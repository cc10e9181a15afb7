pub mod scene;
pub mod svg;

pub use scene::VelloCanvas;
pub use svg::{render_svg, render_svg_commands};
