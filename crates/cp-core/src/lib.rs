pub mod canvas;
pub mod cross_circle;
pub mod layout;
pub mod model;
pub mod painter;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas, RegionCanvas};
pub use cross_circle::{CrossCircleGeometry, CrossCirclePainter};
pub use layout::{
    ContentScale, Element, Modifier, Screen, ScreenConfig, main_screen, paint_screen, resolve_layout,
    screen_extent,
};
pub use model::*;
pub use painter::Painter;
