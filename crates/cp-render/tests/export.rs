//! Integration tests: demo screen → SVG at several densities.

use cp_core::{ScreenConfig, main_screen};
use cp_render::render_svg;

#[test]
fn high_density_keeps_painted_box_at_intrinsic_size() {
    let config = ScreenConfig {
        density: 2.0,
        ..Default::default()
    };
    let svg = render_svg(&main_screen(), &config);

    assert!(svg.contains("width=\"220\" height=\"420\""), "{svg}");
    assert!(svg.contains("<circle cx=\"100\" cy=\"100\" r=\"100\""), "{svg}");
    assert!(svg.contains("<circle cx=\"110\" cy=\"310\" r=\"50\""), "{svg}");
}

#[test]
fn inset_shifts_everything_down() {
    let config = ScreenConfig {
        density: 1.0,
        status_bar_inset: 24.0,
    };
    let svg = render_svg(&main_screen(), &config);

    assert!(svg.contains("height=\"284\""), "{svg}");
    assert!(svg.contains("<circle cx=\"50\" cy=\"74\" r=\"50\""), "{svg}");
    assert!(svg.contains("<rect x=\"0\" y=\"124\" width=\"160\" height=\"160\""), "{svg}");
}
