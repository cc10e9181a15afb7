//! The painter contract as seen by a host: any canvas, any size.

use cp_core::{
    Canvas, CrossCircleGeometry, CrossCirclePainter, DrawCommand, Offset, Painter, RecordingCanvas,
    Size,
};

/// Intersection of the segments a→b and c→d, assuming they are not parallel.
fn intersect(a: Offset, b: Offset, c: Offset, d: Offset) -> Offset {
    let (r_x, r_y) = (b.x - a.x, b.y - a.y);
    let (s_x, s_y) = (d.x - c.x, d.y - c.y);
    let denom = r_x * s_y - r_y * s_x;
    let t = ((c.x - a.x) * s_y - (c.y - a.y) * s_x) / denom;
    Offset::new(a.x + t * r_x, a.y + t * r_y)
}

#[test]
fn independent_canvases_get_identical_sequences() {
    let painter = CrossCirclePainter::new();
    let mut first = RecordingCanvas::new(Size::new(320.0, 180.0));
    let mut second = RecordingCanvas::new(Size::new(320.0, 180.0));

    painter.render(&mut first, 320.0, 180.0);
    painter.render(&mut second, 320.0, 180.0);

    assert_eq!(first.commands().len(), 3);
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn cross_meets_at_center() {
    for size in [Size::square(100.0), Size::new(200.0, 100.0), Size::new(33.0, 71.0)] {
        let g = CrossCircleGeometry::for_size(size);
        let p = intersect(g.falling.0, g.falling.1, g.rising.0, g.rising.1);
        assert!((p.x - g.center.x).abs() < 1e-4, "{size:?}: {p:?}");
        assert!((p.y - g.center.y).abs() < 1e-4, "{size:?}: {p:?}");
    }
}

#[test]
fn render_ignores_intrinsic_size() {
    let painter = CrossCirclePainter::new();
    let mut canvas = RecordingCanvas::new(Size::new(640.0, 480.0));
    painter.draw(&mut canvas);

    assert_eq!(canvas.size(), Size::new(640.0, 480.0));
    match canvas.commands()[0] {
        DrawCommand::Circle { center, radius, .. } => {
            assert_eq!(center, Offset::new(320.0, 240.0));
            assert_eq!(radius, 240.0);
        }
        ref other => panic!("expected circle first, got {other:?}"),
    }
}
