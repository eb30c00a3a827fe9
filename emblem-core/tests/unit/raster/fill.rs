use super::*;

fn identity() -> FitTransform {
    FitTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    }
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

#[test]
fn convex_fill_coverage_is_monotone() {
    let mut pixmap = Pixmap::filled(12, 12, Rgb8::WHITE);
    // Half-integer bounds so boundary pixels straddle the edge.
    fill_polygon(&mut pixmap, &square(2.5, 2.5, 8.5, 8.5), Rgb8::BLACK, &identity());

    // Fully inside: exact fill color.
    assert_eq!(pixmap.get(4, 4), Rgb8::BLACK);
    // Fully outside: untouched.
    assert_eq!(pixmap.get(0, 0), Rgb8::WHITE);
    assert_eq!(pixmap.get(11, 11), Rgb8::WHITE);
    // Straddling the left edge: exactly half the samples land inside.
    let edge = pixmap.get(2, 4);
    assert_eq!(edge, Rgb8::new(127, 127, 127));
    assert!(edge.r > Rgb8::BLACK.r && edge.r < Rgb8::WHITE.r);
}

#[test]
fn integer_aligned_square_fills_exactly() {
    let mut pixmap = Pixmap::filled(10, 10, Rgb8::WHITE);
    fill_polygon(&mut pixmap, &square(2.0, 2.0, 8.0, 8.0), Rgb8::BLACK, &identity());
    for y in 0..10 {
        for x in 0..10 {
            let expected = if (2..8).contains(&x) && (2..8).contains(&y) {
                Rgb8::BLACK
            } else {
                Rgb8::WHITE
            };
            assert_eq!(pixmap.get(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn transform_is_applied_before_rasterization() {
    let mut pixmap = Pixmap::filled(16, 16, Rgb8::WHITE);
    let t = FitTransform {
        scale: 2.0,
        offset_x: 4.0,
        offset_y: 4.0,
    };
    // Unit-space square maps to (4,4)..(12,12).
    fill_polygon(&mut pixmap, &square(0.0, 0.0, 4.0, 4.0), Rgb8::BLACK, &t);
    assert_eq!(pixmap.get(8, 8), Rgb8::BLACK);
    assert_eq!(pixmap.get(2, 8), Rgb8::WHITE);
}

#[test]
fn degenerate_polygon_is_a_noop() {
    let mut pixmap = Pixmap::filled(8, 8, Rgb8::WHITE);
    let p = Point::new(3.0, 3.0);
    fill_polygon(&mut pixmap, &[p, p, p], Rgb8::BLACK, &identity());
    assert_eq!(pixmap, Pixmap::filled(8, 8, Rgb8::WHITE));
}

#[test]
fn short_polygon_is_a_noop() {
    let mut pixmap = Pixmap::filled(8, 8, Rgb8::WHITE);
    fill_polygon(
        &mut pixmap,
        &[Point::ZERO, Point::new(7.0, 7.0)],
        Rgb8::BLACK,
        &identity(),
    );
    assert_eq!(pixmap, Pixmap::filled(8, 8, Rgb8::WHITE));
}

#[test]
fn out_of_canvas_polygon_clips_silently() {
    let mut pixmap = Pixmap::filled(4, 4, Rgb8::WHITE);
    fill_polygon(&mut pixmap, &square(-5.0, -5.0, 2.0, 2.0), Rgb8::BLACK, &identity());
    assert_eq!(pixmap.get(0, 0), Rgb8::BLACK);
    assert_eq!(pixmap.get(3, 3), Rgb8::WHITE);

    let mut far = Pixmap::filled(4, 4, Rgb8::WHITE);
    fill_polygon(&mut far, &square(10.0, 10.0, 20.0, 20.0), Rgb8::BLACK, &identity());
    assert_eq!(far, Pixmap::filled(4, 4, Rgb8::WHITE));
}

#[test]
fn blend_accumulates_over_prior_fills() {
    let mut pixmap = Pixmap::filled(12, 12, Rgb8::WHITE);
    let edge = square(2.5, 2.5, 8.5, 8.5);
    fill_polygon(&mut pixmap, &edge, Rgb8::BLACK, &identity());
    fill_polygon(&mut pixmap, &edge, Rgb8::BLACK, &identity());
    // Half coverage applied twice: 255 -> 127 -> 63.
    assert_eq!(pixmap.get(2, 4), Rgb8::new(63, 63, 63));
}

#[test]
fn point_in_polygon_tolerates_horizontal_edges() {
    let verts = square(1.0, 1.0, 5.0, 5.0);
    assert!(point_in_polygon(3.0, 3.0, &verts));
    assert!(!point_in_polygon(0.5, 3.0, &verts));
    // Sample exactly level with the horizontal edges must not fault.
    assert!(!point_in_polygon(3.0, 0.5, &verts));
}
