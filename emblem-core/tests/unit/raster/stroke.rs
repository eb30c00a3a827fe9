use super::*;

fn identity() -> FitTransform {
    FitTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    }
}

#[test]
fn capsule_contains_segment_but_not_its_extension() {
    let mut pixmap = Pixmap::filled(20, 20, Rgb8::WHITE);
    let segment = [Point::new(5.0, 5.0), Point::new(15.0, 5.0)];
    stroke_polyline(&mut pixmap, &segment, Rgb8::BLACK, 4.0, &identity());

    // On the segment.
    assert_eq!(pixmap.get(10, 5), Rgb8::BLACK);
    // Exactly at the radius: boundary is inclusive.
    assert_eq!(pixmap.get(10, 7), Rgb8::BLACK);
    // Beyond the radius.
    assert_eq!(pixmap.get(10, 8), Rgb8::WHITE);
    // Inside the semicircular end cap.
    assert_eq!(pixmap.get(4, 5), Rgb8::BLACK);
    // Past the end cap: a capsule, not an infinite line.
    assert_eq!(pixmap.get(1, 5), Rgb8::WHITE);
}

#[test]
fn stroke_edge_is_hard() {
    let mut pixmap = Pixmap::filled(20, 20, Rgb8::WHITE);
    stroke_polyline(
        &mut pixmap,
        &[Point::new(4.0, 10.0), Point::new(16.0, 10.0)],
        Rgb8::BLACK,
        5.0,
        &identity(),
    );
    for y in 0..20 {
        for x in 0..20 {
            let c = pixmap.get(x, y);
            assert!(
                c == Rgb8::BLACK || c == Rgb8::WHITE,
                "blended pixel at ({x},{y}): {c:?}"
            );
        }
    }
}

#[test]
fn zero_length_segment_paints_a_disc() {
    let mut pixmap = Pixmap::filled(16, 16, Rgb8::WHITE);
    let p = Point::new(7.0, 7.0);
    stroke_polyline(&mut pixmap, &[p, p], Rgb8::BLACK, 6.0, &identity());
    assert_eq!(pixmap.get(7, 7), Rgb8::BLACK);
    assert_eq!(pixmap.get(7, 9), Rgb8::BLACK);
    assert_eq!(pixmap.get(7, 11), Rgb8::WHITE);
}

#[test]
fn short_polyline_is_a_noop() {
    let mut pixmap = Pixmap::filled(8, 8, Rgb8::WHITE);
    stroke_polyline(&mut pixmap, &[Point::new(3.0, 3.0)], Rgb8::BLACK, 4.0, &identity());
    stroke_polyline(&mut pixmap, &[], Rgb8::BLACK, 4.0, &identity());
    assert_eq!(pixmap, Pixmap::filled(8, 8, Rgb8::WHITE));
}

#[test]
fn consecutive_segments_connect_at_the_joint() {
    let mut pixmap = Pixmap::filled(20, 20, Rgb8::WHITE);
    let polyline = [
        Point::new(3.0, 3.0),
        Point::new(12.0, 3.0),
        Point::new(12.0, 12.0),
    ];
    stroke_polyline(&mut pixmap, &polyline, Rgb8::BLACK, 4.0, &identity());
    assert_eq!(pixmap.get(7, 3), Rgb8::BLACK);
    assert_eq!(pixmap.get(12, 3), Rgb8::BLACK);
    assert_eq!(pixmap.get(12, 8), Rgb8::BLACK);
    assert_eq!(pixmap.get(3, 12), Rgb8::WHITE);
}

#[test]
fn out_of_canvas_segment_clips_silently() {
    let mut pixmap = Pixmap::filled(6, 6, Rgb8::WHITE);
    stroke_polyline(
        &mut pixmap,
        &[Point::new(-10.0, 2.0), Point::new(3.0, 2.0)],
        Rgb8::BLACK,
        2.0,
        &identity(),
    );
    assert_eq!(pixmap.get(0, 2), Rgb8::BLACK);
    assert_eq!(pixmap.get(5, 5), Rgb8::WHITE);

    let mut far = Pixmap::filled(6, 6, Rgb8::WHITE);
    stroke_polyline(
        &mut far,
        &[Point::new(40.0, 40.0), Point::new(50.0, 40.0)],
        Rgb8::BLACK,
        4.0,
        &identity(),
    );
    assert_eq!(far, Pixmap::filled(6, 6, Rgb8::WHITE));
}

#[test]
fn transform_scales_positions_but_not_thickness() {
    let mut pixmap = Pixmap::filled(24, 24, Rgb8::WHITE);
    let t = FitTransform {
        scale: 2.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
    stroke_polyline(
        &mut pixmap,
        &[Point::new(2.0, 5.0), Point::new(10.0, 5.0)],
        Rgb8::BLACK,
        4.0,
        &t,
    );
    // Segment maps to (4,10)..(20,10); radius stays 2.
    assert_eq!(pixmap.get(12, 10), Rgb8::BLACK);
    assert_eq!(pixmap.get(12, 12), Rgb8::BLACK);
    assert_eq!(pixmap.get(12, 13), Rgb8::WHITE);
}
