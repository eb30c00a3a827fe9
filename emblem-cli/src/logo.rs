//! The built-in logo artwork: two filled contours plus a stroked polyline,
//! authored in a 443.18 x 514.29 source viewbox.

use emblem::{Artwork, Point, Rgb8};

const VIEWBOX_WIDTH: f64 = 443.18;
const VIEWBOX_HEIGHT: f64 = 514.29;
const STROKE_WIDTH: f64 = 12.0;

/// The default artwork rendered when no override is supplied.
pub fn builtin() -> Artwork {
    Artwork {
        viewbox_width: VIEWBOX_WIDTH,
        viewbox_height: VIEWBOX_HEIGHT,
        polygons: vec![
            vec![
                Point::new(0.0, 404.88),
                Point::new(0.0, 131.31),
                Point::new(225.66, 0.0),
                Point::new(418.56, 110.75),
                Point::new(194.25, 243.47),
                Point::new(194.25, 514.29),
                Point::new(0.0, 404.88),
            ],
            vec![
                Point::new(246.16, 508.73),
                Point::new(246.16, 276.28),
                Point::new(443.18, 158.67),
                Point::new(443.18, 300.92),
                Point::new(341.94, 358.37),
                Point::new(341.94, 454.11),
                Point::new(246.16, 508.73),
            ],
        ],
        polyline: vec![
            Point::new(246.16, 508.73),
            Point::new(194.25, 514.29),
            Point::new(194.25, 243.47),
            Point::new(315.64, 171.64),
            Point::new(333.25, 225.03),
        ],
        stroke_width: STROKE_WIDTH,
        fill: Rgb8::BLACK,
        background: Rgb8::WHITE,
    }
}
