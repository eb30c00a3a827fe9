use kurbo::Point;

use crate::{
    foundation::core::{Pixmap, Rgb8},
    geometry::fit::FitTransform,
};

/// Keeps the projection denominator nonzero for zero-length segments.
const SEGMENT_EPS: f64 = 1e-12;

/// Stroke a connected polyline into `pixmap` as capsule-shaped segments.
///
/// Each consecutive point pair is treated as a capsule of radius
/// `thickness / 2`: pixel coordinates are projected onto the segment with
/// the parameter clamped to `[0, 1]`, and pixels within the radius are
/// overwritten with `color`. Stroke edges are intentionally hard (no
/// antialiasing), unlike [`crate::fill_polygon`].
pub fn stroke_polyline(
    pixmap: &mut Pixmap,
    polyline: &[Point],
    color: Rgb8,
    thickness: f64,
    transform: &FitTransform,
) {
    if polyline.len() < 2 || pixmap.width == 0 || pixmap.height == 0 {
        return;
    }
    let points: Vec<Point> = polyline.iter().map(|&p| transform.apply(p)).collect();
    let radius = thickness / 2.0;
    let radius_sq = radius * radius;

    for seg in points.windows(2) {
        let (a, b) = (seg[0], seg[1]);

        let x0 = (((a.x.min(b.x) - radius).floor() as i64)).max(0);
        let y0 = (((a.y.min(b.y) - radius).floor() as i64)).max(0);
        let x1 = (((a.x.max(b.x) + radius).ceil() as i64)).min(i64::from(pixmap.width) - 1);
        let y1 = (((a.y.max(b.y) + radius).ceil() as i64)).min(i64::from(pixmap.height) - 1);
        if x0 > x1 || y0 > y1 {
            continue;
        }

        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let length_sq = dx * dx + dy * dy + SEGMENT_EPS;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let (px, py) = (x as f64, y as f64);
                let t = (((px - a.x) * dx + (py - a.y) * dy) / length_sq).clamp(0.0, 1.0);
                let proj_x = a.x + t * dx;
                let proj_y = a.y + t * dy;
                let dist_sq = (proj_x - px) * (proj_x - px) + (proj_y - py) * (proj_y - py);
                if dist_sq <= radius_sq {
                    pixmap.put(x as u32, y as u32, color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/stroke.rs"]
mod tests;
