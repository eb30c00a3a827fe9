use kurbo::Point;

use crate::{
    foundation::core::{Pixmap, Rgb8},
    geometry::fit::FitTransform,
};

/// Sub-pixel coverage sample offsets, a fixed 2x2 grid per pixel.
const SAMPLE_OFFSETS: [(f64, f64); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// Keeps the crossing denominator nonzero for horizontal edges.
const EDGE_EPS: f64 = 1e-12;

/// Fill a closed polygon into `pixmap` with antialiased edges.
///
/// Vertices are mapped through `transform`, then every pixel in the
/// (padded, clamped) bounding box is tested at [`SAMPLE_OFFSETS`] with a
/// ray-casting inside test. Fractional coverage blends `color` into the
/// existing pixel; zero-coverage pixels are untouched. Degenerate or
/// out-of-canvas polygons clip or no-op silently.
pub fn fill_polygon(pixmap: &mut Pixmap, polygon: &[Point], color: Rgb8, transform: &FitTransform) {
    if polygon.len() < 3 || pixmap.width == 0 || pixmap.height == 0 {
        return;
    }
    let verts: Vec<Point> = polygon.iter().map(|&p| transform.apply(p)).collect();

    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for v in &verts {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }

    let x0 = ((min.x.floor() as i64) - 1).max(0);
    let y0 = ((min.y.floor() as i64) - 1).max(0);
    let x1 = ((max.x.ceil() as i64) + 1).min(i64::from(pixmap.width) - 1);
    let y1 = ((max.y.ceil() as i64) + 1).min(i64::from(pixmap.height) - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            let mut hits = 0u32;
            for (dx, dy) in SAMPLE_OFFSETS {
                if point_in_polygon(x as f64 + dx, y as f64 + dy, &verts) {
                    hits += 1;
                }
            }
            if hits > 0 {
                let t = f64::from(hits) / SAMPLE_OFFSETS.len() as f64;
                let (x, y) = (x as u32, y as u32);
                let blended = blend(pixmap.get(x, y), color, t);
                pixmap.put(x, y, blended);
            }
        }
    }
}

/// Ray-casting inside test against a single closed contour.
///
/// An edge toggles containment when the sample's y lies strictly between
/// the endpoint ys and the sample sits left of the edge's x-intersection.
fn point_in_polygon(x: f64, y: f64, verts: &[Point]) -> bool {
    let mut inside = false;
    for (i, a) in verts.iter().enumerate() {
        let b = verts[(i + 1) % verts.len()];
        if (a.y > y) != (b.y > y) {
            let x_cross = (b.x - a.x) * (y - a.y) / (b.y - a.y + EDGE_EPS) + a.x;
            if x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Per-channel linear blend toward `src` by coverage `t`, truncating.
fn blend(dst: Rgb8, src: Rgb8, t: f64) -> Rgb8 {
    let mix = |d: u8, s: u8| ((1.0 - t) * f64::from(d) + t * f64::from(s)) as u8;
    Rgb8 {
        r: mix(dst.r, src.r),
        g: mix(dst.g, src.g),
        b: mix(dst.b, src.b),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/fill.rs"]
mod tests;
