use kurbo::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Uniform scale plus offset mapping source coordinates into canvas space.
///
/// The transform preserves aspect ratio and centers the scaled source
/// bounding box within the canvas.
pub struct FitTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal offset in canvas pixels.
    pub offset_x: f64,
    /// Vertical offset in canvas pixels.
    pub offset_y: f64,
}

impl FitTransform {
    /// Compute the largest uniform scale such that a `viewbox_width` x
    /// `viewbox_height` source box fits within `canvas_size - 2 * margin`
    /// in both dimensions, with offsets centering the scaled box.
    pub fn fit(viewbox_width: f64, viewbox_height: f64, canvas_size: u32, margin: u32) -> Self {
        let available = f64::from(canvas_size) - 2.0 * f64::from(margin);
        let scale = (available / viewbox_width).min(available / viewbox_height);
        Self {
            scale,
            offset_x: (f64::from(canvas_size) - viewbox_width * scale) / 2.0,
            offset_y: (f64::from(canvas_size) - viewbox_height * scale) / 2.0,
        }
    }

    /// Map a source-space point into canvas space.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.offset_x + p.x * self.scale,
            self.offset_y + p.y * self.scale,
        )
    }
}
