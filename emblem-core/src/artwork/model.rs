use kurbo::Point;

use crate::foundation::{
    core::Rgb8,
    error::{EmblemError, EmblemResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A vector logo: filled contours plus an optional stroked polyline.
///
/// An artwork is a pure data model that can be built programmatically or
/// deserialized via Serde (JSON). Coordinates live in an abstract source
/// space whose bounds are `viewbox_width` x `viewbox_height`; the render
/// pipeline maps them into canvas space with a [`crate::FitTransform`].
pub struct Artwork {
    /// Source-space bounding box width.
    pub viewbox_width: f64,
    /// Source-space bounding box height.
    pub viewbox_height: f64,
    /// Closed filled contours. Each is an ordered ring of at least three
    /// points; the last point connects back to the first implicitly.
    pub polygons: Vec<Vec<Point>>,
    /// Open stroked path drawn over the filled contours. Empty disables
    /// stroking.
    #[serde(default)]
    pub polyline: Vec<Point>,
    /// Stroke thickness in canvas pixels (not scaled by the fit transform).
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Fill and stroke color.
    pub fill: Rgb8,
    /// Canvas background color.
    pub background: Rgb8,
}

fn default_stroke_width() -> f64 {
    12.0
}

impl Artwork {
    /// Check structural invariants the rasterizer relies on.
    pub fn validate(&self) -> EmblemResult<()> {
        if !(self.viewbox_width.is_finite() && self.viewbox_width > 0.0) {
            return Err(EmblemError::validation("viewbox width must be finite and > 0"));
        }
        if !(self.viewbox_height.is_finite() && self.viewbox_height > 0.0) {
            return Err(EmblemError::validation(
                "viewbox height must be finite and > 0",
            ));
        }
        for (idx, polygon) in self.polygons.iter().enumerate() {
            if polygon.len() < 3 {
                return Err(EmblemError::validation(format!(
                    "polygon {idx} must have at least 3 points, got {}",
                    polygon.len()
                )));
            }
        }
        if self.polyline.len() == 1 {
            return Err(EmblemError::validation(
                "polyline must have at least 2 points or be empty",
            ));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(EmblemError::validation("stroke width must be finite and >= 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One requested output resolution and its destination filename.
pub struct OutputSpec {
    /// Filename the caller will write the encoded bytes under.
    pub filename: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

#[derive(Clone, Debug)]
/// An encoded PNG ready for the caller to persist.
pub struct EncodedIcon {
    /// Filename from the originating [`OutputSpec`].
    pub filename: String,
    /// Encoded width in pixels.
    pub width: u32,
    /// Encoded height in pixels.
    pub height: u32,
    /// Complete PNG byte stream.
    pub bytes: Vec<u8>,
}
