use rayon::prelude::*;

use crate::{
    artwork::model::{Artwork, EncodedIcon, OutputSpec},
    encode::png::encode_png,
    foundation::{
        core::Pixmap,
        error::{EmblemError, EmblemResult},
    },
    geometry::fit::FitTransform,
    raster::{fill::fill_polygon, resize::resize_bilinear, stroke::stroke_polyline},
};

#[tracing::instrument(skip(artwork))]
/// Rasterize `artwork` onto a fresh square canvas.
///
/// The artwork is fitted into `canvas_size - 2 * margin` and centered. All
/// contours are filled first, then the polyline is stroked on top; the
/// returned pixmap is final and safe to read (resize, encode) immediately.
pub fn render_base(artwork: &Artwork, canvas_size: u32, margin: u32) -> EmblemResult<Pixmap> {
    artwork.validate()?;
    if canvas_size == 0 {
        return Err(EmblemError::validation("canvas size must be > 0"));
    }
    if 2 * u64::from(margin) >= u64::from(canvas_size) {
        return Err(EmblemError::validation(format!(
            "margin {margin} leaves no drawable area on a {canvas_size} px canvas"
        )));
    }

    let transform = FitTransform::fit(
        artwork.viewbox_width,
        artwork.viewbox_height,
        canvas_size,
        margin,
    );
    let mut pixmap = Pixmap::filled(canvas_size, canvas_size, artwork.background);
    for polygon in &artwork.polygons {
        fill_polygon(&mut pixmap, polygon, artwork.fill, &transform);
    }
    if !artwork.polyline.is_empty() {
        stroke_polyline(
            &mut pixmap,
            &artwork.polyline,
            artwork.fill,
            artwork.stroke_width,
            &transform,
        );
    }
    Ok(pixmap)
}

#[tracing::instrument(skip(artwork, outputs))]
/// Render the base canvas once, then resize and encode every output spec.
///
/// Results preserve the order of `outputs`. Encodes fan out across a rayon
/// pool; the base pixmap is immutable by then, so ordering across sizes
/// cannot affect the bytes produced.
pub fn render_icon_set(
    artwork: &Artwork,
    canvas_size: u32,
    margin: u32,
    outputs: &[OutputSpec],
) -> EmblemResult<Vec<EncodedIcon>> {
    let base = render_base(artwork, canvas_size, margin)?;

    outputs
        .par_iter()
        .map(|spec| -> EmblemResult<EncodedIcon> {
            let bytes = if spec.width == base.width && spec.height == base.height {
                encode_png(&base)?
            } else {
                let resized = resize_bilinear(&base, spec.width, spec.height)?;
                encode_png(&resized)?
            };
            tracing::debug!(filename = %spec.filename, width = spec.width, "encoded icon");
            Ok(EncodedIcon {
                filename: spec.filename.clone(),
                width: spec.width,
                height: spec.height,
                bytes,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
