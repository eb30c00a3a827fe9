use crate::foundation::{
    core::{Pixmap, Rgb8},
    error::{EmblemError, EmblemResult},
};

/// Resample `src` to `width` x `height` with bilinear interpolation.
///
/// Destination pixel centers map to source coordinates with half-pixel
/// alignment; the four surrounding source pixels are interpolated per
/// channel and rounded to the nearest integer. Works for downscale,
/// identity, and upscale targets (border indices clamp to the source
/// edge). Zero-dimension targets are rejected rather than fabricating an
/// empty image.
pub fn resize_bilinear(src: &Pixmap, width: u32, height: u32) -> EmblemResult<Pixmap> {
    if width == 0 || height == 0 {
        return Err(EmblemError::validation(
            "resize target dimensions must be > 0",
        ));
    }
    if src.width == 0 || src.height == 0 {
        return Err(EmblemError::validation("resize source must be non-empty"));
    }

    let scale_x = f64::from(src.width) / f64::from(width);
    let scale_y = f64::from(src.height) / f64::from(height);
    let mut out = Pixmap::filled(width, height, Rgb8::WHITE);

    for y in 0..height {
        let src_y = (f64::from(y) + 0.5) * scale_y - 0.5;
        let y0f = src_y.floor();
        let wy = src_y - y0f;
        let y0 = (y0f as i64).clamp(0, i64::from(src.height) - 1) as u32;
        let y1 = (y0f as i64 + 1).clamp(0, i64::from(src.height) - 1) as u32;

        for x in 0..width {
            let src_x = (f64::from(x) + 0.5) * scale_x - 0.5;
            let x0f = src_x.floor();
            let wx = src_x - x0f;
            let x0 = (x0f as i64).clamp(0, i64::from(src.width) - 1) as u32;
            let x1 = (x0f as i64 + 1).clamp(0, i64::from(src.width) - 1) as u32;

            let c00 = src.get(x0, y0);
            let c10 = src.get(x1, y0);
            let c01 = src.get(x0, y1);
            let c11 = src.get(x1, y1);

            let lerp2 = |c00: u8, c10: u8, c01: u8, c11: u8| {
                let v = (1.0 - wx) * (1.0 - wy) * f64::from(c00)
                    + wx * (1.0 - wy) * f64::from(c10)
                    + (1.0 - wx) * wy * f64::from(c01)
                    + wx * wy * f64::from(c11);
                v.round() as u8
            };

            out.put(
                x,
                y,
                Rgb8 {
                    r: lerp2(c00.r, c10.r, c01.r, c11.r),
                    g: lerp2(c00.g, c10.g, c01.g, c11.g),
                    b: lerp2(c00.b, c10.b, c01.b, c11.b),
                },
            );
        }
    }
    Ok(out)
}
