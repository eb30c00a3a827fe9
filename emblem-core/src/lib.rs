//! Emblem rasterizes vector logo artwork into square RGB canvases and
//! emits them as PNG icon sets.
//!
//! # Pipeline overview
//!
//! 1. **Fit**: [`FitTransform`] maps artwork source coordinates into canvas
//!    space (uniform scale, centered, margin-respecting)
//! 2. **Rasterize**: [`fill_polygon`] (antialiased coverage fill) and
//!    [`stroke_polyline`] (hard-edged capsule stroke) draw onto a [`Pixmap`]
//! 3. **Resample**: [`resize_bilinear`] derives each additional output size
//!    from the finished base canvas
//! 4. **Encode**: [`encode_png`] serializes a pixmap into a baseline PNG
//!    byte stream (IHDR/IDAT/IEND, zlib deflate, filter "none")
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce byte-identical PNGs.
//! - **No IO**: the library only transforms in-memory buffers; writing
//!   files and patching manifests belongs to the caller (see the `emblem`
//!   binary crate).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod artwork;
mod encode;
mod foundation;
mod geometry;
mod raster;
mod render;

pub use artwork::model::{Artwork, EncodedIcon, OutputSpec};
pub use encode::png::encode_png;
pub use foundation::core::{Pixmap, Point, Rgb8};
pub use foundation::error::{EmblemError, EmblemResult};
pub use geometry::fit::FitTransform;
pub use raster::fill::fill_polygon;
pub use raster::resize::resize_bilinear;
pub use raster::stroke::stroke_polyline;
pub use render::pipeline::{render_base, render_icon_set};
