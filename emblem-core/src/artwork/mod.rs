//! Vector artwork as pure data.
//!
//! Geometry is input data, not logic: the library rasterizes whatever
//! contours and polyline the caller supplies.

/// Artwork model and output specs.
pub mod model;
