//! Image container emission.
//!
//! Encoding is the only persisted surface; there is no decoding path.

/// Minimal PNG writer (signature, IHDR/IDAT/IEND, zlib deflate).
pub mod png;
