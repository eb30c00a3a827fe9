//! Mapping from artwork source space into canvas pixel space.

/// Uniform fit-and-center transform.
pub mod fit;
