//! Orchestration from artwork to encoded icon sets.

/// Base-canvas rendering and per-size encode fan-out.
pub mod pipeline;
