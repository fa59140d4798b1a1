//! CPU rasterization of composed animations.

/// Premultiplied RGBA8 pixel blending.
pub mod blend;
/// Output canvas with a logical origin.
pub mod canvas;
/// Layer ordering and per-tick frame drawing.
pub mod frame;
/// Multi-frame rendering on a worker pool, with optional static-frame elision.
pub mod pipeline;
/// Sprite drawers.
pub mod sprite;
