//! nx-imager composes and renders sprite-based avatar figures and furniture.
//!
//! The flow is:
//!
//! - Describe what to draw with an [`Avatar`] or a [`Furni`]
//! - Compose it against loaded asset libraries with [`AvatarImager`] or [`FurniImager`], yielding an
//!   [`Animation`]
//! - Rasterize ticks with [`render_frame`] or in parallel with [`render_frames`]
//! - Encode through the capability traits in [`encode`] ([`PngEncoder`], [`GifEncoder`])
//!
//! Loading figure data, figure maps and asset archives is left to the caller; the crate consumes
//! them through [`FigureDataProvider`], [`FigureMapProvider`] and [`LibraryManager`].
#![forbid(unsafe_code)]

mod foundation;

/// Animation model and timing.
pub mod animation;
/// Assets, asset libraries and furniture metadata.
pub mod assets;
/// Encoders for rendered output.
pub mod encode;
/// Figure strings, part catalogue and figure data.
pub mod figure;
/// Avatar and furniture compositors.
pub mod imager;
/// CPU rasterization.
pub mod render;

pub use crate::foundation::core::{Point, Rect, Rgba8};
pub use crate::foundation::error::{ErrorKind, ImagerError, ImagerResult};
pub use crate::foundation::math::{gcd, lcm};

pub use crate::animation::model::{
    Animation, AnimationLayer, Blend, Frame, SHADOW_ALPHA, SHADOW_LAYER_ID, Sprite,
};
pub use crate::animation::timing::{ExportFrames, MIN_EXPORT_FRAMES, export_frame_count};
pub use crate::assets::asset::{Asset, PreparedImage};
pub use crate::assets::decode::{decode_image, prepare_rgba8};
pub use crate::assets::furni::{FurniIndex, FurniMetadata, Visualization, VisualizationKind};
pub use crate::assets::library::{AssetLibrary, LibraryManager, LibraryStore, MemoryLibrary};
pub use crate::encode::gif::{GifEncoder, GifEncoderOpts, QuantizedGif};
pub use crate::encode::png::PngEncoder;
pub use crate::encode::{AnimatedImageEncoder, AnimationEncoder, FrameEncoder, ImageEncoder};
pub use crate::figure::data::{FigureData, FigureDataProvider, FigureMap, FigureMapProvider};
pub use crate::figure::model::{Avatar, Figure, FigureItem, Gender};
pub use crate::figure::part::{AvatarState, FigurePartType};
pub use crate::imager::avatar::{AvatarImager, AvatarPart, LibrarySource};
pub use crate::imager::furni::{Furni, FurniImager};
pub use crate::render::canvas::FrameRGBA;
pub use crate::render::frame::{draw_frame, render_frame, render_frame_bounds};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, render_frames, render_frames_bounds, render_frames_with_stats,
};
