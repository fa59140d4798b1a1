/// Sprites, frames, layers and animations.
pub mod model;
/// Sequence selection and cycle arithmetic.
pub mod timing;
