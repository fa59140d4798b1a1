/// Integer geometry and straight-alpha colors.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
/// Small integer helpers shared by timing and pixel code.
pub mod math;
