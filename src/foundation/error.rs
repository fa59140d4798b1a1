use crate::figure::part::FigurePartType;

/// Convenience result type used across the imager.
pub type ImagerResult<T> = Result<T, ImagerError>;

/// Coarse classification of an [`ImagerError`].
///
/// Callers use this to decide whether a failure means "this combination does not exist"
/// (recoverable by the caller) or "the data model is broken" (surface it).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream figure/furniture data is inconsistent.
    DataIntegrity,
    /// A single named asset is absent.
    AssetNotFound,
    /// Unsupported direction/size/state or malformed input.
    InputValidation,
    /// A required collaborator was never loaded.
    State,
    /// Output encoding failed.
    Encode,
    /// Wrapped lower-level error.
    Other,
}

/// Top-level error taxonomy used by compositing, rendering and encoding APIs.
#[derive(thiserror::Error, Debug)]
pub enum ImagerError {
    /// A figure item references a part set that the figure data does not define.
    #[error("data integrity error: no part set found for {part_type}-{id}")]
    PartSetNotFound {
        /// Part set type.
        part_type: FigurePartType,
        /// Part set id.
        id: i32,
    },

    /// A colorable part asks for a color index the figure item does not supply.
    #[error(
        "data integrity error: expected at least {required} color(s) for part {part_type}-{id}, got {available}"
    )]
    InsufficientColors {
        /// Part set type.
        part_type: FigurePartType,
        /// Part set id.
        id: i32,
        /// 1-based color index requested by the part.
        required: usize,
        /// Number of colors on the figure item.
        available: usize,
    },

    /// The color id is not part of the palette selected for the part type.
    #[error("data integrity error: color {color_id} not found for part {part_type}-{id}")]
    ColorNotFound {
        /// Part set type.
        part_type: FigurePartType,
        /// Part set id.
        id: i32,
        /// Requested palette color id.
        color_id: i32,
    },

    /// No palette is mapped for the part type.
    #[error("data integrity error: no palette found for part type {0}")]
    PaletteNotFound(FigurePartType),

    /// A palette or visualization color is not a valid hex RGB value.
    #[error("data integrity error: invalid color value {0:?}")]
    InvalidColor(String),

    /// Neither the figure map nor a previous part in the same set names a library.
    #[error("data integrity error: failed to find library for part {part_type}-{id}")]
    PartLibraryNotFound {
        /// Part type.
        part_type: FigurePartType,
        /// Part id.
        id: i32,
    },

    /// A named asset is absent from its library.
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// The furniture visualization does not support the requested direction.
    #[error("validation error: no visualization for direction {direction} [{identifier}]")]
    NoVisualizationForDirection {
        /// Furniture identifier.
        identifier: String,
        /// Requested direction.
        direction: u8,
    },

    /// The furniture visualization does not define the requested animation state.
    #[error("validation error: no animation for state {state} [{identifier}]")]
    NoAnimationForState {
        /// Furniture identifier.
        identifier: String,
        /// Requested state.
        state: i32,
    },

    /// Invalid caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A collaborator required by the call was not loaded.
    #[error("state error: {0}")]
    State(String),

    /// Output encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImagerError {
    /// Build an [`ImagerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ImagerError::State`] value.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build an [`ImagerError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PartSetNotFound { .. }
            | Self::InsufficientColors { .. }
            | Self::ColorNotFound { .. }
            | Self::PaletteNotFound(_)
            | Self::InvalidColor(_)
            | Self::PartLibraryNotFound { .. } => ErrorKind::DataIntegrity,
            Self::AssetNotFound(_) => ErrorKind::AssetNotFound,
            Self::NoVisualizationForDirection { .. }
            | Self::NoAnimationForState { .. }
            | Self::Validation(_) => ErrorKind::InputValidation,
            Self::State(_) => ErrorKind::State,
            Self::Encode(_) => ErrorKind::Encode,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<image::ImageError> for ImagerError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
