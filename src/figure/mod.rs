/// Figure data, palettes, figure map and the provider traits the compositor reads them through.
pub mod data;
/// Compass directions and mirroring.
pub mod direction;
/// `Figure`, `FigureItem` and `Avatar` selectors.
pub mod model;
/// Part type and avatar state catalogues.
pub mod part;
