/// Figure compositor: part expansion, asset resolution, ordering and mirroring.
pub mod avatar;
/// Furniture compositor for static and animated visualizations.
pub mod furni;
