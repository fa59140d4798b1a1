/// Assets and prepared (premultiplied) images.
pub mod asset;
/// Encoded image decoding into premultiplied RGBA8.
pub mod decode;
/// Furniture index and visualization metadata.
pub mod furni;
/// Library and library-manager traits plus in-memory implementations.
pub mod library;
