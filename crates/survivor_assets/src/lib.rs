//! Startup asset loading for the Survivor demo.
//!
//! Images are decoded once into an [`ImageStore`]; gameplay only sees the
//! [`TextureId`](survivor_core::TextureId) and pixel size of each frame.

pub mod error;
pub mod loader;
pub mod manifest;
pub mod store;

pub use error::AssetError;
pub use loader::{load_assets, load_image, LoadedAssets};
pub use manifest::{AssetManifest, SequenceLayout};
pub use store::{ImageStore, StoredImage};
