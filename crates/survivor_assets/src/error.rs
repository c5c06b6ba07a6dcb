use std::path::PathBuf;

use thiserror::Error;

/// Failure to load one of the startup images.  Loading stops at the first
/// error; nothing is retried.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("animation `{name}` has no frames")]
    EmptySequence { name: String },
}

impl AssetError {
    /// File the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            AssetError::Missing { path }
            | AssetError::Io { path, .. }
            | AssetError::Decode { path, .. } => Some(path),
            AssetError::EmptySequence { .. } => None,
        }
    }
}
