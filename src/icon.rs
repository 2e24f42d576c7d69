//! Opaque icon handles.

use bytes::Bytes;

use std::path::PathBuf;

/// A handle to the image displayed next to an action title.
///
/// The model treats the handle as opaque; decoding and rasterization belong to
/// the host renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Handle {
    /// An image file on disk.
    Path(PathBuf),
    /// Encoded image data already in memory.
    Bytes(Bytes),
}

impl Handle {
    /// Creates an icon [`Handle`] pointing to the image of the given path.
    pub fn from_path(path: impl Into<PathBuf>) -> Handle {
        Handle::Path(path.into())
    }

    /// Creates an icon [`Handle`] containing the encoded image data directly.
    ///
    /// This is useful if you already have the image in memory, like an
    /// embedded asset.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Handle {
        Handle::Bytes(bytes.into())
    }
}

impl From<PathBuf> for Handle {
    fn from(path: PathBuf) -> Handle {
        Handle::from_path(path)
    }
}

impl From<&str> for Handle {
    fn from(path: &str) -> Handle {
        Handle::from_path(path)
    }
}
