//! Sprite loading: decode an image file into tightly packed RGBA8 pixels.
//!
//! The renderer consumes `SpriteImage` values, never file paths. Decoding
//! happens once at startup; nothing here touches the GPU.

use std::path::{Path, PathBuf};

/// Path of the player sprite, relative to the working directory.
pub const DEFAULT_SPRITE_PATH: &str = "models/Sprite-0002.png";

/// Errors from sprite loading.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Row order applied while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    #[default]
    None,
    Vertical,
}

/// A decoded RGBA8 image. Rows are stored top to bottom unless flipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SpriteImage {
    /// Decode `path`, converting any channel layout to RGBA8.
    pub fn load(path: impl AsRef<Path>, flip: Flip) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = match flip {
            Flip::None => decoded,
            Flip::Vertical => decoded.flipv(),
        };
        let rgba = decoded.into_rgba8();

        tracing::debug!(
            path = %path.display(),
            width = rgba.width(),
            height = rgba.height(),
            "sprite decoded"
        );

        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }

    /// 1x1 opaque magenta, used when a sprite is missing.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![255, 0, 255, 255],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 rows.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
