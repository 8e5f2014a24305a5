// Where the mascot sprite comes from: bundled into the binary, or a file on disk.

use crate::error::Error;
use image::RgbaImage;
use rust_embed::RustEmbed;
use std::fmt;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Bundle;

/// Name of the bundled sprite.
pub const DEFAULT_SPRITE: &str = "mascot.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded(&'static str),
    File(PathBuf),
}

impl AssetSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => AssetSource::File(p),
            None => AssetSource::Embedded(DEFAULT_SPRITE),
        }
    }

    pub fn read(&self) -> Result<Vec<u8>, Error> {
        match self {
            AssetSource::Embedded(name) => Bundle::get(name)
                .map(|file| file.data.into_owned())
                .ok_or_else(|| Error::AssetRead(format!("{name} is not bundled"))),
            AssetSource::File(path) => std::fs::read(path)
                .map_err(|e| Error::AssetRead(format!("{}: {e}", path.display()))),
        }
    }

    /// Read and decode into RGBA.
    pub fn load(&self) -> Result<RgbaImage, Error> {
        decode(&self.read()?)
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSource::Embedded(name) => write!(f, "bundled:{name}"),
            AssetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn decode(bytes: &[u8]) -> Result<RgbaImage, Error> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|e| Error::AssetDecode(e.to_string()))
}
