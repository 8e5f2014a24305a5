// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Presenting the frame buffer failed
    AssetRead(String),    // Sprite missing from the bundle or unreadable on disk
    AssetDecode(String),  // Sprite bytes are not a decodable image
    Surface(String),      // An off-screen layer could not be allocated
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::AssetRead(s) => write!(f, "Asset read error: {s}"),
            Error::AssetDecode(s) => write!(f, "Asset decode error: {s}"),
            Error::Surface(s) => write!(f, "Surface error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
