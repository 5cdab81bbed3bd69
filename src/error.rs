// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Error types shared by the font, the atlas and the adapters.
//!
//! An unsupported glyph is not an error: it is cached as [`crate::GlyphRecord::UNSUPPORTED`]
//! and skipped by layout.

use std::fmt;
use std::io;

/// Result type used across flora_font
pub type FontResult<T> = Result<T, FontError>;

/// Font subsystem error types
#[derive(Debug)]
pub enum FontError {
    /// Bad caller input, e.g. a point size outside `[2, 255]`
    InvalidArgument(String),
    /// Font file missing or corrupt
    ResourceLoad(String),
    /// Operation not allowed in the adapter's current state (no active frame...)
    InvalidState(String),
    /// A glyph the face reported as supported could not be rasterized
    Rasterize(String),
    /// Configuration or logger setup failed
    Config(String),
    /// Underlying I/O failure
    Io(io::Error),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            FontError::ResourceLoad(msg) => write!(f, "Failed to load resource: {}", msg),
            FontError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            FontError::Rasterize(msg) => write!(f, "Rasterization failed: {}", msg),
            FontError::Config(msg) => write!(f, "Config error: {}", msg),
            FontError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FontError {
    fn from(e: io::Error) -> Self {
        FontError::Io(e)
    }
}

impl From<toml::de::Error> for FontError {
    fn from(e: toml::de::Error) -> Self {
        FontError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let e = FontError::InvalidArgument("font size 1".to_string());
        assert_eq!(e.to_string(), "Invalid argument: font size 1");
        let e = FontError::InvalidState("no active frame".to_string());
        assert_eq!(e.to_string(), "Invalid state: no active frame");
    }

    #[test]
    fn test_io_source() {
        let e: FontError = io::Error::new(io::ErrorKind::NotFound, "font.ttf").into();
        assert!(matches!(e, FontError::Io(_)));
        assert!(e.source().is_some());
        assert!(FontError::Config("x".into()).source().is_none());
    }
}
