// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Rasterizer collaborator: opens font resources and turns one UTF-16 code unit into an
//! RGBA pixel buffer.
//!
//! - **Rasterizer**: factory, `open_font(path, size)`. Size bounds are checked by
//!   [`crate::Font`] before any rasterizer call.
//! - **FontFace**: an opened font. Closing it is dropping it.
//!
//! [`fontdue`] holds the default implementation.

use crate::error::FontResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod fontdue;

/// RGBA8 bitmap, row-major, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Fully transparent buffer
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, vec![0u8; width as usize * height as usize * 4])
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Font hinting modes, same set SDL_ttf exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontHinting {
    #[default]
    Normal,
    Light,
    Mono,
    None,
}

impl std::str::FromStr for FontHinting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(FontHinting::Normal),
            "light" => Ok(FontHinting::Light),
            "mono" => Ok(FontHinting::Mono),
            "none" => Ok(FontHinting::None),
            other => Err(format!("unknown hinting mode: {}", other)),
        }
    }
}

/// An opened font resource
pub trait FontFace {
    /// Whether the font has a glyph for this code unit
    fn is_glyph_supported(&self, code: u16) -> bool;

    /// Render one glyph. Only called for supported code units; a failure here is
    /// reported to the caller and the glyph is not cached.
    fn rasterize_glyph(&mut self, code: u16) -> FontResult<PixelBuffer>;

    /// Recommended distance between baselines, in pixels
    fn line_skip(&self) -> i32;

    /// Change hinting; bitmaps rendered before the change are stale
    fn set_hinting(&mut self, hinting: FontHinting);

    fn hinting(&self) -> FontHinting;
}

/// Opens font resources
pub trait Rasterizer {
    type Face: FontFace;

    /// Open `path` at `point_size`. Missing or corrupt files give `ResourceLoad`.
    fn open_font(&self, path: &Path, point_size: u32) -> FontResult<Self::Face>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hinting_from_str() {
        assert_eq!("Mono".parse::<FontHinting>(), Ok(FontHinting::Mono));
        assert_eq!("none".parse::<FontHinting>(), Ok(FontHinting::None));
        assert!("bold".parse::<FontHinting>().is_err());
    }

    #[test]
    fn test_transparent_buffer() {
        let p = PixelBuffer::transparent(3, 2);
        assert_eq!(p.data.len(), 24);
        assert!(p.data.iter().all(|&b| b == 0));
        assert!(!p.is_empty());
        assert!(PixelBuffer::transparent(0, 5).is_empty());
    }
}
