// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Deterministic rasterizer used by unit tests. Every supported code unit renders as a
//! solid box whose size depends only on the code unit.

use crate::{
    error::{FontError, FontResult},
    render::rasterizer::{FontFace, FontHinting, PixelBuffer, Rasterizer},
};
use std::{collections::HashSet, path::Path};

pub const LINE_SKIP: i32 = 18;

/// Box size of a code unit: `'A'` is 4 wide, `'B'` 5, `'H'` 3, `'i'` 4
pub fn box_size(code: u16) -> (u32, u32) {
    (3 + u32::from(code) % 8, 16)
}

#[derive(Debug, Default)]
pub struct BoxFace {
    pub unsupported: HashSet<u16>,
    pub failing: HashSet<u16>,
    pub rasterized: Vec<u16>,
    pub hinting: FontHinting,
}

impl BoxFace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without(codes: &str) -> Self {
        Self {
            unsupported: codes.encode_utf16().collect(),
            ..Self::default()
        }
    }
}

impl FontFace for BoxFace {
    fn is_glyph_supported(&self, code: u16) -> bool {
        !self.unsupported.contains(&code)
    }

    fn rasterize_glyph(&mut self, code: u16) -> FontResult<PixelBuffer> {
        if self.failing.contains(&code) {
            return Err(FontError::Rasterize(format!("box face refuses {}", code)));
        }
        self.rasterized.push(code);
        let (w, h) = box_size(code);
        let shade = (code & 0xFF) as u8;
        Ok(PixelBuffer::new(w, h, [shade, shade, shade, 255].repeat((w * h) as usize)))
    }

    fn line_skip(&self) -> i32 {
        LINE_SKIP
    }

    fn set_hinting(&mut self, hinting: FontHinting) {
        self.hinting = hinting;
    }

    fn hinting(&self) -> FontHinting {
        self.hinting
    }
}

/// Opens a `BoxFace` for any path except ones containing "missing"
#[derive(Debug, Default)]
pub struct BoxRasterizer {
    pub unsupported: &'static str,
}

impl Rasterizer for BoxRasterizer {
    type Face = BoxFace;

    fn open_font(&self, path: &Path, _point_size: u32) -> FontResult<BoxFace> {
        if path.to_string_lossy().contains("missing") {
            return Err(FontError::ResourceLoad(path.display().to_string()));
        }
        Ok(BoxFace::without(self.unsupported))
    }
}
