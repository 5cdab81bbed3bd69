// RustPixel
// copyright zipxing@hotmail.com 2022～2025

#![allow(dead_code)]

use flora_font::{FontError, FontFace, FontHinting, FontResult, PixelBuffer, Rasterizer};
use std::{collections::HashSet, path::Path};

pub const LINE_SKIP: i32 = 20;

/// Glyph box size: width grows with the code unit, height is fixed
pub fn glyph_size(code: u16) -> (u32, u32) {
    (2 + u32::from(code) % 11, 14)
}

/// Fill color written for a code unit, so page contents can be checked per glyph
pub fn glyph_pixel(code: u16) -> [u8; 4] {
    [(code & 0xFF) as u8, (code >> 8) as u8, 0x5A, 0xFF]
}

#[derive(Debug, Default)]
pub struct StubFace {
    unsupported: HashSet<u16>,
    hinting: FontHinting,
    pub rasterized: usize,
}

impl FontFace for StubFace {
    fn is_glyph_supported(&self, code: u16) -> bool {
        !self.unsupported.contains(&code)
    }

    fn rasterize_glyph(&mut self, code: u16) -> FontResult<PixelBuffer> {
        self.rasterized += 1;
        let (w, h) = glyph_size(code);
        Ok(PixelBuffer::new(w, h, glyph_pixel(code).repeat((w * h) as usize)))
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

/// Opens a `StubFace` for any path ending in `.ttf`
#[derive(Debug, Default)]
pub struct StubRasterizer {
    pub unsupported: &'static str,
}

impl StubRasterizer {
    pub fn face(&self) -> StubFace {
        StubFace {
            unsupported: self.unsupported.encode_utf16().collect(),
            ..StubFace::default()
        }
    }
}

impl Rasterizer for StubRasterizer {
    type Face = StubFace;

    fn open_font(&self, path: &Path, _point_size: u32) -> FontResult<StubFace> {
        if path.extension().is_some_and(|e| e == "ttf") {
            Ok(self.face())
        } else {
            Err(FontError::ResourceLoad(format!(
                "{}: not a font",
                path.display()
            )))
        }
    }
}
