// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Default rasterizer built on fontdue.
//!
//! Glyphs are rendered the way SDL_ttf renders a single glyph: into a cell as wide as the
//! glyph's advance (or its ink, if wider) and as tall as the font (ascent - descent), with
//! the ink placed at the baseline. A space therefore comes back as a blank cell with a real
//! width, which is what layout uses as advance.

use super::{FontFace, FontHinting, PixelBuffer, Rasterizer};
use crate::error::{FontError, FontResult};
use ::fontdue::{Font, FontSettings};
use log::debug;
use std::path::Path;

/// Coverage at or above this is ink in `FontHinting::Mono`
const MONO_THRESHOLD: u8 = 128;

#[derive(Debug, Clone, Copy, Default)]
pub struct FontdueRasterizer;

impl Rasterizer for FontdueRasterizer {
    type Face = FontdueFace;

    fn open_font(&self, path: &Path, point_size: u32) -> FontResult<FontdueFace> {
        let data = std::fs::read(path)
            .map_err(|e| FontError::ResourceLoad(format!("{}: {}", path.display(), e)))?;
        let face = FontdueFace::from_bytes(&data, point_size)?;
        debug!(
            "fontdue: opened {} at {}pt, line skip {}",
            path.display(),
            point_size,
            face.line_skip
        );
        Ok(face)
    }
}

/// Placement of a rasterized glyph inside its cell
#[derive(Debug, Clone, Copy, PartialEq)]
struct GlyphInk {
    xmin: i32,
    ymin: i32,
    width: usize,
    height: usize,
    advance: f32,
}

impl From<::fontdue::Metrics> for GlyphInk {
    fn from(m: ::fontdue::Metrics) -> Self {
        Self {
            xmin: m.xmin,
            ymin: m.ymin,
            width: m.width,
            height: m.height,
            advance: m.advance_width,
        }
    }
}

pub struct FontdueFace {
    font: Font,
    px: f32,
    ascent: i32,
    descent: i32,
    line_skip: i32,
    hinting: FontHinting,
}

impl FontdueFace {
    /// Load a face from TTF/OTF data at `point_size` (1pt = 1px)
    pub fn from_bytes(font_data: &[u8], point_size: u32) -> FontResult<Self> {
        let px = point_size as f32;
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(font_data, settings)
            .map_err(|e| FontError::ResourceLoad(format!("Failed to load font: {}", e)))?;
        let lm = font.horizontal_line_metrics(px).ok_or_else(|| {
            FontError::ResourceLoad("font has no horizontal line metrics".to_string())
        })?;

        Ok(Self {
            font,
            px,
            ascent: lm.ascent.ceil() as i32,
            descent: lm.descent.floor() as i32,
            line_skip: lm.new_line_size.ceil() as i32,
            hinting: FontHinting::Normal,
        })
    }

    /// Cell height: ascent to descent
    pub fn height(&self) -> u32 {
        (self.ascent - self.descent).max(0) as u32
    }
}

/// Compose fontdue coverage into an RGBA cell, white ink with coverage as alpha.
fn compose_cell(
    ink: GlyphInk,
    coverage: &[u8],
    ascent: i32,
    cell_h: u32,
    hinting: FontHinting,
) -> PixelBuffer {
    let x_off = ink.xmin.max(0);
    let cell_w = (ink.advance.ceil() as i32).max(x_off + ink.width as i32).max(0) as u32;
    let y_off = ascent - (ink.ymin + ink.height as i32);
    let mut cell = PixelBuffer::transparent(cell_w, cell_h);

    for gy in 0..ink.height {
        let py = y_off + gy as i32;
        if py < 0 || py >= cell_h as i32 {
            continue;
        }
        for gx in 0..ink.width {
            let px = x_off + gx as i32;
            if px >= cell_w as i32 {
                continue;
            }
            let mut c = coverage[gy * ink.width + gx];
            if hinting == FontHinting::Mono {
                c = if c >= MONO_THRESHOLD { 255 } else { 0 };
            }
            if c == 0 {
                continue;
            }
            let i = (py as usize * cell_w as usize + px as usize) * 4;
            cell.data[i..i + 4].copy_from_slice(&[255, 255, 255, c]);
        }
    }
    cell
}

impl FontFace for FontdueFace {
    fn is_glyph_supported(&self, code: u16) -> bool {
        char::from_u32(u32::from(code)).is_some_and(|ch| self.font.lookup_glyph_index(ch) != 0)
    }

    fn rasterize_glyph(&mut self, code: u16) -> FontResult<PixelBuffer> {
        let ch = char::from_u32(u32::from(code))
            .ok_or_else(|| FontError::Rasterize(format!("U+{:04X} is not a scalar value", code)))?;
        let (metrics, coverage) = self.font.rasterize(ch, self.px);
        if coverage.len() != metrics.width * metrics.height {
            return Err(FontError::Rasterize(format!(
                "U+{:04X}: bitmap size mismatch",
                code
            )));
        }
        Ok(compose_cell(
            metrics.into(),
            &coverage,
            self.ascent,
            self.height(),
            self.hinting,
        ))
    }

    fn line_skip(&self) -> i32 {
        self.line_skip
    }

    fn set_hinting(&mut self, hinting: FontHinting) {
        self.hinting = hinting;
    }

    fn hinting(&self) -> FontHinting {
        self.hinting
    }
}
