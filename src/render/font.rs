// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Font
//!
//! One opened font resource with its own glyph cache, atlas pages and layout state.
//!
//! ```text
//!   Font::open ──► Open ──(set_hinting / clear_cache)──► Open, empty cache
//!                   │
//!                   └──(close)──► Disposed: page textures destroyed, face dropped
//! ```
//!
//! Page textures belong to the adapter, so they can only be destroyed with it at hand.
//! Call [`Font::close`] before the adapter goes away; a `Font` that is simply dropped
//! logs a warning for the textures it leaves behind.
//!
//! # Example
//! ```no_run
//! use flora_font::{Adapter, Color, Font, MemoryAdapter};
//!
//! let mut adapter = MemoryAdapter::new();
//! let mut font = Font::open("assets/fonts/default.ttf", 16)?;
//! font.set_color(255, 255, 0, 255);
//!
//! adapter.begin_frame(Color::BLACK)?;
//! font.draw(&mut adapter, "Hello\nWorld", 10, 20)?;
//! adapter.end_frame()?;
//!
//! font.close(&mut adapter);
//! # Ok::<(), flora_font::FontError>(())
//! ```

use crate::{
    config::FontConfig,
    error::{FontError, FontResult},
    render::{
        adapter::{Adapter, BlitCommand},
        atlas::AtlasPage,
        color::Color,
        glyph::{GlyphCache, GlyphRecord},
        rasterizer::{
            fontdue::{FontdueFace, FontdueRasterizer},
            FontFace, FontHinting, Rasterizer,
        },
        text::TextLayout,
    },
    MAX_FONT_SIZE, MIN_FONT_SIZE,
};
use log::{info, warn};
use std::path::Path;

/// Reject point sizes outside `[MIN_FONT_SIZE, MAX_FONT_SIZE]`
pub fn check_font_size(size: u32) -> FontResult<()> {
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
        return Err(FontError::InvalidArgument(format!(
            "font size {} outside [{}, {}]",
            size, MIN_FONT_SIZE, MAX_FONT_SIZE
        )));
    }
    Ok(())
}

pub struct Font<F: FontFace = FontdueFace> {
    face: F,
    size: u32,
    cache: GlyphCache,
    layout: TextLayout,
}

impl Font<FontdueFace> {
    /// Open a TTF/OTF file with the fontdue rasterizer
    pub fn open<P: AsRef<Path>>(path: P, size: u32) -> FontResult<Self> {
        Self::open_with(&FontdueRasterizer, path, size)
    }
}

impl<F: FontFace> Font<F> {
    /// Open `path` at `size` points through `rasterizer`.
    ///
    /// The size is checked before the rasterizer is called, so an out-of-range size
    /// never touches the file system.
    pub fn open_with<R, P>(rasterizer: &R, path: P, size: u32) -> FontResult<Self>
    where
        R: Rasterizer<Face = F>,
        P: AsRef<Path>,
    {
        check_font_size(size)?;
        let face = rasterizer.open_font(path.as_ref(), size)?;
        let line_skip = face.line_skip();
        info!(
            "font: opened {} at {}pt, line skip {}",
            path.as_ref().display(),
            size,
            line_skip
        );
        Ok(Self {
            face,
            size,
            cache: GlyphCache::new(),
            layout: TextLayout::new(line_skip),
        })
    }

    /// Open the font a config names and apply its scale, color and hinting
    pub fn from_config<R>(rasterizer: &R, config: &FontConfig) -> FontResult<Self>
    where
        R: Rasterizer<Face = F>,
    {
        config.validate()?;
        let mut font = Self::open_with(rasterizer, &config.font_path, config.size)?;
        // cache is still empty, nothing to invalidate
        font.face.set_hinting(config.hinting);
        font.layout.set_scale(config.scale);
        font.layout.set_color(config.color);
        Ok(font)
    }

    /// Draw `text` with its top-left corner at (x, y). Needs an active frame.
    pub fn draw<A: Adapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        text: &str,
        x: i32,
        y: i32,
    ) -> FontResult<()> {
        self.layout.draw(
            &mut self.cache,
            &mut self.face,
            adapter,
            text,
            x as f32,
            y as f32,
        )
    }

    /// Width and height `text` would take when drawn
    pub fn measure<A: Adapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        text: &str,
    ) -> FontResult<(f32, f32)> {
        self.layout
            .measure(&mut self.cache, &mut self.face, adapter, text)
    }

    /// Blit commands `draw` would issue, without issuing them
    pub fn layout<A: Adapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        text: &str,
        x: i32,
        y: i32,
    ) -> FontResult<Vec<BlitCommand>> {
        self.layout.layout(
            &mut self.cache,
            &mut self.face,
            adapter,
            text,
            x as f32,
            y as f32,
        )
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.layout.set_scale(scale);
    }

    pub fn scale(&self) -> f32 {
        self.layout.scale()
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.layout.set_color(Color::new(r, g, b, a));
    }

    pub fn color(&self) -> Color {
        self.layout.color()
    }

    /// Change hinting. Every cached bitmap is stale afterwards, so the whole cache and
    /// all pages are dropped and rebuilt on demand.
    pub fn set_hinting<A: Adapter + ?Sized>(&mut self, adapter: &mut A, hinting: FontHinting) {
        info!("font: hinting {:?} -> {:?}", self.face.hinting(), hinting);
        self.face.set_hinting(hinting);
        self.clear_cache(adapter);
    }

    pub fn hinting(&self) -> FontHinting {
        self.face.hinting()
    }

    /// Distance between baselines, scaled
    pub fn line_height(&self) -> f32 {
        self.layout.line_height()
    }

    /// Point size the font was opened at
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Destroy all atlas pages and forget every cached glyph
    pub fn clear_cache<A: Adapter + ?Sized>(&mut self, adapter: &mut A) {
        self.cache.clear(adapter);
    }

    /// Cached record for one code unit, placing it if needed
    pub fn glyph<A: Adapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        code: u16,
    ) -> FontResult<GlyphRecord> {
        self.cache.get_or_place(&mut self.face, adapter, code)
    }

    /// Place every code unit of `text` ahead of first draw
    pub fn preload<A: Adapter + ?Sized>(&mut self, adapter: &mut A, text: &str) -> FontResult<()> {
        for code in text.encode_utf16() {
            if code == u16::from(b'\n') || code == u16::from(b'\r') {
                continue;
            }
            self.cache.get_or_place(&mut self.face, adapter, code)?;
        }
        Ok(())
    }

    /// Preload printable ASCII (0x20..=0x7E)
    pub fn preload_ascii<A: Adapter + ?Sized>(&mut self, adapter: &mut A) -> FontResult<()> {
        let ascii: String = (0x20u8..=0x7E).map(char::from).collect();
        self.preload(adapter, &ascii)
    }

    /// Number of atlas pages in use
    pub fn page_count(&self) -> usize {
        self.cache.pages().len()
    }

    /// Number of cached code units, unsupported ones included
    pub fn glyph_count(&self) -> usize {
        self.cache.len()
    }

    pub fn pages(&self) -> &[AtlasPage] {
        self.cache.pages().pages()
    }

    /// Release page textures and the font resource
    pub fn close<A: Adapter + ?Sized>(mut self, adapter: &mut A) {
        self.cache.clear(adapter);
        info!("font: closed {}pt face", self.size);
    }
}

impl<F: FontFace> Drop for Font<F> {
    fn drop(&mut self) {
        if !self.cache.pages().is_empty() {
            warn!(
                "font: dropped without close(), {} page textures left in the adapter",
                self.cache.pages().len()
            );
        }
    }
}
