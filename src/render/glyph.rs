// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Glyph Cache Module
//!
//! Maps UTF-16 code units to their placement in the atlas. The cache is the only
//! component that rasterizes glyphs or writes into atlas pages.
//!
//! ```text
//! get_or_place(code)
//!   ├─ cached?               -> record, no side effects
//!   ├─ face can't render it  -> cache UNSUPPORTED, never asked again
//!   └─ rasterize
//!        ├─ no pages yet     -> create page 0
//!        ├─ planner::place   -> Fit { page, rect } | NeedsNewPage (append page, origin)
//!        ├─ upload           -> staging texture, redirect target to page, blit, restore
//!        └─ cache { page, rect }
//! ```
//!
//! Entries are write-once. The only way to drop one is [`GlyphCache::clear`], which
//! destroys all pages together with the map.

use crate::{
    error::FontResult,
    render::{
        adapter::{Adapter, BlendMode, BlitCommand, RenderTarget, RenderTargetGuard, TextureId},
        atlas::{AtlasPage, AtlasPageStore, PAGE_SIZE},
        color::Color,
        planner::{self, Placement},
        rasterizer::{FontFace, PixelBuffer},
    },
    util::Rect,
};
use log::{debug, info};
use std::collections::HashMap;

/// Where a glyph's pixels live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphRecord {
    /// Atlas page index, None for glyphs the font cannot render
    pub page: Option<usize>,
    /// Rect on the page (zero for unsupported glyphs)
    pub rect: Rect,
}

impl GlyphRecord {
    /// Sentinel for code units the font has no glyph for
    pub const UNSUPPORTED: GlyphRecord = GlyphRecord {
        page: None,
        rect: Rect::new(0, 0, 0, 0),
    };

    pub fn is_supported(&self) -> bool {
        self.page.is_some()
    }
}

#[derive(Debug, Default)]
pub struct GlyphCache {
    entries: HashMap<u16, GlyphRecord>,
    pages: AtlasPageStore,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// Cache packing into pages of `page_size × page_size`
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            entries: HashMap::new(),
            pages: AtlasPageStore::new(page_size),
        }
    }

    /// Cached record for `code`, without placing it
    pub fn get(&self, code: u16) -> Option<GlyphRecord> {
        self.entries.get(&code).copied()
    }

    /// Number of cached code units, unsupported ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pages(&self) -> &AtlasPageStore {
        &self.pages
    }

    /// Return the record for `code`, rasterizing and packing it on first use.
    ///
    /// # Parameters
    /// - `face`: font the glyph is rendered with
    /// - `adapter`: renderer owning the page textures; its render target is the same
    ///   before and after the call, on every path
    /// - `code`: UTF-16 code unit
    ///
    /// A rasterization failure is returned and nothing is cached, so the glyph is
    /// tried again on its next use.
    pub fn get_or_place<F, A>(
        &mut self,
        face: &mut F,
        adapter: &mut A,
        code: u16,
    ) -> FontResult<GlyphRecord>
    where
        F: FontFace + ?Sized,
        A: Adapter + ?Sized,
    {
        if let Some(record) = self.entries.get(&code) {
            return Ok(*record);
        }
        if !face.is_glyph_supported(code) {
            debug!("glyph cache: U+{:04X} unsupported", code);
            self.entries.insert(code, GlyphRecord::UNSUPPORTED);
            return Ok(GlyphRecord::UNSUPPORTED);
        }

        let pixels = face.rasterize_glyph(code)?;
        let record = self.place(adapter, &pixels)?;
        debug!(
            "glyph cache: U+{:04X} -> page {:?} {:?}",
            code, record.page, record.rect
        );
        self.entries.insert(code, record);
        Ok(record)
    }

    fn place<A: Adapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        pixels: &PixelBuffer,
    ) -> FontResult<GlyphRecord> {
        if self.pages.is_empty() {
            self.pages.add_page(adapter)?;
        }
        let (w, h) = (pixels.width, pixels.height);
        let placement = planner::place(
            self.pages.pages().iter().map(AtlasPage::rects),
            w,
            h,
            self.pages.page_size(),
        );
        let (page, rect) = match placement {
            Placement::Fit { page, rect } => (page, rect),
            Placement::NeedsNewPage => (self.pages.add_page(adapter)?, Rect::new(0, 0, w, h)),
        };

        let texture = self.pages.pages()[page].texture();
        upload(adapter, texture, rect, pixels)?;
        self.pages.occupy(page, rect);
        Ok(GlyphRecord {
            page: Some(page),
            rect,
        })
    }

    /// Destroy every page texture and forget every entry
    pub fn clear<A: Adapter + ?Sized>(&mut self, adapter: &mut A) {
        let (glyphs, pages) = (self.entries.len(), self.pages.len());
        self.pages.clear(adapter);
        self.entries.clear();
        info!("glyph cache: cleared {} glyphs, {} pages", glyphs, pages);
    }
}

/// Copy `pixels` onto the page texture at `rect`, replacing what is there.
/// The staging texture is released and the render target restored before any
/// blit error is returned.
fn upload<A: Adapter + ?Sized>(
    adapter: &mut A,
    page: TextureId,
    rect: Rect,
    pixels: &PixelBuffer,
) -> FontResult<()> {
    if pixels.is_empty() {
        return Ok(());
    }
    let staging = adapter.create_texture(pixels)?;
    let result = {
        let mut target = RenderTargetGuard::redirect(adapter, RenderTarget::Texture(page));
        let mut cmd = BlitCommand::new(
            staging,
            Rect::new(0, 0, pixels.width, pixels.height),
            rect.into(),
            Color::WHITE,
        );
        cmd.blend = BlendMode::None;
        target.blit(&cmd)
    };
    adapter.destroy_texture(staging);
    result
}
