// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Atlas pages: fixed-size square render-target textures that glyph bitmaps are packed
//! into. The store is append-only; a page never shrinks or repacks, it only gains
//! non-overlapping rects until the whole store is cleared.

use crate::{
    error::FontResult,
    render::adapter::{Adapter, TextureId},
    util::Rect,
};
use log::info;

/// Atlas page size in pixels (width = height)
pub const PAGE_SIZE: u32 = 1024;

/// One texture page and the rects placed on it so far, in insertion order
#[derive(Debug, Clone)]
pub struct AtlasPage {
    texture: TextureId,
    rects: Vec<Rect>,
}

impl AtlasPage {
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Rects placed on this page, oldest first
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

#[derive(Debug, Clone)]
pub struct AtlasPageStore {
    pages: Vec<AtlasPage>,
    page_size: u32,
}

impl Default for AtlasPageStore {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl AtlasPageStore {
    pub fn new(page_size: u32) -> Self {
        Self {
            pages: vec![],
            page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn pages(&self) -> &[AtlasPage] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&AtlasPage> {
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Create a new empty page texture and append it, returning its index
    pub fn add_page<A: Adapter + ?Sized>(&mut self, adapter: &mut A) -> FontResult<usize> {
        let texture = adapter.create_render_target_texture(self.page_size, self.page_size)?;
        self.pages.push(AtlasPage {
            texture,
            rects: vec![],
        });
        let index = self.pages.len() - 1;
        info!(
            "atlas: new page {} ({}x{}, {:?})",
            index, self.page_size, self.page_size, texture
        );
        Ok(index)
    }

    /// Record a rect as occupied on `page`. The caller has already checked placement.
    pub(crate) fn occupy(&mut self, page: usize, rect: Rect) {
        self.pages[page].rects.push(rect);
    }

    /// Destroy every page texture and forget all pages
    pub fn clear<A: Adapter + ?Sized>(&mut self, adapter: &mut A) {
        for page in self.pages.drain(..) {
            adapter.destroy_texture(page.texture);
        }
    }
}
