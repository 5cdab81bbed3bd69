// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! flora_font is the font layer of the Flora 2D framework: it rasterizes each requested
//! glyph once, packs the bitmap into a growable set of fixed-size atlas pages, caches the
//! placement and replays it to lay out multi-line strings with scaling and tinting.
//!
//! The window, audio and primitive drawing parts of the framework are not here. The crate
//! talks to them through two narrow traits:
//!
//! - [`render::rasterizer::Rasterizer`] / [`render::rasterizer::FontFace`] turn a
//!   (font, code unit) pair into an RGBA pixel buffer. [`render::rasterizer::fontdue`]
//!   is the default implementation.
//! - [`render::adapter::Adapter`] owns textures, render targets and blits.
//!   [`render::adapter::memory::MemoryAdapter`] is a headless implementation.
//!
//! ```text
//! Font::draw / Font::measure
//!        │
//!        ▼
//!   TextLayout ──► GlyphCache::get_or_place(code unit)
//!                        │ hit: GlyphRecord
//!                        │ miss: FontFace::rasterize_glyph
//!                        ▼
//!                  planner::place ──► AtlasPageStore ──► Adapter (blit into page)
//!        │
//!        ▼
//!   one BlitCommand per visible glyph ──► Adapter::blit (active frame)
//! ```
//!
//! # Threading
//!
//! Everything runs on the thread that owns the adapter. Placing a glyph redirects the
//! adapter's render target to an atlas page and restores it afterwards, so placement must
//! never interleave with other draw calls on the same adapter. No locks are taken.

/// Smallest point size a font can be opened at
pub const MIN_FONT_SIZE: u32 = 2;

/// Largest point size a font can be opened at
pub const MAX_FONT_SIZE: u32 = 255;

pub mod config;
pub mod error;
#[cfg(feature = "log4rs")]
pub mod log;
pub mod render;
pub mod util;

pub use config::FontConfig;
pub use error::{FontError, FontResult};
pub use render::{
    adapter::{memory::MemoryAdapter, Adapter, BlitCommand, FlipMode, RenderTarget, TextureId},
    atlas::PAGE_SIZE,
    color::Color,
    font::Font,
    glyph::GlyphRecord,
    rasterizer::{fontdue::FontdueRasterizer, FontFace, FontHinting, PixelBuffer, Rasterizer},
};
pub use util::{FRect, Rect};

#[cfg(test)]
pub(crate) mod testing;
