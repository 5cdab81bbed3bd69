// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Render module: the glyph atlas, the glyph cache, text layout and the two collaborator
//! traits they are built on (adapter and rasterizer).
//!
//! Font wraps a rasterizer face, one GlyphCache and one TextLayout.
//! GlyphCache owns the AtlasPageStore and is the only thing that rasterizes or writes
//! into atlas pages.
//! TextLayout replays cached placements into blit commands.

pub mod adapter;
pub mod atlas;
pub mod color;
pub mod font;
pub mod glyph;
pub mod planner;
pub mod rasterizer;
pub mod text;
