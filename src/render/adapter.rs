// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render Adapter Module
//!
//! The font layer never talks to a graphics API directly. Everything it needs from the 2D
//! renderer goes through the [`Adapter`] trait:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Font                               │
//! │   GlyphCache (placement)          TextLayout (draw)       │
//! │        │                                │                 │
//! │        │ create_texture                 │ blit            │
//! │        │ set_render_target (guarded)    │ (screen target, │
//! │        │ blit (into page)               │  active frame)  │
//! │        ▼                                ▼                 │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │                  Adapter trait                      │  │
//! │  │   SDL renderer  │  GL render textures │  Memory     │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The adapter holds one piece of shared mutable state that matters here: the current
//! render target. Glyph placement redirects it to an atlas page through a
//! [`RenderTargetGuard`], which puts the previous target back when dropped, including on
//! early return and error paths.

use crate::{
    error::FontResult,
    render::{color::Color, rasterizer::PixelBuffer},
    util::{FRect, Rect},
};
use bitflags::bitflags;
use std::ops::{Deref, DerefMut};

/// Headless adapter keeping textures in memory
pub mod memory;

/// Opaque texture handle handed out by an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Destination of blits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderTarget {
    #[default]
    Screen,
    Texture(TextureId),
}

bitflags! {
    /// Flip options for blits, combine with `|`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FlipMode: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL   = 0b10;
    }
}

impl FlipMode {
    pub const NONE: FlipMode = FlipMode::empty();
}

/// How source pixels combine with the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Replace target pixels (used to copy glyph bitmaps into atlas pages)
    None,
    /// Source-over alpha blending
    #[default]
    Blend,
}

/// One textured quad copy
///
/// `src` is in texels of `texture`, `dst` is in pixels of the current render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlitCommand {
    pub texture: TextureId,
    pub src: Rect,
    pub dst: FRect,
    /// Rotation angle (radians)
    pub rotation: f64,
    /// Rotation center, relative to dst origin
    pub pivot: (f32, f32),
    pub flip: FlipMode,
    pub tint: Color,
    pub blend: BlendMode,
}

impl BlitCommand {
    /// Unrotated, unflipped, blended copy of `src` to `dst`
    pub fn new(texture: TextureId, src: Rect, dst: FRect, tint: Color) -> Self {
        Self {
            texture,
            src,
            dst,
            rotation: 0.0,
            pivot: (dst.w / 2.0, dst.h / 2.0),
            flip: FlipMode::NONE,
            tint,
            blend: BlendMode::Blend,
        }
    }
}

/// Adapter Interface Definition
///
/// All methods run on the thread that owns the adapter. Implementations do not need
/// to be `Send` or `Sync`.
pub trait Adapter {
    /// Create a `w × h` RGBA texture that can be used as a render target.
    /// Alpha blending is enabled and the initial content is fully transparent.
    fn create_render_target_texture(&mut self, w: u32, h: u32) -> FontResult<TextureId>;

    /// Create a static texture holding `pixels`
    fn create_texture(&mut self, pixels: &PixelBuffer) -> FontResult<TextureId>;

    /// Release a texture; unknown ids are ignored
    fn destroy_texture(&mut self, texture: TextureId);

    /// Copy a texture region onto the current render target
    fn blit(&mut self, cmd: &BlitCommand) -> FontResult<()>;

    /// Switch the render target, returning the previous one.
    /// Prefer [`RenderTargetGuard::redirect`], which restores it automatically.
    fn set_render_target(&mut self, target: RenderTarget) -> RenderTarget;

    /// Current render target
    fn render_target(&self) -> RenderTarget;

    /// Clear the screen with `clear` and open a frame
    fn begin_frame(&mut self, clear: Color) -> FontResult<()>;

    /// Present and close the current frame
    fn end_frame(&mut self) -> FontResult<()>;

    /// True between `begin_frame` and `end_frame`
    fn is_frame_active(&self) -> bool;

    /// Global tint applied on top of per-draw colors
    fn color(&self) -> Color;

    /// Set the global tint. Blits do not apply it by themselves: whoever builds a
    /// [`BlitCommand`] composes it into `tint` (see [`Color::modulate`]).
    fn set_color(&mut self, color: Color);
}

/// Scoped render target redirect.
///
/// Created by [`RenderTargetGuard::redirect`]; while alive it derefs to the adapter so
/// blits go to the redirected target. Dropping it restores the previous target.
/// Guards must be dropped in reverse order of creation, which the borrow checker
/// enforces since each guard holds the adapter mutably.
pub struct RenderTargetGuard<'a, A: Adapter + ?Sized> {
    adapter: &'a mut A,
    previous: RenderTarget,
}

impl<'a, A: Adapter + ?Sized> RenderTargetGuard<'a, A> {
    pub fn redirect(adapter: &'a mut A, target: RenderTarget) -> Self {
        let previous = adapter.set_render_target(target);
        Self { adapter, previous }
    }

    /// Target that will be restored on drop
    pub fn previous(&self) -> RenderTarget {
        self.previous
    }
}

impl<A: Adapter + ?Sized> Deref for RenderTargetGuard<'_, A> {
    type Target = A;

    fn deref(&self) -> &A {
        self.adapter
    }
}

impl<A: Adapter + ?Sized> DerefMut for RenderTargetGuard<'_, A> {
    fn deref_mut(&mut self) -> &mut A {
        self.adapter
    }
}

impl<A: Adapter + ?Sized> Drop for RenderTargetGuard<'_, A> {
    fn drop(&mut self) {
        self.adapter.set_render_target(self.previous);
    }
}
