// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Headless adapter. Textures live in RAM as RGBA8 buffers and blits into textures are
//! rasterized on the CPU (nearest sampling, flip, tint, blend). Blits to the screen are
//! only recorded, which is what tests and the `flora-font` tool inspect.
//!
//! Rotation is recorded but not rasterized. The global color is only stored; callers fold it
//! into `BlitCommand::tint`.

use super::{Adapter, BlendMode, BlitCommand, FlipMode, RenderTarget, TextureId};
use crate::{
    error::{FontError, FontResult},
    render::{color::Color, rasterizer::PixelBuffer},
};
use log::debug;
use std::collections::HashMap;

/// RGBA8 texture held in memory
#[derive(Debug, Clone)]
pub struct MemoryTexture {
    pub width: u32,
    pub height: u32,
    pub render_target: bool,
    /// Row-major RGBA, 4 bytes per pixel
    pub data: Vec<u8>,
}

impl MemoryTexture {
    fn blank(width: u32, height: u32, render_target: bool) -> Self {
        Self {
            width,
            height,
            render_target,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// RGBA at (x, y), or None when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    fn set_pixel(&mut self, x: u32, y: u32, p: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&p);
    }
}

#[derive(Debug, Default)]
pub struct MemoryAdapter {
    textures: HashMap<TextureId, MemoryTexture>,
    next_id: u32,
    target: RenderTarget,
    frame_active: bool,
    color: Color,
    clear_color: Color,
    screen_blits: Vec<BlitCommand>,
    texture_blits: usize,
    frames: u64,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self {
            color: Color::WHITE,
            clear_color: Color::BLACK,
            ..Default::default()
        }
    }

    pub fn texture(&self, id: TextureId) -> Option<&MemoryTexture> {
        self.textures.get(&id)
    }

    /// Number of live textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Blits recorded against the screen since the last `begin_frame`
    pub fn screen_blits(&self) -> &[BlitCommand] {
        &self.screen_blits
    }

    /// Total blits rasterized into textures over the adapter's lifetime
    pub fn texture_blit_count(&self) -> usize {
        self.texture_blits
    }

    /// Number of frames presented by `end_frame`
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Color the last `begin_frame` cleared with
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    fn alloc(&mut self, tex: MemoryTexture) -> TextureId {
        self.next_id += 1;
        let id = TextureId(self.next_id);
        self.textures.insert(id, tex);
        id
    }

    fn blit_into_texture(&mut self, dst_id: TextureId, cmd: &BlitCommand) -> FontResult<()> {
        let src = self.textures.get(&cmd.texture).ok_or_else(|| {
            FontError::InvalidArgument(format!("unknown texture {:?}", cmd.texture))
        })?;
        let (sw, sh) = (src.width, src.height);
        if cmd.src.right() > sw || cmd.src.bottom() > sh {
            return Err(FontError::InvalidArgument(format!(
                "source rect {:?} outside {}x{} texture",
                cmd.src, sw, sh
            )));
        }
        // copy the source region out first, src and dst may be the same texture
        let mut region = Vec::with_capacity(cmd.src.area() as usize);
        for y in cmd.src.top()..cmd.src.bottom() {
            for x in cmd.src.left()..cmd.src.right() {
                region.push(src.pixel(x, y).unwrap_or([0; 4]));
            }
        }

        let tint = cmd.tint;
        let dst = self.textures.get_mut(&dst_id).ok_or_else(|| {
            FontError::InvalidState(format!("render target {:?} destroyed", dst_id))
        })?;

        let dx0 = cmd.dst.x.round() as i64;
        let dy0 = cmd.dst.y.round() as i64;
        let dw = cmd.dst.w.round().max(0.0) as i64;
        let dh = cmd.dst.h.round().max(0.0) as i64;
        let (rw, rh) = (i64::from(cmd.src.width), i64::from(cmd.src.height));
        if dw == 0 || dh == 0 || rw == 0 || rh == 0 {
            return Ok(());
        }

        for j in 0..dh {
            let ty = dy0 + j;
            if ty < 0 || ty >= i64::from(dst.height) {
                continue;
            }
            for i in 0..dw {
                let tx = dx0 + i;
                if tx < 0 || tx >= i64::from(dst.width) {
                    continue;
                }
                let mut sx = i * rw / dw;
                let mut sy = j * rh / dh;
                if cmd.flip.contains(FlipMode::HORIZONTAL) {
                    sx = rw - 1 - sx;
                }
                if cmd.flip.contains(FlipMode::VERTICAL) {
                    sy = rh - 1 - sy;
                }
                let p = region[(sy * rw + sx) as usize];
                let c = Color::new(p[0], p[1], p[2], p[3]).modulate(tint);
                let s = [c.r, c.g, c.b, c.a];
                let out = match cmd.blend {
                    BlendMode::None => s,
                    BlendMode::Blend => {
                        let d = dst.pixel(tx as u32, ty as u32).unwrap_or([0; 4]);
                        blend_over(s, d)
                    }
                };
                dst.set_pixel(tx as u32, ty as u32, out);
            }
        }
        self.texture_blits += 1;
        Ok(())
    }
}

/// Straight-alpha source-over
fn blend_over(s: [u8; 4], d: [u8; 4]) -> [u8; 4] {
    let sa = u32::from(s[3]);
    let da = u32::from(d[3]);
    let out_a = sa + da * (255 - sa) / 255;
    if out_a == 0 {
        return [0; 4];
    }
    let ch = |sc: u8, dc: u8| {
        ((u32::from(sc) * sa + u32::from(dc) * da * (255 - sa) / 255) / out_a) as u8
    };
    [ch(s[0], d[0]), ch(s[1], d[1]), ch(s[2], d[2]), out_a as u8]
}

impl Adapter for MemoryAdapter {
    fn create_render_target_texture(&mut self, w: u32, h: u32) -> FontResult<TextureId> {
        let id = self.alloc(MemoryTexture::blank(w, h, true));
        debug!("memory adapter: render target {:?} {}x{}", id, w, h);
        Ok(id)
    }

    fn create_texture(&mut self, pixels: &PixelBuffer) -> FontResult<TextureId> {
        let expected = pixels.width as usize * pixels.height as usize * 4;
        if pixels.data.len() != expected {
            return Err(FontError::InvalidArgument(format!(
                "pixel buffer {}x{} holds {} bytes, expected {}",
                pixels.width,
                pixels.height,
                pixels.data.len(),
                expected
            )));
        }
        Ok(self.alloc(MemoryTexture {
            width: pixels.width,
            height: pixels.height,
            render_target: false,
            data: pixels.data.clone(),
        }))
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        if self.textures.remove(&texture).is_some()
            && self.target == RenderTarget::Texture(texture)
        {
            self.target = RenderTarget::Screen;
        }
    }

    fn blit(&mut self, cmd: &BlitCommand) -> FontResult<()> {
        match self.target {
            RenderTarget::Screen => {
                if !self.frame_active {
                    return Err(FontError::InvalidState(
                        "blit to screen outside begin_frame/end_frame".to_string(),
                    ));
                }
                if !self.textures.contains_key(&cmd.texture) {
                    return Err(FontError::InvalidArgument(format!(
                        "unknown texture {:?}",
                        cmd.texture
                    )));
                }
                self.screen_blits.push(*cmd);
                Ok(())
            }
            RenderTarget::Texture(id) => self.blit_into_texture(id, cmd),
        }
    }

    fn set_render_target(&mut self, target: RenderTarget) -> RenderTarget {
        std::mem::replace(&mut self.target, target)
    }

    fn render_target(&self) -> RenderTarget {
        self.target
    }

    fn begin_frame(&mut self, clear: Color) -> FontResult<()> {
        if self.frame_active {
            return Err(FontError::InvalidState("begin_frame called twice".to_string()));
        }
        self.frame_active = true;
        self.clear_color = clear;
        self.screen_blits.clear();
        Ok(())
    }

    fn end_frame(&mut self) -> FontResult<()> {
        if !self.frame_active {
            return Err(FontError::InvalidState(
                "end_frame without begin_frame".to_string(),
            ));
        }
        self.frame_active = false;
        self.frames += 1;
        Ok(())
    }

    fn is_frame_active(&self) -> bool {
        self.frame_active
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
