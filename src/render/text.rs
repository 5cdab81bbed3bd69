// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Text layout: stacks glyphs left to right and breaks lines on `\n`.
//!
//! Text is walked as UTF-16 code units with `\r` removed. Each glyph advances the pen by
//! its bitmap width times the scale; there is no kerning and no shaping. Unsupported
//! glyphs take no room and draw nothing.

use crate::{
    error::{FontError, FontResult},
    render::{
        adapter::{Adapter, BlitCommand},
        color::Color,
        glyph::{GlyphCache, GlyphRecord},
        rasterizer::FontFace,
    },
    util::FRect,
};

const LF: u16 = b'\n' as u16;
const CR: u16 = b'\r' as u16;

/// Scale, tint and line height of one font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    line_skip: i32,
    scale: f32,
    color: Color,
}

impl TextLayout {
    /// Layout for a face whose baselines are `line_skip` pixels apart, at scale 1 in white
    pub fn new(line_skip: i32) -> Self {
        Self {
            line_skip,
            scale: 1.0,
            color: Color::WHITE,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Unscaled line skip reported by the face
    pub fn line_skip(&self) -> i32 {
        self.line_skip
    }

    /// Distance between baselines after scaling
    pub fn line_height(&self) -> f32 {
        self.line_skip as f32 * self.scale
    }

    /// Walk `text`, placing glyphs as needed, and call `visit` with the pen position of
    /// every visible glyph. Returns the number of lines.
    fn walk<F, A, V>(
        &self,
        cache: &mut GlyphCache,
        face: &mut F,
        adapter: &mut A,
        text: &str,
        mut visit: V,
    ) -> FontResult<u32>
    where
        F: FontFace + ?Sized,
        A: Adapter + ?Sized,
        V: FnMut(f32, f32, &GlyphRecord),
    {
        let line_height = self.line_height();
        let (mut pen_x, mut pen_y) = (0.0f32, 0.0f32);
        let mut lines = 1;

        for code in text.encode_utf16().filter(|&c| c != CR) {
            if code == LF {
                pen_x = 0.0;
                pen_y += line_height;
                lines += 1;
                continue;
            }
            let record = cache.get_or_place(face, adapter, code)?;
            if !record.is_supported() {
                continue;
            }
            visit(pen_x, pen_y, &record);
            pen_x += record.rect.width as f32 * self.scale;
        }
        Ok(lines)
    }

    /// Size of the box `text` occupies: widest line by number of lines times the line
    /// height. Glyphs not seen before are placed, so this may touch the atlas, but it
    /// does not need an active frame.
    pub fn measure<F, A>(
        &self,
        cache: &mut GlyphCache,
        face: &mut F,
        adapter: &mut A,
        text: &str,
    ) -> FontResult<(f32, f32)>
    where
        F: FontFace + ?Sized,
        A: Adapter + ?Sized,
    {
        if !text.encode_utf16().any(|c| c != CR) {
            return Ok((0.0, 0.0));
        }
        let scale = self.scale;
        let mut width = 0.0f32;
        let lines = self.walk(cache, face, adapter, text, |pen_x, _, record| {
            width = width.max(pen_x + record.rect.width as f32 * scale);
        })?;
        Ok((width, lines as f32 * self.line_height()))
    }

    /// Blit commands drawing `text` with its top-left corner at (x, y), in order.
    /// The tint is the layout color composed with the adapter's global color.
    pub fn layout<F, A>(
        &self,
        cache: &mut GlyphCache,
        face: &mut F,
        adapter: &mut A,
        text: &str,
        x: f32,
        y: f32,
    ) -> FontResult<Vec<BlitCommand>>
    where
        F: FontFace + ?Sized,
        A: Adapter + ?Sized,
    {
        let tint = self.color.modulate(adapter.color());
        let scale = self.scale;
        let mut placed = vec![];
        self.walk(cache, face, adapter, text, |pen_x, pen_y, record| {
            placed.push((pen_x, pen_y, *record));
        })?;

        let pages = cache.pages();
        let mut cmds = Vec::with_capacity(placed.len());
        for (pen_x, pen_y, record) in placed {
            let page = record.page.and_then(|p| pages.page(p)).ok_or_else(|| {
                FontError::InvalidState(format!("glyph on missing page {:?}", record.page))
            })?;
            let dst = FRect::new(
                x + pen_x,
                y + pen_y,
                record.rect.width as f32 * scale,
                record.rect.height as f32 * scale,
            );
            cmds.push(BlitCommand::new(page.texture(), record.rect, dst, tint));
        }
        Ok(cmds)
    }

    /// Draw `text` at (x, y). Fails with `InvalidState` outside
    /// `begin_frame`/`end_frame`.
    pub fn draw<F, A>(
        &self,
        cache: &mut GlyphCache,
        face: &mut F,
        adapter: &mut A,
        text: &str,
        x: f32,
        y: f32,
    ) -> FontResult<()>
    where
        F: FontFace + ?Sized,
        A: Adapter + ?Sized,
    {
        if !adapter.is_frame_active() {
            return Err(FontError::InvalidState(
                "draw called outside an active frame".to_string(),
            ));
        }
        for cmd in self.layout(cache, face, adapter, text, x, y)? {
            adapter.blit(&cmd)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        render::adapter::{memory::MemoryAdapter, FlipMode},
        testing::{box_size, BoxFace, LINE_SKIP},
    };

    struct Fixture {
        ad: MemoryAdapter,
        face: BoxFace,
        cache: GlyphCache,
        text: TextLayout,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                ad: MemoryAdapter::new(),
                face: BoxFace::without("¤"),
                cache: GlyphCache::new(),
                text: TextLayout::new(LINE_SKIP),
            }
        }

        fn measure(&mut self, s: &str) -> (f32, f32) {
            self.text
                .measure(&mut self.cache, &mut self.face, &mut self.ad, s)
                .unwrap()
        }

        fn layout(&mut self, s: &str, x: f32, y: f32) -> Vec<BlitCommand> {
            self.text
                .layout(&mut self.cache, &mut self.face, &mut self.ad, s, x, y)
                .unwrap()
        }
    }

    fn width(c: char) -> f32 {
        box_size(c as u16).0 as f32
    }

    #[test]
    fn test_measure_empty() {
        let mut f = Fixture::new();
        assert_eq!(f.measure(""), (0.0, 0.0));
        assert_eq!(f.measure("\r"), (0.0, 0.0));
        assert!(f.cache.pages().is_empty());
    }

    #[test]
    fn test_measure_two_lines() {
        let mut f = Fixture::new();
        let (w, h) = f.measure("A\nBB");
        assert_eq!(w, width('A').max(2.0 * width('B')));
        assert_eq!(h, 2.0 * LINE_SKIP as f32);
    }

    #[test]
    fn test_measure_applies_scale() {
        let mut f = Fixture::new();
        f.text.set_scale(2.5);
        let (w, h) = f.measure("A\nBB");
        assert_eq!(w, width('A').max(2.0 * width('B')) * 2.5);
        assert_eq!(h, 2.0 * LINE_SKIP as f32 * 2.5);
        assert_eq!(f.text.line_height(), LINE_SKIP as f32 * 2.5);
    }

    #[test]
    fn test_measure_ignores_carriage_return() {
        let mut f = Fixture::new();
        assert_eq!(f.measure("A\r\nBB"), f.measure("A\nBB"));
    }

    #[test]
    fn test_trailing_newline_counts_a_line() {
        let mut f = Fixture::new();
        assert_eq!(f.measure("A\n"), (width('A'), 2.0 * LINE_SKIP as f32));
    }

    #[test]
    fn test_unsupported_glyph_takes_no_room() {
        let mut f = Fixture::new();
        assert_eq!(f.measure("A¤A"), f.measure("AA"));
        assert_eq!(f.layout("A¤A", 0.0, 0.0).len(), 2);
        assert_eq!(f.measure("¤"), (0.0, LINE_SKIP as f32));
    }

    #[test]
    fn test_layout_positions() {
        let mut f = Fixture::new();
        f.text.set_scale(2.0);
        let cmds = f.layout("Hi\nA", 10.0, 20.0);
        assert_eq!(cmds.len(), 3);
        let (hw, hh) = box_size('H' as u16);
        assert_eq!(
            cmds[0].dst,
            FRect::new(10.0, 20.0, hw as f32 * 2.0, hh as f32 * 2.0)
        );
        assert_eq!(cmds[1].dst.x, 10.0 + hw as f32 * 2.0);
        assert_eq!(cmds[1].dst.y, 20.0);
        assert_eq!(cmds[2].dst.x, 10.0);
        assert_eq!(cmds[2].dst.y, 20.0 + LINE_SKIP as f32 * 2.0);
        for cmd in &cmds {
            assert_eq!(cmd.rotation, 0.0);
            assert_eq!(cmd.flip, FlipMode::NONE);
        }
        let h = f.cache.get('H' as u16).unwrap();
        assert_eq!(cmds[0].src, h.rect);
    }

    #[test]
    fn test_tint_composes_global_color() {
        let mut f = Fixture::new();
        f.text.set_color(Color::new(255, 255, 0, 255));
        f.ad.set_color(Color::new(255, 0, 255, 128));
        let cmds = f.layout("A", 0.0, 0.0);
        assert_eq!(cmds[0].tint, Color::new(255, 0, 0, 128));
    }

    #[test]
    fn test_draw_requires_frame() {
        let mut f = Fixture::new();
        let r = f
            .text
            .draw(&mut f.cache, &mut f.face, &mut f.ad, "Hi", 0.0, 0.0);
        assert!(matches!(r, Err(FontError::InvalidState(_))));
        assert!(f.ad.screen_blits().is_empty());
    }

    #[test]
    fn test_draw_blits_each_visible_glyph() {
        let mut f = Fixture::new();
        f.ad.begin_frame(Color::BLACK).unwrap();
        f.text
            .draw(&mut f.cache, &mut f.face, &mut f.ad, "A ¤\nB", 3.0, 4.0)
            .unwrap();
        f.ad.end_frame().unwrap();
        assert_eq!(f.ad.screen_blits().len(), 3);
        let page0 = f.cache.pages().pages()[0].texture();
        assert!(f.ad.screen_blits().iter().all(|c| c.texture == page0));
    }

    #[test]
    fn test_width_is_max_over_lines() {
        let mut f = Fixture::new();
        let (w, _) = f.measure("BBB\nA\nBB");
        assert_eq!(w, 3.0 * width('B'));
    }
}
