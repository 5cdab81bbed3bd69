// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use flora_font::{
    Adapter, Color, Font, FontFace, FontHinting, FontdueRasterizer, GlyphRecord, MemoryAdapter,
    Rasterizer,
};
use std::path::Path;

const FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/DejaVuSansMono.ttf");

fn code(c: char) -> u16 {
    c as u16
}

#[test]
fn face_reports_metrics_and_coverage() {
    let mut face = FontdueRasterizer.open_font(Path::new(FONT), 16).unwrap();
    assert!(face.line_skip() > 0);
    assert!(face.is_glyph_supported(code('H')));
    assert!(!face.is_glyph_supported(0xD800));

    let h = face.rasterize_glyph(code('H')).unwrap();
    assert!(h.width > 0 && h.height > 0);
    assert_eq!(h.data.len(), (h.width * h.height * 4) as usize);
    assert!(h.data.chunks(4).any(|p| p[3] > 0));
}

#[test]
fn space_gets_a_blank_cell_with_width() {
    let mut ad = MemoryAdapter::new();
    let mut font = Font::open(FONT, 16).unwrap();
    assert!(font.line_height() > 0.0);

    let space = font.glyph(&mut ad, code(' ')).unwrap();
    assert!(space.is_supported());
    assert!(space.rect.width > 0);
    assert!(space.rect.height > 0);
    let (w, _) = font.measure(&mut ad, "a b").unwrap();
    let (w2, _) = font.measure(&mut ad, "ab").unwrap();
    assert_eq!(w - w2, space.rect.width as f32);
    font.close(&mut ad);
}

#[test]
fn lone_surrogate_is_cached_unsupported() {
    let mut ad = MemoryAdapter::new();
    let mut font = Font::open(FONT, 16).unwrap();
    assert_eq!(font.glyph(&mut ad, 0xD800).unwrap(), GlyphRecord::UNSUPPORTED);
    assert_eq!(font.glyph_count(), 1);
    assert_eq!(font.page_count(), 0);
    assert_eq!(font.glyph(&mut ad, 0xD800).unwrap(), GlyphRecord::UNSUPPORTED);
    font.close(&mut ad);
}

#[test]
fn draw_hi_advances_by_bitmap_width() {
    let mut ad = MemoryAdapter::new();
    let mut font = Font::open(FONT, 16).unwrap();
    ad.begin_frame(Color::BLACK).unwrap();
    font.draw(&mut ad, "Hi", 10, 20).unwrap();
    ad.end_frame().unwrap();

    let h = font.glyph(&mut ad, code('H')).unwrap();
    let blits = ad.screen_blits();
    assert_eq!(blits.len(), 2);
    assert_eq!((blits[0].dst.x, blits[0].dst.y), (10.0, 20.0));
    assert_eq!((blits[1].dst.x, blits[1].dst.y), (10.0 + h.rect.width as f32, 20.0));
    let page0 = font.pages()[0].texture();
    assert!(blits.iter().all(|b| b.texture == page0));
    font.close(&mut ad);
}

#[test]
fn mono_hinting_keeps_measure_and_thresholds_ink() {
    let mut ad = MemoryAdapter::new();
    let mut font = Font::open(FONT, 16).unwrap();
    let text = "Hello\nflora";
    let before = font.measure(&mut ad, text).unwrap();

    font.set_hinting(&mut ad, FontHinting::Mono);
    assert_eq!(font.measure(&mut ad, text).unwrap(), before);

    let g = font.glyph(&mut ad, code('g')).unwrap();
    let page = font.pages()[g.page.unwrap()].texture();
    let tex = ad.texture(page).unwrap();
    let mut alphas = vec![];
    for y in g.rect.y..g.rect.bottom() {
        for x in g.rect.x..g.rect.right() {
            alphas.push(tex.pixel(x, y).unwrap()[3]);
        }
    }
    assert!(alphas.contains(&255));
    assert!(alphas.iter().all(|&a| a == 0 || a == 255));
    font.close(&mut ad);
}
