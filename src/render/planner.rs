// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! First-fit placement of a `w × h` glyph into atlas pages.
//!
//! Pages are tried in order. An empty page takes the glyph at (0, 0). On a page that
//! already holds rects, the candidate positions are, in this order:
//!
//! ```text
//!   1. right of every rect, in insertion order   (r.x + r.w, r.y)
//!   2. below every rect, in insertion order      (r.x, r.y + r.h)
//! ```
//!
//! The first candidate that stays inside the page and intersects no existing rect wins.
//! Touching edges is not an intersection. If no page accepts, the caller opens a new page
//! and puts the glyph at its origin.
//!
//! This is not an optimal packer. Placement only depends on the page contents, so the same
//! sequence of glyphs always produces the same layout.

use crate::util::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Fit { page: usize, rect: Rect },
    NeedsNewPage,
}

/// Find a spot for a `w × h` glyph. `pages` yields the rects of each page in page order.
pub fn place<'a, I>(pages: I, w: u32, h: u32, page_size: u32) -> Placement
where
    I: IntoIterator<Item = &'a [Rect]>,
{
    for (page, rects) in pages.into_iter().enumerate() {
        if let Some(rect) = place_on_page(rects, w, h, page_size) {
            return Placement::Fit { page, rect };
        }
    }
    Placement::NeedsNewPage
}

fn place_on_page(rects: &[Rect], w: u32, h: u32, page_size: u32) -> Option<Rect> {
    // oversized glyphs still land on an empty page
    if rects.is_empty() {
        return Some(Rect::new(0, 0, w, h));
    }
    let free = |c: &Rect| c.fits_in(page_size) && !rects.iter().any(|r| r.intersects(*c));

    rects
        .iter()
        .map(|r| Rect::new(r.right(), r.y, w, h))
        .find(free)
        .or_else(|| {
            rects
                .iter()
                .map(|r| Rect::new(r.x, r.bottom(), w, h))
                .find(free)
        })
}
