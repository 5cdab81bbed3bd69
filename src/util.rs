// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Utilities for rects and path lookup.

use std::{
    env,
    fs::read_dir,
    io::{self, ErrorKind},
    path::{Path, PathBuf, MAIN_SEPARATOR},
};

/// get flag_file path...
pub fn get_project_root(flag_file: &str) -> io::Result<PathBuf> {
    let path = env::current_dir()?;

    for p in path.as_path().ancestors() {
        let found = read_dir(p)?
            .filter_map(Result::ok)
            .any(|e| e.file_name() == *flag_file);
        if found {
            return Ok(PathBuf::from(p));
        }
    }
    Err(io::Error::new(
        ErrorKind::NotFound,
        "Ran out of places to find flag_file",
    ))
}

/// Gets the absolute path of the project root, i.e. where Cargo.lock locates.
/// Falls back to "." when no Cargo.lock is found above the current directory.
pub fn get_root_path() -> String {
    match get_project_root("Cargo.lock") {
        Ok(p) => p.to_string_lossy().into_owned(),
        Err(_e) => ".".to_string(),
    }
}

pub fn get_abs_path(fpath: &str) -> String {
    if Path::new(fpath).is_relative() {
        format!("{}{}{}", get_root_path(), MAIN_SEPARATOR, fpath)
    } else {
        fpath.to_string()
    }
}

/// Integer rect on an atlas page. Edges are half-open: a rect covers
/// `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(self) -> u32 {
        self.x
    }

    pub fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn top(self) -> u32 {
        self.y
    }

    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Open intersection: rects that only share an edge do not intersect.
    pub fn intersects(self, other: Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if the rect lies inside `[0, size) × [0, size)`.
    pub fn fits_in(self, size: u32) -> bool {
        self.right() <= size && self.bottom() <= size
    }
}

/// Float rect, used for blit destinations after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> FRect {
        FRect { x, y, w, h }
    }
}

impl From<Rect> for FRect {
    fn from(r: Rect) -> Self {
        FRect::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}
