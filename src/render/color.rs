// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! RGBA color used for font tint and the adapter's global tint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::new(0, 0, 0, 0xFF);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 0.0-1.0 channels; out-of-range values are clamped,
    /// then each channel is floor(v * 255).
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).floor() as u8;
        Self::new(c(r), c(g), c(b), c(a))
    }

    /// Per-channel multiply `a * b / 255`, the way a texture color mod combines with a
    /// draw color.
    pub fn modulate(self, other: Color) -> Color {
        let m = |a: u8, b: u8| (u16::from(a) * u16::from(b) / 255) as u8;
        Color::new(
            m(self.r, other.r),
            m(self.g, other.g),
            m(self.b, other.b),
            m(self.a, other.a),
        )
    }

    /// Channels as 0.0-1.0 floats
    pub fn to_f32(self) -> (f32, f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Color::new(c.0, c.1, c.2, c.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f32_clamps() {
        assert_eq!(Color::from_f32(1.0, 0.0, 0.5, 2.0), Color::new(255, 0, 127, 255));
        assert_eq!(Color::from_f32(-1.0, 0.1, 0.999, 1.0), Color::new(0, 25, 254, 255));
    }

    #[test]
    fn test_modulate() {
        let yellow = Color::new(255, 255, 0, 255);
        assert_eq!(yellow.modulate(Color::WHITE), yellow);
        assert_eq!(Color::WHITE.modulate(yellow), yellow);
        assert_eq!(yellow.modulate(Color::TRANSPARENT), Color::TRANSPARENT);
        let half = Color::new(128, 128, 128, 128);
        assert_eq!(half.modulate(Color::new(255, 0, 128, 255)), Color::new(128, 0, 64, 128));
        // truncates
        let c = Color::new(200, 200, 200, 200);
        assert_eq!(c.modulate(c), Color::new(156, 156, 156, 156));
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }
}
