// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Font configuration, loaded from TOML.
//!
//! ```toml
//! font_path = "assets/fonts/default.ttf"
//! size = 20
//! hinting = "mono"
//! scale = 1.5
//! color = { r = 255, g = 255, b = 0, a = 255 }
//! log_level = "debug"
//! ```
//!
//! Every field is optional and falls back to [`FontConfig::default`].

use crate::{
    error::{FontError, FontResult},
    render::{color::Color, font::check_font_size, rasterizer::FontHinting},
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_FONT_PATH: &str = "assets/fonts/default.ttf";
pub const DEFAULT_FONT_SIZE: u32 = 16;
pub const DEFAULT_LOG_FILE: &str = "log/flora_font.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub font_path: PathBuf,
    /// Point size, 2 to 255
    pub size: u32,
    pub hinting: FontHinting,
    pub scale: f32,
    pub color: Color,
    /// Level name for the file logger ("off", "error", ... "trace")
    pub log_level: String,
    pub log_file: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            size: DEFAULT_FONT_SIZE,
            hinting: FontHinting::Normal,
            scale: 1.0,
            color: Color::WHITE,
            log_level: "info".to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl FontConfig {
    pub fn from_toml_str(s: &str) -> FontResult<Self> {
        let config: FontConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> FontResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| FontError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Check the values a font can't be opened or drawn with
    pub fn validate(&self) -> FontResult<()> {
        check_font_size(self.size)?;
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(FontError::Config(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
