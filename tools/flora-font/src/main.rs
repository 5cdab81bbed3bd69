// RustPixel
// copyright zipxing@hotmail.com 2022～2025

/// flora-font: inspect how a font lays out and packs text, without a window.
///
/// Usage:
/// flora-font --font assets/fonts/default.ttf measure "Hello\nWorld"
/// flora-font --font assets/fonts/default.ttf --scale 2 layout "Hi" --x 10 --y 20
/// flora-font --config flora_font.toml atlas "The quick brown fox" --out atlas
///
/// `\n` in the text argument is read as a line break.
/// Command line options override the values from `--config`.
///
use clap::{Parser, Subcommand};
use flora_font::{
    render::adapter::memory::MemoryAdapter, Font, FontConfig, FontError, FontHinting,
    FontResult, FontdueRasterizer,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "flora-font",
    author = "zipxing@hotmail.com",
    about = "Glyph atlas and text layout inspector"
)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// TTF/OTF font file
    #[arg(long, global = true)]
    font: Option<PathBuf>,
    /// Point size (2-255)
    #[arg(long, global = true)]
    size: Option<u32>,
    #[arg(long, global = true)]
    scale: Option<f32>,
    /// normal, light, mono or none
    #[arg(long, global = true)]
    hinting: Option<FontHinting>,
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the size the text takes
    Measure { text: String },
    /// Print the blit commands drawing the text
    Layout {
        text: String,
        #[arg(long, default_value_t = 0)]
        x: i32,
        #[arg(long, default_value_t = 0)]
        y: i32,
    },
    /// Pack the text's glyphs and save every atlas page as PNG
    Atlas {
        text: String,
        #[arg(long, default_value = "atlas")]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("flora-font: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> FontResult<FontConfig> {
    let mut config = match &cli.config {
        Some(path) => FontConfig::load(path)?,
        None => FontConfig::default(),
    };
    if let Some(font) = &cli.font {
        config.font_path = font.clone();
    }
    if let Some(size) = cli.size {
        config.size = size;
    }
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    if let Some(hinting) = cli.hinting {
        config.hinting = hinting;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "log4rs")]
fn start_log(config: &FontConfig) -> FontResult<()> {
    let level = flora_font::log::parse_level(&config.log_level)?;
    flora_font::log::init_log(level, &config.log_file)
}

#[cfg(not(feature = "log4rs"))]
fn start_log(_config: &FontConfig) -> FontResult<()> {
    Ok(())
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn run(cli: Cli) -> FontResult<()> {
    let config = load_config(&cli)?;
    start_log(&config)?;
    info!("flora-font: {:?}", cli.command);

    let mut adapter = MemoryAdapter::new();
    let mut font = Font::from_config(&FontdueRasterizer, &config)?;
    let result = match &cli.command {
        Cmd::Measure { text } => measure(&mut font, &mut adapter, &unescape(text)),
        Cmd::Layout { text, x, y } => layout(&mut font, &mut adapter, &unescape(text), *x, *y),
        Cmd::Atlas { text, out } => atlas(&mut font, &mut adapter, &unescape(text), out),
    };
    font.close(&mut adapter);
    result
}

fn measure(font: &mut Font, adapter: &mut MemoryAdapter, text: &str) -> FontResult<()> {
    let (w, h) = font.measure(adapter, text)?;
    println!("size        {} x {}", w, h);
    println!("line height {}", font.line_height());
    println!("glyphs      {}", font.glyph_count());
    println!("pages       {}", font.page_count());
    Ok(())
}

fn layout(
    font: &mut Font,
    adapter: &mut MemoryAdapter,
    text: &str,
    x: i32,
    y: i32,
) -> FontResult<()> {
    let cmds = font.layout(adapter, text, x, y)?;
    for (i, cmd) in cmds.iter().enumerate() {
        let page = font
            .pages()
            .iter()
            .position(|p| p.texture() == cmd.texture)
            .ok_or_else(|| FontError::InvalidState(format!("no page for {:?}", cmd.texture)))?;
        println!(
            "{:4}  page {}  src ({}, {}, {}x{})  dst ({}, {}, {}x{})  \
             tint #{:02X}{:02X}{:02X}{:02X}",
            i,
            page,
            cmd.src.x,
            cmd.src.y,
            cmd.src.width,
            cmd.src.height,
            cmd.dst.x,
            cmd.dst.y,
            cmd.dst.w,
            cmd.dst.h,
            cmd.tint.r,
            cmd.tint.g,
            cmd.tint.b,
            cmd.tint.a
        );
    }
    Ok(())
}

#[cfg(feature = "image")]
fn atlas(
    font: &mut Font,
    adapter: &mut MemoryAdapter,
    text: &str,
    out: &std::path::Path,
) -> FontResult<()> {
    use image::RgbaImage;

    font.preload(adapter, text)?;
    std::fs::create_dir_all(out)?;
    for (i, page) in font.pages().iter().enumerate() {
        let tex = adapter
            .texture(page.texture())
            .ok_or_else(|| FontError::InvalidState(format!("page {} has no texture", i)))?;
        let img = RgbaImage::from_raw(tex.width, tex.height, tex.data.clone())
            .ok_or_else(|| FontError::InvalidState(format!("page {} has a short buffer", i)))?;
        let path = out.join(format!("page_{}.png", i));
        img.save(&path)
            .map_err(|e| FontError::Io(std::io::Error::other(e.to_string())))?;
        println!("{} ({} glyphs)", path.display(), page.rects().len());
    }
    Ok(())
}

#[cfg(not(feature = "image"))]
fn atlas(
    _font: &mut Font,
    _adapter: &mut MemoryAdapter,
    _text: &str,
    _out: &std::path::Path,
) -> FontResult<()> {
    Err(FontError::Config(
        "atlas export needs the `image` feature".to_string(),
    ))
}
