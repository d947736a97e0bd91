// Wallpaper rasterizer

use crate::font::ScaledFace;
use crate::layout::{block_height, GlyphMetrics, Layout};
use crate::Config;
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Paint one quote onto a fresh canvas and write it to `path` as PNG.
///
/// The text block is centered vertically within the padded region and each
/// line is centered horizontally. When the block is taller than the padded
/// region (minimum-font-size degrade), the start offset goes negative and
/// the top of the block is clipped rather than corrected.
pub fn render_wallpaper(
    layout: &Layout,
    face: &ScaledFace,
    config: &Config,
    path: &Path,
) -> Result<()> {
    let mut canvas = RgbImage::from_pixel(config.width, config.height, Rgb(config.background));

    // Recomputed here, not carried over from the fitting pass.
    let total_height = block_height(&layout.lines, face, config.line_spacing);
    let advance = face.line_height() * config.line_spacing;

    let mut y = config.padding_top as f32 + (config.available_height() - total_height) / 2.0;
    for line in &layout.lines {
        let line_width = face.line_width(line);
        let x = config.padding_left as f32 + (config.available_width() - line_width) / 2.0;
        draw_line_clipped(&mut canvas, face, line, x, y, Rgb(config.text_color));
        y += advance;
    }

    canvas
        .save(path)
        .with_context(|| format!("Failed to write image '{}'", path.display()))?;
    println!("Wallpaper saved to: {}", path.display());
    Ok(())
}

/// Blend one line's glyph coverage onto the canvas, dropping out-of-bounds
/// pixels.
fn draw_line_clipped(
    canvas: &mut RgbImage,
    face: &ScaledFace,
    text: &str,
    x: f32,
    y: f32,
    color: Rgb<u8>,
) {
    let (width, height) = canvas.dimensions();
    face.draw_line(text, x, y, |px, py, coverage| {
        if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
            let pixel = canvas.get_pixel_mut(px as u32, py as u32);
            *pixel = blend(*pixel, color, coverage);
        }
    });
}

/// Alpha-blend `over` onto `under` by coverage.
fn blend(under: Rgb<u8>, over: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let alpha = coverage.clamp(0.0, 1.0);
    let mix = |u: u8, o: u8| (u as f32 * (1.0 - alpha) + o as f32 * alpha).round() as u8;
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}
