// Library exports for quotewall

pub mod font;
pub mod layout;
pub mod quotes;
pub mod render;

use std::path::PathBuf;

use crate::layout::SizeRange;

/// Rendering configuration, constructed once by the driver at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    /// Background fill, RGB.
    pub background: [u8; 3],
    /// Caption color, RGB.
    pub text_color: [u8; 3],
    pub padding_left: u32,
    pub padding_right: u32,
    pub padding_top: u32,
    pub padding_bottom: u32,
    /// Path to a TTF/OTF font file.
    pub font_path: PathBuf,
    pub max_font_size: f32,
    pub min_font_size: f32,
    /// Decrement between candidate font sizes.
    pub font_size_step: f32,
    /// Line-spacing multiplier (>1 leaves an inter-line gap).
    pub line_spacing: f32,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            background: [0, 0, 0],
            text_color: [255, 255, 255],
            padding_left: 100,
            padding_right: 100,
            padding_top: 100,
            padding_bottom: 100,
            font_path: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            max_font_size: 80.0,
            min_font_size: 20.0,
            font_size_step: 2.0,
            line_spacing: 1.2,
            output_dir: PathBuf::from("wallpapers"),
        }
    }
}

impl Config {
    /// Width left for text once horizontal padding is reserved.
    pub fn available_width(&self) -> f32 {
        self.width.saturating_sub(self.padding_left + self.padding_right) as f32
    }

    /// Height left for text once vertical padding is reserved.
    pub fn available_height(&self) -> f32 {
        self.height.saturating_sub(self.padding_top + self.padding_bottom) as f32
    }

    pub fn size_range(&self) -> SizeRange {
        SizeRange {
            max: self.max_font_size,
            min: self.min_font_size,
            step: self.font_size_step,
        }
    }
}
