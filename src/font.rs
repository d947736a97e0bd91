// Font loading and measurement

use crate::layout::GlyphMetrics;
use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// A font face loaded from disk, shared by every candidate size.
#[derive(Clone, Debug)]
pub struct Typeface {
    font: FontArc,
}

impl Typeface {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read font file '{}'", path.display()))?;
        let font = FontArc::try_from_vec(bytes)
            .with_context(|| format!("Failed to parse font file '{}'", path.display()))?;
        Ok(Self { font })
    }

    /// Scale the face to a pixel size, yielding a measuring and rasterizing
    /// handle.
    pub fn at_size(&self, size: f32) -> ScaledFace {
        ScaledFace {
            font: self.font.clone(),
            scale: PxScale::from(size),
        }
    }
}

/// One typeface at one pixel size.
pub struct ScaledFace {
    font: FontArc,
    scale: PxScale,
}

impl ScaledFace {
    /// Rasterize one line with its left edge at `x` and the top of its line
    /// box at `y`. Calls `plot(px, py, coverage)` for every covered pixel;
    /// coverage is in 0.0..=1.0. Pixels may fall outside the canvas when the
    /// block overflows; clipping is the caller's concern.
    pub fn draw_line<F: FnMut(i32, i32, f32)>(&self, text: &str, x: f32, y: f32, mut plot: F) {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = y + scaled.ascent();
        let mut caret = x;
        let mut prev: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    plot(
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        coverage,
                    );
                });
            }
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
    }
}

impl GlyphMetrics for ScaledFace {
    /// Kerned sum of horizontal advances.
    fn line_width(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    fn line_height(&self) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        scaled.ascent() - scaled.descent()
    }
}
