// Word wrap and font-size fitting

use anyhow::Result;

/// Pixel measurements for text at one font size.
///
/// The renderer's real implementation is backed by a scaled font face; tests
/// substitute a fixed-width fake.
pub trait GlyphMetrics {
    /// Width in pixels of one line of text.
    fn line_width(&self, text: &str) -> f32;
    /// Height in pixels of one line box.
    fn line_height(&self) -> f32;
}

/// Candidate font sizes, searched from `max` down to `min` by `step`.
#[derive(Debug, Clone, Copy)]
pub struct SizeRange {
    pub max: f32,
    pub min: f32,
    pub step: f32,
}

/// A fitted caption: the chosen font size and its wrapped lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub font_size: f32,
    pub lines: Vec<String>,
}

/// Greedy word wrap bounded by `max_width` pixels.
///
/// Words accumulate into the current line while it still fits; a word that
/// alone exceeds `max_width` is placed unsplit on its own line.
pub fn wrap_text<M: GlyphMetrics>(text: &str, metrics: &M, max_width: f32) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{} {}", current, word);
        if metrics.line_width(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    lines.push(current);
    lines
}

/// Total height of a wrapped block, spacing factor included.
pub fn block_height<M: GlyphMetrics>(lines: &[String], metrics: &M, line_spacing: f32) -> f32 {
    lines.len() as f32 * metrics.line_height() * line_spacing
}

/// Find the largest candidate font size at which `text` wraps into the
/// `max_width` x `max_height` box.
///
/// `load` is the font capability: it yields measurements for one candidate
/// size. If no candidate fits, the minimum size's wrapping is returned
/// anyway and the block overflows vertically at render time.
pub fn fit_to_box<M, F>(
    text: &str,
    load: F,
    max_width: f32,
    max_height: f32,
    range: SizeRange,
    line_spacing: f32,
) -> Result<Layout>
where
    M: GlyphMetrics,
    F: Fn(f32) -> Result<M>,
{
    let mut size = range.max;
    while size >= range.min {
        let metrics = load(size)?;
        let lines = wrap_text(text, &metrics, max_width);
        if block_height(&lines, &metrics, line_spacing) <= max_height {
            return Ok(Layout {
                font_size: size,
                lines,
            });
        }
        size -= range.step;
    }

    // Nothing fit: keep the smallest size and let the block overflow.
    let metrics = load(range.min)?;
    let lines = wrap_text(text, &metrics, max_width);
    Ok(Layout {
        font_size: range.min,
        lines,
    })
}
