//! Text measurement.
//!
//! Text shape bounds depend on how the host renders glyphs, which the core
//! cannot know. The engine takes a [`TextMeasurer`] at construction; the
//! browser host installs a DOM-backed one and everything else (tests,
//! native builds) uses the deterministic estimator below.

#[cfg(test)]
#[path = "text_measure_test.rs"]
mod text_measure_test;

use crate::vec::Vec2;

/// Collaborator that measures rendered text.
pub trait TextMeasurer {
    /// Width and height of `text` at `font_px`, in canvas units. Must be at
    /// least 1×1 even for empty text so downstream bounds never collapse.
    fn measure(&self, text: &str, font_px: f64) -> Vec2;
}

/// Average glyph-width-to-font-size ratio for the estimator.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Deterministic character-count estimator. Line height equals the font
/// size; width is the longest line's character count times an average
/// glyph width.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphEstimate;

impl TextMeasurer for GlyphEstimate {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, font_px: f64) -> Vec2 {
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let line_count = text.split('\n').count();
        Vec2::new(
            (longest as f64 * font_px * GLYPH_WIDTH_RATIO).max(1.0),
            (line_count as f64 * font_px).max(1.0),
        )
    }
}
