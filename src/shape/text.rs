//! Text label shapes.
//!
//! A text shape has no stored box: its bounds come from measuring the
//! rendered text through the [`TextMeasurer`] collaborator. Resizing does
//! not reflow — it multiplies the glyph `scale`, so a resize is a visual
//! zoom anchored at the shape's top-left.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, TransformedBounds};
use crate::consts::FONT_SIZE_PX;
use crate::shape::style::{ShapeStyle, StyleKey};
use crate::shape::ShapeId;
use crate::text_measure::TextMeasurer;
use crate::vec::Vec2;

/// Style keys a text label honors.
pub(crate) const STYLE_KEYS: &[StyleKey] = &[StyleKey::Color];

/// An inline-editable text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShape {
    pub id: ShapeId,
    pub child_index: f64,
    pub point: Vec2,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub styles: ShapeStyle,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl TextShape {
    /// Effective font size in pixels at the current scale.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        FONT_SIZE_PX * self.scale
    }

    #[must_use]
    pub fn bounds(&self, measurer: &dyn TextMeasurer) -> Bounds {
        let size = measurer.measure(&self.text, self.font_size());
        Bounds::new(0.0, 0.0, size.x, size.y).translated(self.point)
    }

    /// Resize by zooming the glyphs: the larger axis ratio wins and the
    /// top-left stays put.
    #[must_use]
    pub fn transformed(&self, tb: &TransformedBounds) -> Self {
        Self {
            scale: self.scale * tb.scale_x.abs().max(tb.scale_y.abs()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}
