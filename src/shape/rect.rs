//! Rectangle shapes.

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, TransformedBounds};
use crate::shape::style::{ShapeStyle, StyleKey};
use crate::shape::ShapeId;
use crate::vec::Vec2;

/// Style keys a rectangle honors.
pub(crate) const STYLE_KEYS: &[StyleKey] = &[StyleKey::Color, StyleKey::Fill, StyleKey::Size];

/// An axis-aligned rectangle, positioned by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectShape {
    pub id: ShapeId,
    pub child_index: f64,
    pub point: Vec2,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub styles: ShapeStyle,
    #[serde(default = "unit_size")]
    pub size: Vec2,
}

fn unit_size() -> Vec2 {
    Vec2::new(1.0, 1.0)
}

impl RectShape {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.point.x,
            self.point.y,
            self.point.x + self.size.x,
            self.point.y + self.size.y,
        )
    }

    /// New rectangle fitted to a resize result.
    #[must_use]
    pub fn transformed(&self, tb: &TransformedBounds) -> Self {
        Self {
            point: Vec2::new(tb.bounds.min_x, tb.bounds.min_y).to_fixed(),
            size: Vec2::new(tb.bounds.width, tb.bounds.height).to_fixed(),
            ..self.clone()
        }
    }
}
