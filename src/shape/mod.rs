//! The shape model: a closed union of drawable shape variants.
//!
//! All mutation is copy-on-write — every operation returns a new shape
//! value and the document store holds the only canonical copy. Dispatch is
//! an exhaustive `match` over the variants; per-variant behavior (bounds,
//! resize, style keys, editability) lives next to each variant's struct.


pub mod freedraw;
pub mod handles;
pub mod image;
pub mod line;
pub mod measure;
pub mod rect;
pub mod style;
pub mod text;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bounds::{Bounds, TransformedBounds};
use crate::consts::ANGLE_SNAP_SEGMENTS;
use crate::text_measure::TextMeasurer;
use crate::vec::{Vec2, normalized_angle, snap_angle_to_segments};

pub use freedraw::FreeDrawShape;
pub use handles::{Handle, HandleId, LineHandles};
pub use image::{ImageScale, ImageShape, RatioScale, ScaleDirection, Unit};
pub use line::LineShape;
pub use measure::{MeasureLineShape, MeasureTips};
pub use rect::RectShape;
pub use style::{ShapeStyle, StrokeSize, StyleKey};
pub use text::TextShape;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Any shape that can live on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    #[serde(rename = "rectangle")]
    Rect(RectShape),
    #[serde(rename = "line")]
    Line(LineShape),
    #[serde(rename = "freedraw")]
    FreeDraw(FreeDrawShape),
    #[serde(rename = "text")]
    Text(TextShape),
    #[serde(rename = "image")]
    Image(ImageShape),
    #[serde(rename = "measure_line")]
    MeasureLine(MeasureLineShape),
}

impl Shape {
    #[must_use]
    pub fn id(&self) -> ShapeId {
        match self {
            Self::Rect(s) => s.id,
            Self::Line(s) => s.id,
            Self::FreeDraw(s) => s.id,
            Self::Text(s) => s.id,
            Self::Image(s) => s.id,
            Self::MeasureLine(s) => s.id,
        }
    }

    #[must_use]
    pub fn child_index(&self) -> f64 {
        match self {
            Self::Rect(s) => s.child_index,
            Self::Line(s) => s.child_index,
            Self::FreeDraw(s) => s.child_index,
            Self::Text(s) => s.child_index,
            Self::Image(s) => s.child_index,
            Self::MeasureLine(s) => s.child_index,
        }
    }

    #[must_use]
    pub fn point(&self) -> Vec2 {
        match self {
            Self::Rect(s) => s.point,
            Self::Line(s) => s.point,
            Self::FreeDraw(s) => s.point,
            Self::Text(s) => s.point,
            Self::Image(s) => s.point,
            Self::MeasureLine(s) => s.point,
        }
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        match self {
            Self::Rect(s) => s.rotation,
            Self::Line(s) => s.rotation,
            Self::FreeDraw(s) => s.rotation,
            Self::Text(s) => s.rotation,
            Self::Image(s) => s.rotation,
            Self::MeasureLine(s) => s.rotation,
        }
    }

    #[must_use]
    pub fn styles(&self) -> &ShapeStyle {
        match self {
            Self::Rect(s) => &s.styles,
            Self::Line(s) => &s.styles,
            Self::FreeDraw(s) => &s.styles,
            Self::Text(s) => &s.styles,
            Self::Image(s) => &s.styles,
            Self::MeasureLine(s) => &s.styles,
        }
    }

    /// Short variant name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rectangle",
            Self::Line(_) => "line",
            Self::FreeDraw(_) => "freedraw",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::MeasureLine(_) => "measure_line",
        }
    }

    /// Style keys this variant honors.
    #[must_use]
    pub fn style_keys(&self) -> &'static [StyleKey] {
        match self {
            Self::Rect(_) => rect::STYLE_KEYS,
            Self::Line(_) => line::STYLE_KEYS,
            Self::FreeDraw(_) => freedraw::STYLE_KEYS,
            Self::Text(_) => text::STYLE_KEYS,
            Self::Image(_) => image::STYLE_KEYS,
            Self::MeasureLine(_) => measure::STYLE_KEYS,
        }
    }

    /// Whether double-clicking the shape opens an inline editor.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Whether resizing always preserves the aspect ratio, regardless of
    /// modifier keys.
    #[must_use]
    pub fn is_aspect_ratio_locked(&self) -> bool {
        matches!(self, Self::Image(_))
    }

    /// Whether the shape is resized through its bounding box. Line-family
    /// shapes are edited through their endpoint handles instead.
    #[must_use]
    pub fn is_transformable(&self) -> bool {
        !matches!(self, Self::Line(_) | Self::MeasureLine(_))
    }

    /// Endpoint handles, for line-family shapes.
    #[must_use]
    pub fn handles(&self) -> Option<&LineHandles> {
        match self {
            Self::Line(s) => Some(&s.handles),
            Self::MeasureLine(s) => Some(&s.handles),
            _ => None,
        }
    }

    /// Look up one endpoint handle by id.
    #[must_use]
    pub fn handle(&self, id: HandleId) -> Option<&Handle> {
        self.handles().map(|h| h.get(id))
    }

    /// Bounding box in canvas space. Text bounds come from the measurement
    /// collaborator; everything else is cheap geometry.
    #[must_use]
    pub fn bounds(&self, measurer: &dyn TextMeasurer) -> Bounds {
        match self {
            Self::Rect(s) => s.bounds(),
            Self::Line(s) => s.bounds(),
            Self::FreeDraw(s) => s.bounds(),
            Self::Text(s) => s.bounds(measurer),
            Self::Image(s) => s.bounds(),
            Self::MeasureLine(s) => s.bounds(),
        }
    }

    /// Move to `to`, snapped to `grid` (a grid of 1 snaps nothing).
    #[must_use]
    pub fn translated(&self, to: Vec2, grid: f64) -> Self {
        let point = to.snap(grid);
        match self {
            Self::Rect(s) => Self::Rect(RectShape { point, ..s.clone() }),
            Self::Line(s) => Self::Line(LineShape { point, ..s.clone() }),
            Self::FreeDraw(s) => Self::FreeDraw(FreeDrawShape {
                point,
                cache: freedraw::BoundsCache::default(),
                ..s.clone()
            }),
            Self::Text(s) => Self::Text(TextShape { point, ..s.clone() }),
            Self::Image(s) => Self::Image(ImageShape { point, ..s.clone() }),
            Self::MeasureLine(s) => Self::MeasureLine(MeasureLineShape { point, ..s.clone() }),
        }
    }

    /// Rotate so the shape faces `pointer` from its bounds center,
    /// optionally snapped to 15° segments.
    #[must_use]
    pub fn rotated(&self, pointer: Vec2, snap_to_angle: bool, measurer: &dyn TextMeasurer) -> Self {
        let center = self.bounds(measurer).center();
        let angle = normalized_angle(center, pointer);
        let rotation = if snap_to_angle {
            snap_angle_to_segments(angle, ANGLE_SNAP_SEGMENTS)
        } else {
            angle
        };
        self.with_rotation(rotation)
    }

    #[must_use]
    pub fn with_rotation(&self, rotation: f64) -> Self {
        match self {
            Self::Rect(s) => Self::Rect(RectShape { rotation, ..s.clone() }),
            Self::Line(s) => Self::Line(LineShape { rotation, ..s.clone() }),
            Self::FreeDraw(s) => Self::FreeDraw(FreeDrawShape {
                rotation,
                cache: freedraw::BoundsCache::default(),
                ..s.clone()
            }),
            Self::Text(s) => Self::Text(TextShape { rotation, ..s.clone() }),
            Self::Image(s) => Self::Image(ImageShape { rotation, ..s.clone() }),
            Self::MeasureLine(s) => Self::MeasureLine(MeasureLineShape { rotation, ..s.clone() }),
        }
    }

    #[must_use]
    pub fn with_child_index(&self, child_index: f64) -> Self {
        match self {
            Self::Rect(s) => Self::Rect(RectShape { child_index, ..s.clone() }),
            Self::Line(s) => Self::Line(LineShape { child_index, ..s.clone() }),
            Self::FreeDraw(s) => Self::FreeDraw(FreeDrawShape {
                child_index,
                cache: freedraw::BoundsCache::default(),
                ..s.clone()
            }),
            Self::Text(s) => Self::Text(TextShape { child_index, ..s.clone() }),
            Self::Image(s) => Self::Image(ImageShape { child_index, ..s.clone() }),
            Self::MeasureLine(s) => {
                Self::MeasureLine(MeasureLineShape { child_index, ..s.clone() })
            }
        }
    }

    /// Replace the honored style keys with the values from `patch`; keys
    /// the variant does not honor are discarded.
    #[must_use]
    pub fn with_styles(&self, patch: &ShapeStyle) -> Self {
        let styles = patch.filtered(self.style_keys());
        match self {
            Self::Rect(s) => Self::Rect(RectShape { styles, ..s.clone() }),
            Self::Line(s) => Self::Line(LineShape { styles, ..s.clone() }),
            Self::FreeDraw(s) => Self::FreeDraw(FreeDrawShape {
                styles,
                cache: freedraw::BoundsCache::default(),
                ..s.clone()
            }),
            Self::Text(s) => Self::Text(TextShape { styles, ..s.clone() }),
            Self::Image(s) => Self::Image(ImageShape { styles, ..s.clone() }),
            Self::MeasureLine(s) => Self::MeasureLine(MeasureLineShape { styles, ..s.clone() }),
        }
    }

    /// Fit the shape to a resize result. Line-family shapes are edited
    /// through handles and come back unchanged.
    #[must_use]
    pub fn transformed(&self, tb: &TransformedBounds) -> Self {
        match self {
            Self::Rect(s) => Self::Rect(s.transformed(tb)),
            Self::FreeDraw(s) => Self::FreeDraw(s.transformed(tb)),
            Self::Text(s) => Self::Text(s.transformed(tb)),
            Self::Image(s) => Self::Image(s.transformed(tb)),
            Self::Line(_) | Self::MeasureLine(_) => self.clone(),
        }
    }

    /// Move one endpoint handle. Returns `None` for shapes without handles.
    #[must_use]
    pub fn moved_handle(
        &self,
        id: HandleId,
        delta: Vec2,
        snap_to_angle: bool,
        grid: f64,
    ) -> Option<Self> {
        match self {
            Self::Line(s) => Some(Self::Line(s.moved_handle(id, delta, snap_to_angle, grid))),
            Self::MeasureLine(s) => Some(Self::MeasureLine(
                s.moved_handle(id, delta, snap_to_angle, grid),
            )),
            _ => None,
        }
    }
}
