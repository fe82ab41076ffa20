//! Image shapes, including calibrated background images.
//!
//! A background image can carry a calibration — "this axis of the image
//! spans 50 m" — which the measure tool uses to convert canvas distances
//! into real-world ones.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, TransformedBounds};
use crate::shape::style::{ShapeStyle, StyleKey};
use crate::shape::ShapeId;
use crate::vec::Vec2;

/// Style keys an image honors (none — images render their own pixels).
pub(crate) const STYLE_KEYS: &[StyleKey] = &[];

/// Real-world units for calibrated measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    Cm,
    M,
    Km,
    In,
    Ft,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Px => "px",
            Self::Cm => "cm",
            Self::M => "m",
            Self::Km => "km",
            Self::In => "in",
            Self::Ft => "ft",
        };
        f.write_str(label)
    }
}

/// Which image axis a calibration distance refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleDirection {
    Horizontal,
    Vertical,
}

/// Calibration attached to a background image: one axis of the image
/// corresponds to `distance` real-world `unit`s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageScale {
    pub direction: ScaleDirection,
    pub distance: f64,
    pub unit: Unit,
}

/// Canvas-units-to-real-world conversion derived from a calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioScale {
    pub ratio: f64,
    pub unit: Unit,
}

impl RatioScale {
    /// The identity scale: one canvas unit is one pixel.
    pub const IDENTITY: Self = Self {
        ratio: 1.0,
        unit: Unit::Px,
    };
}

/// A raster image placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageShape {
    pub id: ShapeId,
    pub child_index: f64,
    pub point: Vec2,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub styles: ShapeStyle,
    pub size: Vec2,
    pub src: String,
    #[serde(default)]
    pub is_background: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ImageScale>,
}

impl ImageShape {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.point.x,
            self.point.y,
            self.point.x + self.size.x,
            self.point.y + self.size.y,
        )
    }

    /// New image fitted to a resize result. Images are always
    /// aspect-locked, so the resize math has already preserved the ratio.
    #[must_use]
    pub fn transformed(&self, tb: &TransformedBounds) -> Self {
        Self {
            point: Vec2::new(tb.bounds.min_x, tb.bounds.min_y).to_fixed(),
            size: Vec2::new(tb.bounds.width, tb.bounds.height).to_fixed(),
            ..self.clone()
        }
    }

    /// The measurement scale this image provides. Identity unless this is
    /// a calibrated background image.
    #[must_use]
    pub fn ratio_scale(&self) -> RatioScale {
        let Some(scale) = self.scale else {
            return RatioScale::IDENTITY;
        };
        if !self.is_background {
            return RatioScale::IDENTITY;
        }
        let dist_px = match scale.direction {
            ScaleDirection::Horizontal => self.size.x,
            ScaleDirection::Vertical => self.size.y,
        };
        RatioScale {
            ratio: scale.distance / dist_px,
            unit: scale.unit,
        }
    }
}
