//! Measure lines: endpoint-handled segments that report a real-world
//! distance, calibrated against a background image when one is present.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::consts::MEASURE_TIP_LENGTH;
use crate::shape::handles::{HandleId, LineHandles};
use crate::shape::image::RatioScale;
use crate::shape::style::{ShapeStyle, StyleKey};
use crate::shape::ShapeId;
use crate::vec::Vec2;

/// Style keys a measure line honors.
pub(crate) const STYLE_KEYS: &[StyleKey] = &[StyleKey::Color, StyleKey::Size];

/// A measuring segment with perpendicular tip strokes at both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureLineShape {
    pub id: ShapeId,
    pub child_index: f64,
    pub point: Vec2,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub styles: ShapeStyle,
    #[serde(default)]
    pub handles: LineHandles,
}

/// The two perpendicular tip strokes rendered at the ends of a measure
/// line, in handle-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureTips {
    pub start: (Vec2, Vec2),
    pub end: (Vec2, Vec2),
}

impl MeasureLineShape {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.handles.bounds().translated(self.point)
    }

    #[must_use]
    pub fn moved_handle(&self, id: HandleId, delta: Vec2, snap_to_angle: bool, grid: f64) -> Self {
        let (handles, offset) = self.handles.moved(id, delta, snap_to_angle, grid);
        Self {
            handles,
            point: self.point.add(offset).to_fixed(),
            ..self.clone()
        }
    }

    /// Distance between the endpoints in canvas units, rounded to whole
    /// units.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.handles.start.point.dist(self.handles.end.point).round()
    }

    /// Human-readable distance under the given calibration, e.g. `"2.50 m"`.
    #[must_use]
    pub fn distance_label(&self, scale: &RatioScale) -> String {
        let distance = self.distance() * scale.ratio;
        format!("{distance:.2} {}", scale.unit)
    }

    /// Tip strokes perpendicular to the segment at each endpoint.
    #[must_use]
    pub fn tips(&self) -> MeasureTips {
        let start = self.handles.start.point;
        let end = self.handles.end.point;
        let half = MEASURE_TIP_LENGTH / 2.0;

        // Unit direction perpendicular to the segment. Vertical segments
        // (infinite slope) get horizontal tips; horizontal segments push the
        // perpendicular slope to infinity and get vertical tips.
        let slope = (start.y - end.y) / (start.x - end.x);
        let perp = if slope.is_finite() { -1.0 / slope } else { 0.0 };
        let (dx, dy) = if perp.is_finite() {
            let norm = (perp * perp + 1.0).sqrt();
            (1.0 / norm, perp / norm)
        } else {
            (0.0, 1.0)
        };

        let offset = Vec2::new(half * dx, half * dy);
        MeasureTips {
            start: (start.sub(offset), start.add(offset)),
            end: (end.sub(offset), end.add(offset)),
        }
    }
}
