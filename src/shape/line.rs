//! Straight line shapes with draggable endpoint handles.

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::shape::handles::{HandleId, LineHandles};
use crate::shape::style::{ShapeStyle, StyleKey};
use crate::shape::ShapeId;
use crate::vec::Vec2;

/// Style keys a line honors.
pub(crate) const STYLE_KEYS: &[StyleKey] = &[StyleKey::Color, StyleKey::Size];

/// A line segment between two handles, both stored relative to `point`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineShape {
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

impl LineShape {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.handles.bounds().translated(self.point)
    }

    /// Move one endpoint, re-basing `point` so handle coordinates stay
    /// non-negative.
    #[must_use]
    pub fn moved_handle(&self, id: HandleId, delta: Vec2, snap_to_angle: bool, grid: f64) -> Self {
        let (handles, offset) = self.handles.moved(id, delta, snap_to_angle, grid);
        Self {
            handles,
            point: self.point.add(offset).to_fixed(),
            ..self.clone()
        }
    }
}
