//! Endpoint handles for line-family shapes.
//!
//! Handle points are stored relative to the owning shape's `point`. The
//! move logic keeps that invariant tight: after any handle move the shape's
//! `point` is re-based to the top-left of the handle pair, so no handle
//! ever sits at negative relative coordinates and `point + handle.point`
//! stays the handle's world position.

#[cfg(test)]
#[path = "handles_test.rs"]
mod handles_test;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::consts::ANGLE_SNAP_SEGMENTS;
use crate::vec::{Vec2, snap_angle_to_segments};

/// Which endpoint of a line-family shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleId {
    Start,
    End,
}

impl HandleId {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// A named, independently draggable control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub id: HandleId,
    pub index: u32,
    /// Position relative to the owning shape's `point`.
    pub point: Vec2,
}

/// The two endpoint handles of a line-family shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHandles {
    pub start: Handle,
    pub end: Handle,
}

impl Default for LineHandles {
    /// Fresh handles for a just-created line: start at the shape origin,
    /// end one unit away so the seed geometry is never degenerate.
    fn default() -> Self {
        Self {
            start: Handle {
                id: HandleId::Start,
                index: 0,
                point: Vec2::ZERO,
            },
            end: Handle {
                id: HandleId::End,
                index: 1,
                point: Vec2::new(1.0, 1.0),
            },
        }
    }
}

impl LineHandles {
    #[must_use]
    pub fn get(&self, id: HandleId) -> &Handle {
        match id {
            HandleId::Start => &self.start,
            HandleId::End => &self.end,
        }
    }

    /// Bounding box of the two handle points, relative to the shape's
    /// `point`.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&[self.start.point, self.end.point])
    }

    /// Move one handle by `delta` and re-base. Returns the new handle pair
    /// and the shape `point` shift to apply alongside it, so both update
    /// atomically.
    ///
    /// With `snap_to_angle` the delta is first adjusted so the dragged
    /// handle lands on the nearest 15° ray from the *other* handle; the
    /// result is then grid-snapped (a grid of 1 snaps nothing).
    #[must_use]
    pub fn moved(
        &self,
        id: HandleId,
        delta: Vec2,
        snap_to_angle: bool,
        grid: f64,
    ) -> (Self, Vec2) {
        let delta = if snap_to_angle {
            self.angle_snapped_delta(id, delta)
        } else {
            delta
        };

        let mut next = *self;
        let handle = match id {
            HandleId::Start => &mut next.start,
            HandleId::End => &mut next.end,
        };
        handle.point = handle.point.add(delta).snap(grid).to_fixed();

        // Re-base so the shape point tracks the handles' top-left.
        let rel = next.bounds();
        let offset = Vec2::new(rel.min_x, rel.min_y);
        if offset != Vec2::ZERO {
            next.start.point = next.start.point.sub(offset).to_fixed();
            next.end.point = next.end.point.sub(offset).to_fixed();
        }

        (next, offset)
    }

    /// Adjust `delta` so the dragged handle ends up on the nearest
    /// 24-segment ray out of the opposite handle.
    fn angle_snapped_delta(&self, id: HandleId, delta: Vec2) -> Vec2 {
        let anchor = self.get(id.other()).point;
        let current = self.get(id).point;
        let raw_target = current.add(delta).to_fixed();
        let angle = anchor.angle(raw_target);
        let snapped = raw_target.rot_with(
            anchor,
            snap_angle_to_segments(angle, ANGLE_SNAP_SEGMENTS) - angle,
        );
        delta.add(snapped.sub(raw_target))
    }
}
