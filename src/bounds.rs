//! Axis-aligned bounding boxes and the handle-based resize algorithm.
//!
//! [`Bounds`] values live in canvas space. The resize math in
//! [`Bounds::transformed`] is deliberately non-incremental: a drag always
//! recomputes from the bounds captured at drag start plus the total pointer
//! delta, so repeated small moves land exactly where one big move would.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::vec::Vec2;

/// An axis-aligned box in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

/// A corner of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// An edge of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsEdge {
    Top,
    Right,
    Bottom,
    Left,
}

/// A draggable location on the bounding box that resizes the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsLocation {
    Corner(BoundsCorner),
    Edge(BoundsEdge),
}

/// Any draggable grip rendered around a selected shape's bounds: the eight
/// resize locations plus the rotate grip above the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsHandle {
    TopLeftCorner,
    TopRightCorner,
    BottomRightCorner,
    BottomLeftCorner,
    TopEdge,
    RightEdge,
    BottomEdge,
    LeftEdge,
    Rotate,
}

impl BoundsHandle {
    /// The resize location this grip maps to, or `None` for the rotate grip.
    #[must_use]
    pub fn location(self) -> Option<BoundsLocation> {
        match self {
            Self::TopLeftCorner => Some(BoundsLocation::Corner(BoundsCorner::TopLeft)),
            Self::TopRightCorner => Some(BoundsLocation::Corner(BoundsCorner::TopRight)),
            Self::BottomRightCorner => Some(BoundsLocation::Corner(BoundsCorner::BottomRight)),
            Self::BottomLeftCorner => Some(BoundsLocation::Corner(BoundsCorner::BottomLeft)),
            Self::TopEdge => Some(BoundsLocation::Edge(BoundsEdge::Top)),
            Self::RightEdge => Some(BoundsLocation::Edge(BoundsEdge::Right)),
            Self::BottomEdge => Some(BoundsLocation::Edge(BoundsEdge::Bottom)),
            Self::LeftEdge => Some(BoundsLocation::Edge(BoundsEdge::Left)),
            Self::Rotate => None,
        }
    }
}

/// Resize output: the new box plus signed scale factors relative to the
/// input box. A negative scale means the drag crossed the opposite side and
/// the shape is mirrored on that axis; width and height are always
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformedBounds {
    pub bounds: Bounds,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl TransformedBounds {
    /// Snap the box part to a grid, keeping the scale factors.
    #[must_use]
    pub fn snapped_to_grid(self, grid: f64) -> Self {
        Self {
            bounds: self.bounds.snapped_to_grid(grid),
            ..self
        }
    }
}

impl Bounds {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Minimal box around a set of points. Fewer than two points yields the
    /// unit box `[0,0] → [1,1]`, and width/height are floored at 1, so the
    /// result is never zero-area and downstream ratios never divide by zero.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        if points.len() < 2 {
            min_x = 0.0;
            min_y = 0.0;
            max_x = 1.0;
            max_y = 1.0;
        } else {
            for p in points {
                min_x = min_x.min(p.x);
                min_y = min_y.min(p.y);
                max_x = max_x.max(p.x);
                max_y = max_y.max(p.y);
            }
        }

        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: (max_x - min_x).max(1.0),
            height: (max_y - min_y).max(1.0),
        }
    }

    /// Shift the whole box by `delta` without recomputing extents.
    #[must_use]
    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            min_x: self.min_x + delta.x,
            min_y: self.min_y + delta.y,
            max_x: self.max_x + delta.x,
            max_y: self.max_y + delta.y,
            ..self
        }
    }

    /// Grow (or shrink, for negative `delta`) by `delta` on every side.
    #[must_use]
    pub fn expanded(self, delta: f64) -> Self {
        Self {
            min_x: self.min_x - delta,
            min_y: self.min_y - delta,
            max_x: self.max_x + delta,
            max_y: self.max_y + delta,
            width: self.width + delta * 2.0,
            height: self.height + delta * 2.0,
        }
    }

    #[must_use]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }

    #[must_use]
    pub fn contains(self, p: Vec2) -> bool {
        p.x > self.min_x && p.x < self.max_x && p.y > self.min_y && p.y < self.max_y
    }

    /// Round all four edges to the grid. Width and height are floored at 1
    /// so a snapped box never collapses.
    #[must_use]
    pub fn snapped_to_grid(self, grid: f64) -> Self {
        let min_x = (self.min_x / grid).round() * grid;
        let min_y = (self.min_y / grid).round() * grid;
        let max_x = (self.max_x / grid).round() * grid;
        let max_y = (self.max_y / grid).round() * grid;
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: (max_x - min_x).max(1.0),
            height: (max_y - min_y).max(1.0),
        }
    }

    /// Resize by dragging `handle` by `delta` (total displacement since
    /// drag start), for a shape rotated by `rotation` radians.
    ///
    /// Steps: counter-rotate the delta into the shape's local frame; move
    /// only the edges the handle controls; optionally re-derive the
    /// unconstrained axis to keep the original aspect ratio; for rotated
    /// shapes, shift the result so the anchor opposite the handle stays
    /// fixed in world space; swap extents on axes the drag crossed over.
    #[must_use]
    #[allow(clippy::too_many_lines, clippy::similar_names)]
    pub fn transformed(
        self,
        handle: BoundsLocation,
        delta: Vec2,
        rotation: f64,
        aspect_locked: bool,
    ) -> TransformedBounds {
        use BoundsCorner::{BottomLeft, BottomRight, TopLeft, TopRight};
        use BoundsEdge::{Bottom, Left, Right, Top};
        use BoundsLocation::{Corner, Edge};

        let (ax0, ay0, ax1, ay1) = (self.min_x, self.min_y, self.max_x, self.max_y);
        let (mut bx0, mut by0, mut bx1, mut by1) = (ax0, ay0, ax1, ay1);

        // Work in the shape's unrotated frame.
        let d = delta.rot(-rotation);

        match handle {
            Edge(Top) | Corner(TopLeft | TopRight) => by0 += d.y,
            Edge(Bottom) | Corner(BottomLeft | BottomRight) => by1 += d.y,
            _ => {}
        }
        match handle {
            Edge(Left) | Corner(TopLeft | BottomLeft) => bx0 += d.x,
            Edge(Right) | Corner(TopRight | BottomRight) => bx1 += d.x,
            _ => {}
        }

        let aw = ax1 - ax0;
        let ah = ay1 - ay0;
        // Degenerate input boxes scale against 1 instead of dividing by zero.
        let aw_safe = if aw == 0.0 { 1.0 } else { aw };
        let ah_safe = if ah == 0.0 { 1.0 } else { ah };

        let scale_x = (bx1 - bx0) / aw_safe;
        let scale_y = (by1 - by0) / ah_safe;
        let flip_x = scale_x < 0.0;
        let flip_y = scale_y < 0.0;

        let bw = (bx1 - bx0).abs();
        let bh = (by1 - by0).abs();

        if aspect_locked {
            let ar = aw_safe / ah_safe;
            let is_tall = ar < bw / bh;
            let tw = bw * (if scale_y < 0.0 { 1.0 } else { -1.0 }) * (1.0 / ar);
            let th = bh * (if scale_x < 0.0 { 1.0 } else { -1.0 }) * ar;

            match handle {
                Corner(TopLeft) => {
                    if is_tall {
                        by0 = by1 + tw;
                    } else {
                        bx0 = bx1 + th;
                    }
                }
                Corner(TopRight) => {
                    if is_tall {
                        by0 = by1 + tw;
                    } else {
                        bx1 = bx0 - th;
                    }
                }
                Corner(BottomRight) => {
                    if is_tall {
                        by1 = by0 - tw;
                    } else {
                        bx1 = bx0 - th;
                    }
                }
                Corner(BottomLeft) => {
                    if is_tall {
                        by1 = by0 - tw;
                    } else {
                        bx0 = bx1 + th;
                    }
                }
                Edge(Top | Bottom) => {
                    let mid = (bx0 + bx1) / 2.0;
                    let w = bh * ar;
                    bx0 = mid - w / 2.0;
                    bx1 = mid + w / 2.0;
                }
                Edge(Left | Right) => {
                    let mid = (by0 + by1) / 2.0;
                    let h = bw / ar;
                    by0 = mid - h / 2.0;
                    by1 = mid + h / 2.0;
                }
            }
        }

        // Pin the anchor opposite the handle in world space: rotate both the
        // old and new anchor about their respective centers and shift the new
        // box by the difference.
        if rotation.rem_euclid(TAU) != 0.0 {
            let c0 = Vec2::new(ax0, ay0).med(Vec2::new(ax1, ay1));
            let c1 = Vec2::new(bx0, by0).med(Vec2::new(bx1, by1));

            let cv = match handle {
                Corner(TopLeft) => Vec2::new(bx1, by1)
                    .rot_with(c1, rotation)
                    .sub(Vec2::new(ax1, ay1).rot_with(c0, rotation)),
                Corner(TopRight) => Vec2::new(bx0, by1)
                    .rot_with(c1, rotation)
                    .sub(Vec2::new(ax0, ay1).rot_with(c0, rotation)),
                Corner(BottomRight) => Vec2::new(bx0, by0)
                    .rot_with(c1, rotation)
                    .sub(Vec2::new(ax0, ay0).rot_with(c0, rotation)),
                Corner(BottomLeft) => Vec2::new(bx1, by0)
                    .rot_with(c1, rotation)
                    .sub(Vec2::new(ax1, ay0).rot_with(c0, rotation)),
                Edge(Top) => Vec2::new(bx0, by1)
                    .med(Vec2::new(bx1, by1))
                    .rot_with(c1, rotation)
                    .sub(Vec2::new(ax0, ay1).med(Vec2::new(ax1, ay1)).rot_with(c0, rotation)),
                Edge(Left) => Vec2::new(bx1, by0)
                    .med(Vec2::new(bx1, by1))
                    .rot_with(c1, rotation)
                    .sub(Vec2::new(ax1, ay0).med(Vec2::new(ax1, ay1)).rot_with(c0, rotation)),
                Edge(Bottom) => Vec2::new(bx0, by0)
                    .med(Vec2::new(bx1, by0))
                    .rot_with(c1, rotation)
                    .sub(Vec2::new(ax0, ay0).med(Vec2::new(ax1, ay0)).rot_with(c0, rotation)),
                Edge(Right) => Vec2::new(bx0, by0)
                    .med(Vec2::new(bx0, by1))
                    .rot_with(c1, rotation)
                    .sub(Vec2::new(ax0, ay0).med(Vec2::new(ax0, ay1)).rot_with(c0, rotation)),
            };

            bx0 -= cv.x;
            by0 -= cv.y;
            bx1 -= cv.x;
            by1 -= cv.y;
        }

        // The drag crossed an axis: swap extents so min stays min.
        if bx1 < bx0 {
            std::mem::swap(&mut bx1, &mut bx0);
        }
        if by1 < by0 {
            std::mem::swap(&mut by1, &mut by0);
        }

        TransformedBounds {
            bounds: Bounds {
                min_x: bx0,
                min_y: by0,
                max_x: bx1,
                max_y: by1,
                width: bx1 - bx0,
                height: by1 - by0,
            },
            scale_x: ((bx1 - bx0) / aw_safe) * if flip_x { -1.0 } else { 1.0 },
            scale_y: ((by1 - by0) / ah_safe) * if flip_y { -1.0 } else { 1.0 },
        }
    }
}
