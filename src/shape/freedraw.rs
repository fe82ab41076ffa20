//! Freehand stroke shapes.
//!
//! A stroke stores its points relative to `point`, which tracks the
//! stroke's running top-left: every appended point that extends the stroke
//! up or left re-bases the whole point list so stored coordinates stay
//! non-negative and `point + points[i]` never changes for existing points.

#[cfg(test)]
#[path = "freedraw_test.rs"]
mod freedraw_test;

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, TransformedBounds};
use crate::shape::style::{ShapeStyle, StyleKey};
use crate::shape::ShapeId;
use crate::vec::Vec2;

/// Style keys a freehand stroke honors.
pub(crate) const STYLE_KEYS: &[StyleKey] = &[StyleKey::Color, StyleKey::Size];

/// Lazily computed bounds for a stroke's point list.
///
/// Strokes are immutable values: any edit produces a new shape, and cloning
/// starts the cache cold, so a cached box can never outlive the points it
/// was computed from.
#[derive(Debug, Default)]
pub(crate) struct BoundsCache(OnceCell<Bounds>);

impl Clone for BoundsCache {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl PartialEq for BoundsCache {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

/// A freehand stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeDrawShape {
    pub id: ShapeId,
    pub child_index: f64,
    pub point: Vec2,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub styles: ShapeStyle,
    #[serde(default = "seed_points")]
    pub points: Vec<Vec2>,
    #[serde(skip)]
    pub(crate) cache: BoundsCache,
}

fn seed_points() -> Vec<Vec2> {
    vec![Vec2::ZERO]
}

impl FreeDrawShape {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        *self
            .cache
            .0
            .get_or_init(|| Bounds::from_points(&self.points).translated(self.point))
    }

    /// Append a canvas-space point, re-basing `point` to the new top-left
    /// when the stroke grew up or left.
    #[must_use]
    pub fn with_point(&self, new_point: Vec2) -> Self {
        let top_left = Vec2::new(
            self.point.x.min(new_point.x),
            self.point.y.min(new_point.y),
        );

        let mut points = self.points.clone();
        points.push(new_point.sub(self.point));

        if self.point != top_left {
            let shift = self.point.sub(top_left);
            for p in &mut points {
                *p = p.add(shift);
            }
        }
        for p in &mut points {
            *p = p.to_fixed();
        }

        Self {
            point: top_left,
            points,
            cache: BoundsCache::default(),
            ..self.clone()
        }
    }

    /// New stroke fitted to a resize result. Every point is re-mapped
    /// proportionally into the new box; a negative scale mirrors the
    /// mapping so flips read from the far edge.
    #[must_use]
    pub fn transformed(&self, tb: &TransformedBounds) -> Self {
        let initial = self.bounds();

        let points: Vec<Vec2> = self
            .points
            .iter()
            .map(|p| {
                let tx = p.x / initial.width;
                let ty = p.y / initial.height;
                Vec2::new(
                    tb.bounds.width * if tb.scale_x < 0.0 { 1.0 - tx } else { tx },
                    tb.bounds.height * if tb.scale_y < 0.0 { 1.0 - ty } else { ty },
                )
            })
            .collect();

        let fitted = Bounds::from_points(&points);
        let point = Vec2::new(
            tb.bounds.min_x - fitted.min_x,
            tb.bounds.min_y - fitted.min_y,
        );

        Self {
            point,
            points,
            cache: BoundsCache::default(),
            ..self.clone()
        }
    }
}
