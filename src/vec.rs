//! 2-D vector and angle math.
//!
//! Everything here is a pure function over [`Vec2`] values or plain `f64`
//! angles. Geometry is stored and computed in canvas space; callers decide
//! which space a vector lives in.

#[cfg(test)]
#[path = "vec_test.rs"]
mod vec_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

/// A point or displacement in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Vec2 {
    /// The origin / zero displacement.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Scale by a scalar.
    #[must_use]
    pub fn mul(self, n: f64) -> Self {
        Self::new(self.x * n, self.y * n)
    }

    /// Divide by a scalar.
    #[must_use]
    pub fn div(self, n: f64) -> Self {
        Self::new(self.x / n, self.y / n)
    }

    #[must_use]
    pub fn len(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance from `self` to `other`.
    #[must_use]
    pub fn dist(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Angle of the vector from `self` to `other`, measured from the
    /// positive x-axis, in radians.
    #[must_use]
    pub fn angle(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Rotate around the origin by `radians`.
    #[must_use]
    pub fn rot(self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotate around `center` by `radians`. A zero rotation returns the
    /// point unchanged, bit for bit.
    #[must_use]
    pub fn rot_with(self, center: Self, radians: f64) -> Self {
        if radians == 0.0 {
            return self;
        }
        let (s, c) = radians.sin_cos();
        let p = self.sub(center);
        Self::new(p.x * c - p.y * s, p.x * s + p.y * c).add(center)
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn med(self, other: Self) -> Self {
        self.add(other).mul(0.5)
    }

    /// Linear interpolation from `self` toward `other` by `t`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self.add(other.sub(self).mul(t))
    }

    /// Snap each component to the nearest multiple of `step`. A step of 1
    /// is an exact identity — the input is returned unchanged, not a
    /// rounded copy.
    #[must_use]
    pub fn snap(self, step: f64) -> Self {
        if step == 1.0 {
            return self;
        }
        Self::new(
            (self.x / step).round() * step,
            (self.y / step).round() * step,
        )
    }

    /// Round each component to two decimal places, the precision stored
    /// geometry is kept at.
    #[must_use]
    pub fn to_fixed(self) -> Self {
        Self::new(
            (self.x * 100.0).round() / 100.0,
            (self.y * 100.0).round() / 100.0,
        )
    }

    /// Componentwise approximate equality within `1e-9`.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < 1e-9 && (self.y - other.y).abs() < 1e-9
    }
}

/// Clamp a scalar into `[min, max]`.
#[must_use]
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Wrap an angle into `[0, 2π)`. Handles negative and > 2π inputs.
#[must_use]
pub fn clamp_radians(r: f64) -> f64 {
    r.rem_euclid(TAU)
}

/// Quantize an angle to the nearest of `segments` equal divisions of a
/// full turn. Boundary inputs resolve deterministically (the floor of the
/// half-segment-shifted angle), so repeated identical input never
/// oscillates between neighbors.
#[must_use]
pub fn snap_angle_to_segments(r: f64, segments: u32) -> f64 {
    let seg = TAU / f64::from(segments);
    ((clamp_radians(r) + seg / 2.0) / seg).floor() * seg
}

/// Angle of the vector `a → b` measured so that a point straight above
/// `a` reads zero. The rotate grip hangs above a shape's top edge, so this
/// makes an untouched grip correspond to a rotation of 0.
#[must_use]
pub fn normalized_angle(a: Vec2, b: Vec2) -> f64 {
    FRAC_PI_2 + (b.y - a.y).atan2(b.x - a.x)
}

/// Nearest point to `p` on the segment `a → b`. With `clamp`, the result
/// is confined to the segment; otherwise it may lie on the infinite line.
#[must_use]
pub fn nearest_point_on_segment(a: Vec2, b: Vec2, p: Vec2, clamp: bool) -> Vec2 {
    let ab = b.sub(a);
    let ab_len = ab.len();
    if ab_len == 0.0 {
        return a;
    }
    let u = ab.div(ab_len);
    let t = (p.x - a.x) * u.x + (p.y - a.y) * u.y;
    let c = a.add(u.mul(t));

    if clamp {
        if c.x < a.x.min(b.x) {
            return if a.x < b.x { a } else { b };
        }
        if c.x > a.x.max(b.x) {
            return if a.x > b.x { a } else { b };
        }
        if c.y < a.y.min(b.y) {
            return if a.y < b.y { a } else { b };
        }
        if c.y > a.y.max(b.y) {
            return if a.y > b.y { a } else { b };
        }
    }
    c
}

/// Distance from `p` to the segment `a → b`.
#[must_use]
pub fn distance_to_segment(a: Vec2, b: Vec2, p: Vec2) -> f64 {
    p.dist(nearest_point_on_segment(a, b, p, true))
}
