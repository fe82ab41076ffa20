#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use super::*;

const EPSILON: f64 = 1e-10;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Basic ops
// =============================================================

#[test]
fn add_sub_roundtrip() {
    let a = Vec2::new(3.0, -4.0);
    let b = Vec2::new(1.5, 2.5);
    assert_eq!(a.add(b).sub(b), a);
}

#[test]
fn mul_div_by_scalar() {
    let a = Vec2::new(2.0, -6.0);
    assert_eq!(a.mul(2.0), Vec2::new(4.0, -12.0));
    assert_eq!(a.div(2.0), Vec2::new(1.0, -3.0));
}

#[test]
fn len_is_hypot() {
    assert!(approx(Vec2::new(3.0, 4.0).len(), 5.0));
}

#[test]
fn dist_between_points() {
    let a = Vec2::new(1.0, 1.0);
    let b = Vec2::new(4.0, 5.0);
    assert!(approx(a.dist(b), 5.0));
    assert!(approx(b.dist(a), 5.0));
}

#[test]
fn med_is_midpoint() {
    let m = Vec2::new(0.0, 0.0).med(Vec2::new(10.0, 20.0));
    assert_eq!(m, Vec2::new(5.0, 10.0));
}

#[test]
fn lerp_endpoints_and_middle() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(10.0, -10.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, -5.0));
}

// =============================================================
// Angles and rotation
// =============================================================

#[test]
fn angle_along_positive_x_axis() {
    let a = Vec2::new(0.0, 0.0);
    assert!(approx(a.angle(Vec2::new(5.0, 0.0)), 0.0));
}

#[test]
fn angle_straight_down() {
    // y grows downward on the canvas, so "down" is +π/2.
    let a = Vec2::new(0.0, 0.0);
    assert!(approx(a.angle(Vec2::new(0.0, 3.0)), FRAC_PI_2));
}

#[test]
fn rot_quarter_turn() {
    let v = Vec2::new(1.0, 0.0).rot(FRAC_PI_2);
    assert!(v.approx_eq(Vec2::new(0.0, 1.0)));
}

#[test]
fn rot_with_moves_around_center() {
    let v = Vec2::new(2.0, 1.0).rot_with(Vec2::new(1.0, 1.0), PI);
    assert!(v.approx_eq(Vec2::new(0.0, 1.0)));
}

#[test]
fn rot_with_zero_rotation_is_identity() {
    let v = Vec2::new(13.37, -42.0);
    assert_eq!(v.rot_with(Vec2::new(5.0, 5.0), 0.0), v);
}

#[test]
fn normalized_angle_above_center_is_zero() {
    // Straight above (negative y) maps to zero.
    let a = Vec2::new(0.0, 0.0);
    assert!(approx(normalized_angle(a, Vec2::new(0.0, -1.0)), 0.0));
}

#[test]
fn normalized_angle_right_of_center() {
    let a = Vec2::new(0.0, 0.0);
    assert!(approx(normalized_angle(a, Vec2::new(1.0, 0.0)), FRAC_PI_2));
}

// =============================================================
// clamp_radians
// =============================================================

#[test]
fn clamp_radians_passthrough() {
    assert!(approx(clamp_radians(1.0), 1.0));
}

#[test]
fn clamp_radians_negative() {
    assert!(approx(clamp_radians(-FRAC_PI_2), 3.0 * FRAC_PI_2));
}

#[test]
fn clamp_radians_over_full_turn() {
    assert!(approx(clamp_radians(TAU + 0.25), 0.25));
    assert!(approx(clamp_radians(-TAU - 0.25), TAU - 0.25));
}

// =============================================================
// snap_angle_to_segments
// =============================================================

#[test]
fn snap_angle_returns_segment_multiples() {
    let seg = TAU / 24.0;
    for i in 0..100 {
        let r = f64::from(i) * 0.1;
        let snapped = snap_angle_to_segments(r, 24);
        let ratio = snapped / seg;
        assert!(approx(ratio, ratio.round()), "angle {r} snapped to {snapped}");
    }
}

#[test]
fn snap_angle_nearest_segment() {
    let seg = TAU / 24.0;
    assert!(approx(snap_angle_to_segments(seg * 0.4, 24), 0.0));
    assert!(approx(snap_angle_to_segments(seg * 0.6, 24), seg));
}

#[test]
fn snap_angle_boundary_is_deterministic() {
    // Exactly between two segments: repeated identical input must not
    // oscillate.
    let seg = TAU / 24.0;
    let boundary = seg / 2.0;
    let first = snap_angle_to_segments(boundary, 24);
    for _ in 0..10 {
        assert_eq!(snap_angle_to_segments(boundary, 24), first);
    }
}

#[test]
fn snap_angle_negative_input() {
    let seg = TAU / 24.0;
    let snapped = snap_angle_to_segments(-seg * 3.1, 24);
    let ratio = snapped / seg;
    assert!(approx(ratio, ratio.round()));
    assert!((0.0..TAU).contains(&snapped));
}

// =============================================================
// Grid snap
// =============================================================

#[test]
fn snap_to_grid_rounds_to_nearest() {
    assert_eq!(Vec2::new(13.0, 7.0).snap(10.0), Vec2::new(10.0, 10.0));
    assert_eq!(Vec2::new(16.0, 4.0).snap(10.0), Vec2::new(20.0, 0.0));
}

#[test]
fn snap_step_one_is_exact_identity() {
    let v = Vec2::new(13.0, 7.0);
    assert_eq!(v.snap(1.0), v);
    let fractional = Vec2::new(13.37, 7.77);
    assert_eq!(fractional.snap(1.0), fractional);
}

#[test]
fn snap_negative_coordinates() {
    assert_eq!(Vec2::new(-13.0, -7.0).snap(10.0), Vec2::new(-10.0, -10.0));
}

// =============================================================
// to_fixed
// =============================================================

#[test]
fn to_fixed_rounds_to_two_decimals() {
    let v = Vec2::new(1.23456, -9.876).to_fixed();
    assert_eq!(v, Vec2::new(1.23, -9.88));
}

#[test]
fn to_fixed_is_idempotent() {
    let v = Vec2::new(1.23, 4.56);
    assert_eq!(v.to_fixed(), v);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_as_array() {
    let json = serde_json::to_string(&Vec2::new(1.5, -2.0)).unwrap();
    assert_eq!(json, "[1.5,-2.0]");
}

#[test]
fn deserializes_from_array() {
    let v: Vec2 = serde_json::from_str("[3.0, 4.5]").unwrap();
    assert_eq!(v, Vec2::new(3.0, 4.5));
}

// =============================================================
// clamp
// =============================================================

#[test]
fn clamp_inside_and_outside() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
}

// =============================================================
// Segments
// =============================================================

#[test]
fn nearest_point_on_horizontal_segment() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(10.0, 0.0);
    let c = nearest_point_on_segment(a, b, Vec2::new(4.0, 5.0), true);
    assert!(c.approx_eq(Vec2::new(4.0, 0.0)));
}

#[test]
fn nearest_point_clamps_to_endpoints() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(10.0, 0.0);
    let c = nearest_point_on_segment(a, b, Vec2::new(15.0, 3.0), true);
    assert_eq!(c, b);
}

#[test]
fn distance_to_segment_perpendicular() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(10.0, 0.0);
    assert!(approx(distance_to_segment(a, b, Vec2::new(5.0, 3.0)), 3.0));
}

#[test]
fn distance_to_degenerate_segment() {
    let a = Vec2::new(2.0, 2.0);
    assert!(approx(distance_to_segment(a, a, Vec2::new(2.0, 5.0)), 3.0));
}

#[test]
fn snap_angle_rotation_within_diagonal() {
    // 45° snaps to itself with 24 segments (45° = 3 segments of 15°).
    let snapped = snap_angle_to_segments(FRAC_PI_4, 24);
    assert!(approx(snapped, FRAC_PI_4));
}
