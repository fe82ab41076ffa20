#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::bounds::{BoundsCorner, BoundsEdge, BoundsLocation};
use crate::shape::Shape;
use crate::shape::style::ShapeStyle;

fn stroke_at(x: f64, y: f64) -> FreeDrawShape {
    FreeDrawShape {
        id: Uuid::new_v4(),
        child_index: 1.0,
        point: Vec2::new(x, y),
        rotation: 0.0,
        styles: ShapeStyle::default(),
        points: vec![Vec2::ZERO],
        cache: BoundsCache::default(),
    }
}

// =============================================================
// Appending points
// =============================================================

#[test]
fn append_down_right_keeps_origin() {
    let stroke = stroke_at(100.0, 100.0).with_point(Vec2::new(110.0, 105.0));
    assert_eq!(stroke.point, Vec2::new(100.0, 100.0));
    assert_eq!(stroke.points, vec![Vec2::ZERO, Vec2::new(10.0, 5.0)]);
}

#[test]
fn append_up_left_rebases_origin() {
    let stroke = stroke_at(100.0, 100.0).with_point(Vec2::new(90.0, 95.0));
    assert_eq!(stroke.point, Vec2::new(90.0, 95.0));
    // The old first point keeps its world position.
    assert_eq!(stroke.points[0], Vec2::new(10.0, 5.0));
    assert_eq!(stroke.points[1], Vec2::ZERO);
}

#[test]
fn append_preserves_world_positions_of_existing_points() {
    let stroke = stroke_at(50.0, 50.0)
        .with_point(Vec2::new(60.0, 70.0))
        .with_point(Vec2::new(40.0, 45.0));

    // World position of every point = shape.point + stored point.
    let worlds: Vec<Vec2> = stroke.points.iter().map(|p| stroke.point.add(*p)).collect();
    assert!(worlds[0].approx_eq(Vec2::new(50.0, 50.0)));
    assert!(worlds[1].approx_eq(Vec2::new(60.0, 70.0)));
    assert!(worlds[2].approx_eq(Vec2::new(40.0, 45.0)));
}

#[test]
fn append_rounds_stored_points() {
    let stroke = stroke_at(0.0, 0.0).with_point(Vec2::new(1.23456, 2.34567));
    assert_eq!(stroke.points[1], Vec2::new(1.23, 2.35));
}

#[test]
fn stored_points_never_negative() {
    let stroke = stroke_at(10.0, 10.0)
        .with_point(Vec2::new(-5.0, 3.0))
        .with_point(Vec2::new(2.0, -8.0));
    for p in &stroke.points {
        assert!(p.x >= 0.0, "negative stored x: {p:?}");
        assert!(p.y >= 0.0, "negative stored y: {p:?}");
    }
}

// =============================================================
// Bounds and caching
// =============================================================

#[test]
fn bounds_cover_all_points() {
    let stroke = stroke_at(10.0, 20.0)
        .with_point(Vec2::new(30.0, 25.0))
        .with_point(Vec2::new(15.0, 60.0));
    let b = stroke.bounds();
    assert_eq!(b.min_x, 10.0);
    assert_eq!(b.min_y, 20.0);
    assert_eq!(b.max_x, 30.0);
    assert_eq!(b.max_y, 60.0);
}

#[test]
fn bounds_are_stable_across_calls() {
    let stroke = stroke_at(0.0, 0.0).with_point(Vec2::new(10.0, 10.0));
    assert_eq!(stroke.bounds(), stroke.bounds());
}

#[test]
fn clone_recomputes_bounds_after_edit() {
    let stroke = stroke_at(0.0, 0.0).with_point(Vec2::new(10.0, 10.0));
    let _warm = stroke.bounds();
    // An edit built from the warmed value must not inherit the cached box.
    let grown = stroke.with_point(Vec2::new(50.0, 50.0));
    assert_eq!(grown.bounds().max_x, 50.0);
}

#[test]
fn single_point_stroke_gets_unit_box() {
    let stroke = stroke_at(5.0, 5.0);
    let b = stroke.bounds();
    assert_eq!(b.width, 1.0);
    assert_eq!(b.height, 1.0);
}

// =============================================================
// Transform
// =============================================================

fn square_stroke() -> FreeDrawShape {
    stroke_at(0.0, 0.0)
        .with_point(Vec2::new(100.0, 0.0))
        .with_point(Vec2::new(100.0, 100.0))
        .with_point(Vec2::new(0.0, 100.0))
}

#[test]
fn transform_scales_points_proportionally() {
    let stroke = square_stroke();
    let tb = stroke.bounds().transformed(
        BoundsLocation::Corner(BoundsCorner::BottomRight),
        Vec2::new(100.0, 0.0),
        0.0,
        false,
    );
    let scaled = stroke.transformed(&tb);
    let b = scaled.bounds();
    assert!((b.width - 200.0).abs() < 1e-6);
    assert!((b.height - 100.0).abs() < 1e-6);
    // Midpoint of the top edge scales with the box.
    assert!(scaled.points[1].approx_eq(Vec2::new(200.0, 0.0)));
}

#[test]
fn transform_flip_mirrors_points() {
    let stroke = stroke_at(0.0, 0.0).with_point(Vec2::new(100.0, 50.0));
    // Drag the right edge far past the left: x-axis flips.
    let tb = stroke.bounds().transformed(
        BoundsLocation::Edge(BoundsEdge::Right),
        Vec2::new(-200.0, 0.0),
        0.0,
        false,
    );
    assert!(tb.scale_x < 0.0);
    let flipped = stroke.transformed(&tb);

    // The first point was at the left edge; after the flip it reads from
    // the right edge.
    let b = flipped.bounds();
    let first_world = flipped.point.add(flipped.points[0]);
    assert!((first_world.x - b.max_x).abs() < 1e-6);
}

#[test]
fn transform_keeps_point_at_new_box_origin() {
    let stroke = square_stroke();
    let tb = stroke.bounds().transformed(
        BoundsLocation::Corner(BoundsCorner::BottomRight),
        Vec2::new(50.0, 50.0),
        0.0,
        false,
    );
    let scaled = stroke.transformed(&tb);
    let b = scaled.bounds();
    assert!((b.min_x - tb.bounds.min_x).abs() < 1e-6);
    assert!((b.min_y - tb.bounds.min_y).abs() < 1e-6);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn cache_is_not_serialized() {
    let stroke = square_stroke();
    let _warm = stroke.bounds();
    let value = serde_json::to_value(Shape::FreeDraw(stroke)).unwrap();
    assert!(value.get("cache").is_none());
    assert_eq!(value["type"], "freedraw");
}

#[test]
fn roundtrip_preserves_points() {
    let stroke = square_stroke();
    let json = serde_json::to_string(&Shape::FreeDraw(stroke.clone())).unwrap();
    let back: Shape = serde_json::from_str(&json).unwrap();
    let Shape::FreeDraw(back) = back else {
        panic!("variant changed");
    };
    assert_eq!(back.points, stroke.points);
    assert_eq!(back.point, stroke.point);
}
