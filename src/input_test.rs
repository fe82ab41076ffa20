#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::bounds::BoundsHandle;

// =============================================================
// ToolKind
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(ToolKind::default(), ToolKind::Select);
}

#[test]
fn tool_names_roundtrip() {
    for tool in [
        ToolKind::Select,
        ToolKind::Rect,
        ToolKind::Line,
        ToolKind::FreeDraw,
        ToolKind::Text,
        ToolKind::MeasureLine,
    ] {
        assert_eq!(ToolKind::from_name(tool.name()), Some(tool));
    }
}

#[test]
fn tool_unknown_name_is_none() {
    assert_eq!(ToolKind::from_name("lasso"), None);
}

#[test]
fn tool_serde_matches_names() {
    assert_eq!(
        serde_json::to_string(&ToolKind::Rect).unwrap(),
        "\"rectangle\""
    );
    let tool: ToolKind = serde_json::from_str("\"measure_line\"").unwrap();
    assert_eq!(tool, ToolKind::MeasureLine);
}

// =============================================================
// Modifiers / Key
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
}

#[test]
fn delete_and_backspace_are_delete_keys() {
    assert!(Key("Delete".into()).is_delete());
    assert!(Key("Backspace".into()).is_delete());
    assert!(!Key("Escape".into()).is_delete());
    assert!(!Key("a".into()).is_delete());
}

#[test]
fn key_serde_is_transparent() {
    assert_eq!(
        serde_json::to_string(&Key("Delete".into())).unwrap(),
        "\"Delete\""
    );
}

// =============================================================
// PointerInfo
// =============================================================

#[test]
fn pointer_info_at_fills_defaults() {
    let info = PointerInfo::at(Target::Canvas, Vec2::new(5.0, 6.0));
    assert_eq!(info.point, Vec2::new(5.0, 6.0));
    assert_eq!(info.delta, Vec2::ZERO);
    assert!(!info.modifiers.shift);
}

#[test]
fn with_shift_sets_modifier() {
    let info = PointerInfo::at(Target::Canvas, Vec2::ZERO).with_shift();
    assert!(info.modifiers.shift);
}

#[test]
fn pointer_info_deserializes_with_flat_modifiers() {
    let id = Uuid::new_v4();
    let info: PointerInfo = serde_json::from_value(json!({
        "target": { "kind": "shape", "id": id },
        "point": [10.0, 20.0],
        "shift": true,
    }))
    .unwrap();
    assert_eq!(info.target, Target::Shape { id });
    assert!(info.modifiers.shift);
    assert!(!info.modifiers.ctrl);
    assert_eq!(info.pressure, 0.0);
}

// =============================================================
// Target
// =============================================================

#[test]
fn target_serde_forms() {
    let canvas: Target = serde_json::from_value(json!({ "kind": "canvas" })).unwrap();
    assert_eq!(canvas, Target::Canvas);

    let grip: Target = serde_json::from_value(json!({
        "kind": "bounds_handle",
        "handle": "bottom_right_corner",
    }))
    .unwrap();
    assert_eq!(
        grip,
        Target::BoundsHandle {
            handle: BoundsHandle::BottomRightCorner
        }
    );

    let handle: Target =
        serde_json::from_value(json!({ "kind": "handle", "id": "end" })).unwrap();
    assert_eq!(
        handle,
        Target::Handle {
            id: crate::shape::HandleId::End
        }
    );
}

// =============================================================
// Event
// =============================================================

#[test]
fn event_serde_tagging() {
    let event: Event = serde_json::from_value(json!({
        "type": "pointer_down",
        "target": { "kind": "canvas" },
        "point": [1.0, 2.0],
    }))
    .unwrap();
    let Event::PointerDown(info) = event else {
        panic!("wrong variant");
    };
    assert_eq!(info.point, Vec2::new(1.0, 2.0));
}

#[test]
fn camera_events_roundtrip() {
    let pan = Event::Pan {
        delta: Vec2::new(3.0, -4.0),
    };
    let json = serde_json::to_string(&pan).unwrap();
    assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), pan);

    let zoom = Event::Zoom {
        delta: -0.25,
        center: Vec2::new(100.0, 50.0),
    };
    let json = serde_json::to_string(&zoom).unwrap();
    assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), zoom);
}

#[test]
fn shape_change_defaults() {
    let event: Event = serde_json::from_value(json!({ "type": "shape_change" })).unwrap();
    assert_eq!(
        event,
        Event::ShapeChange {
            text: String::new(),
            reset: false,
        }
    );
}

#[test]
fn pointer_info_mut_covers_pointer_events_only() {
    let mut pointer = Event::PointerMove(PointerInfo::at(Target::Canvas, Vec2::ZERO));
    assert!(pointer.pointer_info_mut().is_some());

    let mut pan = Event::Pan { delta: Vec2::ZERO };
    assert!(pan.pointer_info_mut().is_none());

    let mut key = Event::KeyDown {
        key: Key("a".into()),
    };
    assert!(key.pointer_info_mut().is_none());
}
