//! Input model: tools, modifier keys, pointer payloads, and the closed set
//! of events routed through the engine.
//!
//! The host layer owns hit-testing (it knows which DOM node the pointer is
//! over), so events arrive already aimed at a semantic [`Target`]. Points
//! in pointer payloads arrive in screen space and are rewritten to canvas
//! space exactly once, at the engine's routing boundary — tools and
//! sessions never see screen coordinates.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::bounds::BoundsHandle;
use crate::shape::{HandleId, ShapeId};
use crate::vec::Vec2;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    /// Pointer / selection tool (default).
    #[default]
    #[serde(rename = "select")]
    Select,
    /// Draw a rectangle.
    #[serde(rename = "rectangle")]
    Rect,
    /// Draw a straight line.
    #[serde(rename = "line")]
    Line,
    /// Draw a freehand stroke.
    #[serde(rename = "freedraw")]
    FreeDraw,
    /// Create a text label.
    #[serde(rename = "text")]
    Text,
    /// Draw a measuring line.
    #[serde(rename = "measure_line")]
    MeasureLine,
}

impl ToolKind {
    /// Parse the wire name used by the host layer.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "select" => Some(Self::Select),
            "rectangle" => Some(Self::Rect),
            "line" => Some(Self::Line),
            "freedraw" => Some(Self::FreeDraw),
            "text" => Some(Self::Text),
            "measure_line" => Some(Self::MeasureLine),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Rect => "rectangle",
            Self::Line => "line",
            Self::FreeDraw => "freedraw",
            Self::Text => "text",
            Self::MeasureLine => "measure_line",
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    #[serde(default)]
    pub shift: bool,
    /// Ctrl key is held.
    #[serde(default)]
    pub ctrl: bool,
    /// Alt / Option key is held.
    #[serde(default)]
    pub alt: bool,
    /// Meta / Command key is held.
    #[serde(default)]
    pub meta: bool,
}

/// A keyboard key, named as the browser reports it (e.g. `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

impl Key {
    /// Whether this key deletes the selected shape.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete" || self.0 == "Backspace"
    }
}

/// What a pointer event is aimed at, as hit-tested by the host layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// Empty canvas.
    Canvas,
    /// A shape body.
    Shape { id: ShapeId },
    /// A resize or rotate grip on the selection bounds.
    BoundsHandle { handle: BoundsHandle },
    /// An endpoint handle of a line-family shape.
    Handle { id: HandleId },
}

/// Normalized pointer event payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerInfo {
    pub target: Target,
    #[serde(default)]
    pub pointer_id: i32,
    /// Pointer position. Screen space at the host boundary, canvas space
    /// everywhere past the engine's routing layer.
    pub point: Vec2,
    /// Raw screen-space movement since the previous event.
    #[serde(default)]
    pub delta: Vec2,
    #[serde(default)]
    pub pressure: f64,
    #[serde(flatten)]
    pub modifiers: Modifiers,
}

impl PointerInfo {
    /// Minimal payload for a target and point; the rest defaults.
    #[must_use]
    pub fn at(target: Target, point: Vec2) -> Self {
        Self {
            target,
            pointer_id: 0,
            point,
            delta: Vec2::ZERO,
            pressure: 0.0,
            modifiers: Modifiers::default(),
        }
    }

    /// Same payload with the shift modifier held.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// Every event the engine routes. The set is closed: the active session
/// sees the event first and ignores what it doesn't handle; otherwise the
/// active tool decides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    // Raw pointer stream.
    PointerDown(PointerInfo),
    PointerMove(PointerInfo),
    PointerUp(PointerInfo),

    // Canvas background.
    PointCanvas(PointerInfo),
    DragCanvas(PointerInfo),
    ReleaseCanvas(PointerInfo),

    // Shape bodies.
    PointShape(PointerInfo),
    DoubleClickShape(PointerInfo),
    DragShape(PointerInfo),
    ReleaseShape(PointerInfo),
    HoverShape(PointerInfo),
    UnhoverShape(PointerInfo),

    // Selection bounds grips.
    DragBoundsHandle(PointerInfo),
    ReleaseBoundsHandle(PointerInfo),

    // Line endpoint handles.
    DragHandle(PointerInfo),
    ReleaseHandle(PointerInfo),

    // Camera.
    Pan { delta: Vec2 },
    Zoom { delta: f64, center: Vec2 },

    // Keyboard.
    KeyDown { key: Key },

    // Inline text editor relays.
    ShapeChange {
        #[serde(default)]
        text: String,
        #[serde(default)]
        reset: bool,
    },
    ShapeBlur,
}

impl Event {
    /// Mutable access to the pointer payload, for the one-time
    /// screen-to-canvas rewrite at the routing boundary. Camera events keep
    /// their screen-space fields.
    pub(crate) fn pointer_info_mut(&mut self) -> Option<&mut PointerInfo> {
        match self {
            Self::PointerDown(info)
            | Self::PointerMove(info)
            | Self::PointerUp(info)
            | Self::PointCanvas(info)
            | Self::DragCanvas(info)
            | Self::ReleaseCanvas(info)
            | Self::PointShape(info)
            | Self::DoubleClickShape(info)
            | Self::DragShape(info)
            | Self::ReleaseShape(info)
            | Self::HoverShape(info)
            | Self::UnhoverShape(info)
            | Self::DragBoundsHandle(info)
            | Self::ReleaseBoundsHandle(info)
            | Self::DragHandle(info)
            | Self::ReleaseHandle(info) => Some(info),
            Self::Pan { .. }
            | Self::Zoom { .. }
            | Self::KeyDown { .. }
            | Self::ShapeChange { .. }
            | Self::ShapeBlur => None,
        }
    }
}
