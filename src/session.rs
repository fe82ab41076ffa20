//! Drag sessions: bounded, stateful interaction sequences.
//!
//! A session captures its target at construction, receives the event
//! stream while it is alive, and completes exactly once on its completion
//! event. At most one session exists engine-wide; while one is active it
//! sees every routed event and ignores the ones it doesn't handle — which
//! also makes camera events inert mid-drag.
//!
//! Sessions own an id and locally captured scratch state (drag origin,
//! shape snapshot), never a second live copy of the shape: every mutation
//! is written back through the page store. Resize and handle drags
//! recompute from the captured snapshot plus the *total* delta since drag
//! start, so they are exact regardless of how the pointer stream is
//! chunked. Grid policy is read fresh on every step — toggling the grid
//! mid-drag changes the rest of that drag.

use crate::bounds::BoundsLocation;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::input::Event;
use crate::shape::{HandleId, Shape, ShapeId};
use crate::vec::Vec2;

/// What a session step decided: keep going, or tear the session down.
#[derive(Debug)]
pub(crate) enum Flow {
    Continue(Session),
    Done,
}

/// The closed set of drag sessions.
#[derive(Debug)]
pub enum Session {
    Translate(TranslateSession),
    Transform(TransformSession),
    Rotate(RotateSession),
    MoveHandle(MoveHandleSession),
    FreeDraw(FreeDrawSession),
    TextEdit(TextEditSession),
}

impl Session {
    /// Short variant name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Translate(_) => "translate",
            Self::Transform(_) => "transform",
            Self::Rotate(_) => "rotate",
            Self::MoveHandle(_) => "move_handle",
            Self::FreeDraw(_) => "freedraw",
            Self::TextEdit(_) => "text_edit",
        }
    }

    /// Feed one event to the session. Consumes the session and returns the
    /// continuation; events a session does not handle fall through and the
    /// session survives unchanged.
    pub(crate) fn handle(self, engine: &mut Engine, event: &Event) -> Result<Flow, EngineError> {
        match self {
            Self::Translate(s) => s.handle(engine, event),
            Self::Transform(s) => s.handle(engine, event),
            Self::Rotate(s) => s.handle(engine, event),
            Self::MoveHandle(s) => s.handle(engine, event),
            Self::FreeDraw(s) => s.handle(engine, event),
            Self::TextEdit(s) => s.handle(engine, event),
        }
    }
}

// ── Translate ───────────────────────────────────────────────────

/// Drags a shape body across the canvas.
#[derive(Debug)]
pub struct TranslateSession {
    shape_id: ShapeId,
    /// Pointer-to-shape-origin offset captured at drag start, so the shape
    /// doesn't jump to put its corner under the cursor.
    grab_offset: Vec2,
}

impl TranslateSession {
    pub(crate) fn new(engine: &Engine, id: ShapeId, point: Vec2) -> Result<Self, EngineError> {
        let shape = engine.get_shape(id).ok_or(EngineError::NoActiveShape)?;
        Ok(Self {
            shape_id: id,
            grab_offset: point.sub(shape.point()),
        })
    }

    fn handle(self, engine: &mut Engine, event: &Event) -> Result<Flow, EngineError> {
        match event {
            Event::DragShape(info) => {
                let grid = engine.grid_factor();
                if let Some(shape) = engine.get_shape(self.shape_id) {
                    let target = info.point.sub(self.grab_offset);
                    engine.update_shape(shape.translated(target, grid));
                }
                Ok(Flow::Continue(Session::Translate(self)))
            }
            Event::ReleaseShape(_) => Ok(Flow::Done),
            _ => Ok(Flow::Continue(Session::Translate(self))),
        }
    }
}

// ── Transform ───────────────────────────────────────────────────

/// Resizes a shape by one of its bounds grips.
#[derive(Debug)]
pub struct TransformSession {
    /// Snapshot captured at drag start; every step recomputes from it.
    shape: Shape,
    target: BoundsLocation,
    origin: Vec2,
}

impl TransformSession {
    pub(crate) fn new(
        engine: &Engine,
        target: BoundsLocation,
        point: Vec2,
    ) -> Result<Self, EngineError> {
        let shape = engine.get_selected_shape().ok_or(EngineError::NoActiveShape)?;
        if !shape.is_transformable() {
            return Err(EngineError::NotTransformable);
        }
        Ok(Self {
            shape,
            target,
            origin: point,
        })
    }

    fn handle(self, engine: &mut Engine, event: &Event) -> Result<Flow, EngineError> {
        match event {
            Event::PointerMove(info) => {
                let grid = engine.grid_factor();
                let delta = info.point.sub(self.origin);
                let bounds = engine.shape_bounds(&self.shape);

                let resized = bounds.transformed(
                    self.target,
                    delta,
                    self.shape.rotation(),
                    info.modifiers.shift || self.shape.is_aspect_ratio_locked(),
                );
                let resized = if grid == 1.0 {
                    resized
                } else {
                    resized.snapped_to_grid(grid)
                };

                engine.update_shape(self.shape.transformed(&resized));
                Ok(Flow::Continue(Session::Transform(self)))
            }
            Event::PointerUp(_) => Ok(Flow::Done),
            _ => Ok(Flow::Continue(Session::Transform(self))),
        }
    }
}

// ── Rotate ──────────────────────────────────────────────────────

/// Spins a shape around its bounds center toward the pointer.
#[derive(Debug)]
pub struct RotateSession {
    shape_id: ShapeId,
}

impl RotateSession {
    pub(crate) fn new(engine: &Engine) -> Result<Self, EngineError> {
        let shape = engine.get_selected_shape().ok_or(EngineError::NoActiveShape)?;
        Ok(Self {
            shape_id: shape.id(),
        })
    }

    fn handle(self, engine: &mut Engine, event: &Event) -> Result<Flow, EngineError> {
        match event {
            Event::DragBoundsHandle(info) => {
                // The shape can vanish mid-drag (external delete); the
                // session just winds down.
                let Some(shape) = engine.get_shape(self.shape_id) else {
                    return Ok(Flow::Done);
                };
                let rotated = shape.rotated(info.point, info.modifiers.shift, engine.measurer());
                engine.update_shape(rotated);
                Ok(Flow::Continue(Session::Rotate(self)))
            }
            Event::ReleaseBoundsHandle(_) => Ok(Flow::Done),
            _ => Ok(Flow::Continue(Session::Rotate(self))),
        }
    }
}

// ── Move handle ─────────────────────────────────────────────────

/// Drags one endpoint handle of a line-family shape.
#[derive(Debug)]
pub struct MoveHandleSession {
    /// Snapshot captured at drag start; every step recomputes from it.
    shape: Shape,
    target: HandleId,
    origin: Vec2,
}

impl MoveHandleSession {
    pub(crate) fn new(engine: &Engine, target: HandleId, point: Vec2) -> Result<Self, EngineError> {
        let shape = engine.get_selected_shape().ok_or(EngineError::NoActiveShape)?;
        if shape.handle(target).is_none() {
            return Err(EngineError::UnknownHandle);
        }
        Ok(Self {
            shape,
            target,
            origin: point,
        })
    }

    fn handle(self, engine: &mut Engine, event: &Event) -> Result<Flow, EngineError> {
        match event {
            Event::PointerMove(info) => {
                let grid = engine.grid_factor();
                let delta = info.point.sub(self.origin);
                let moved = self
                    .shape
                    .moved_handle(self.target, delta, info.modifiers.shift, grid)
                    .ok_or(EngineError::UnknownHandle)?;
                engine.update_shape(moved);
                Ok(Flow::Continue(Session::MoveHandle(self)))
            }
            Event::PointerUp(_) => Ok(Flow::Done),
            _ => Ok(Flow::Continue(Session::MoveHandle(self))),
        }
    }
}

// ── Freehand draw ───────────────────────────────────────────────

/// Accumulates pointer positions into a freehand stroke.
#[derive(Debug)]
pub struct FreeDrawSession {
    shape_id: ShapeId,
}

impl FreeDrawSession {
    pub(crate) fn new(engine: &Engine, id: ShapeId) -> Result<Self, EngineError> {
        engine.get_shape(id).ok_or(EngineError::NoActiveShape)?;
        Ok(Self { shape_id: id })
    }

    fn handle(self, engine: &mut Engine, event: &Event) -> Result<Flow, EngineError> {
        match event {
            Event::PointerMove(info) => {
                // The stroke accumulates, so each step reads the current
                // value rather than a start-of-drag snapshot.
                if let Some(Shape::FreeDraw(stroke)) = engine.get_shape(self.shape_id) {
                    engine.update_shape(Shape::FreeDraw(stroke.with_point(info.point)));
                }
                Ok(Flow::Continue(Session::FreeDraw(self)))
            }
            Event::PointerUp(_) => Ok(Flow::Done),
            _ => Ok(Flow::Continue(Session::FreeDraw(self))),
        }
    }
}

// ── Text editing ────────────────────────────────────────────────

/// Relays the host's inline text editor into a text shape, with
/// revert-on-reset and delete-on-empty semantics.
#[derive(Debug)]
pub struct TextEditSession {
    shape_id: ShapeId,
    /// Text at session start, restored when the editor resets.
    initial_text: String,
}

impl TextEditSession {
    pub(crate) fn new(engine: &Engine, id: ShapeId) -> Result<Self, EngineError> {
        match engine.get_shape(id) {
            Some(Shape::Text(text)) => Ok(Self {
                shape_id: id,
                initial_text: text.text,
            }),
            _ => Err(EngineError::NoActiveShape),
        }
    }

    fn handle(self, engine: &mut Engine, event: &Event) -> Result<Flow, EngineError> {
        match event {
            // Pointer-down anywhere ends the edit.
            Event::PointerDown(_) => {
                self.blur(engine);
                Ok(Flow::Done)
            }
            Event::ShapeChange { reset: true, .. } => {
                if let Some(Shape::Text(text)) = engine.get_shape(self.shape_id) {
                    engine.update_shape(Shape::Text(text.with_text(self.initial_text.clone())));
                }
                self.blur(engine);
                Ok(Flow::Done)
            }
            Event::ShapeChange { text, reset: false } => {
                if let Some(Shape::Text(shape)) = engine.get_shape(self.shape_id) {
                    engine.update_shape(Shape::Text(shape.with_text(text.clone())));
                }
                Ok(Flow::Continue(Session::TextEdit(self)))
            }
            Event::ShapeBlur => {
                self.blur(engine);
                Ok(Flow::Done)
            }
            _ => Ok(Flow::Continue(Session::TextEdit(self))),
        }
    }

    /// End the edit: clear selection/hover/editing, and delete the shape
    /// if the text came out empty.
    fn blur(&self, engine: &mut Engine) {
        engine.clear_ui_state();
        if let Some(Shape::Text(text)) = engine.get_shape(self.shape_id) {
            if text.text.is_empty() {
                engine.remove_shape(self.shape_id);
            }
        }
    }
}
