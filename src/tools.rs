//! Tool layer: what pointer input means when no session is active.
//!
//! Tools are stateless between uses — a tool reacts to an initial event
//! (usually pointer-down) by creating a shape and handing control to a
//! matching session. Creation tools return to the select tool when their
//! session completes; the freehand tool stays active so strokes can be
//! chained. A shared layer handles what every tool supports: deleting the
//! selected shape and driving the camera.

use crate::bounds::{BoundsCorner, BoundsHandle, BoundsLocation};
use crate::engine::Engine;
use crate::error::EngineError;
use crate::input::{Event, Target, ToolKind};
use crate::session::{
    FreeDrawSession, MoveHandleSession, RotateSession, Session, TextEditSession,
    TransformSession, TranslateSession,
};
use crate::shape::HandleId;

/// Route an event to the active tool.
pub(crate) fn handle(engine: &mut Engine, event: &Event) -> Result<(), EngineError> {
    // Shared behavior first: camera and delete work under every tool.
    match event {
        Event::KeyDown { key } if key.is_delete() => {
            delete_selected(engine);
            return Ok(());
        }
        Event::Pan { delta } => {
            engine.pan_screen(*delta);
            return Ok(());
        }
        Event::Zoom { delta, center } => {
            engine.zoom(*delta, *center);
            return Ok(());
        }
        _ => {}
    }

    match engine.tool() {
        ToolKind::Select => handle_select(engine, event),
        ToolKind::Rect => handle_rect(engine, event),
        ToolKind::Line => handle_line(engine, event),
        ToolKind::FreeDraw => handle_freedraw(engine, event),
        ToolKind::Text => handle_text(engine, event),
        ToolKind::MeasureLine => handle_measure_line(engine, event),
    }
}

fn delete_selected(engine: &mut Engine) {
    let Some(shape) = engine.get_selected_shape() else {
        return;
    };
    engine.clear_ui_state();
    engine.remove_shape(shape.id());
}

// ── Select ──────────────────────────────────────────────────────

fn handle_select(engine: &mut Engine, event: &Event) -> Result<(), EngineError> {
    match event {
        Event::PointShape(info) => {
            if let Target::Shape { id } = info.target {
                engine.set_selected(Some(id));
            }
            Ok(())
        }
        Event::PointCanvas(_) => {
            engine.set_selected(None);
            Ok(())
        }
        Event::HoverShape(info) => {
            if let Target::Shape { id } = info.target {
                engine.set_hovered(Some(id));
            }
            Ok(())
        }
        Event::UnhoverShape(_) => {
            engine.set_hovered(None);
            Ok(())
        }
        Event::DoubleClickShape(info) => {
            let Target::Shape { id } = info.target else {
                return Ok(());
            };
            let Some(shape) = engine.get_shape(id) else {
                return Ok(());
            };
            if shape.can_edit() {
                engine.set_editing(Some(id));
                let session = TextEditSession::new(engine, id)?;
                engine.start_session(Session::TextEdit(session), None)?;
            }
            Ok(())
        }
        Event::DragShape(info) => {
            let Target::Shape { id } = info.target else {
                return Ok(());
            };
            let session = TranslateSession::new(engine, id, info.point)?;
            engine.start_session(Session::Translate(session), None)
        }
        Event::DragBoundsHandle(info) => {
            let Target::BoundsHandle { handle } = info.target else {
                return Ok(());
            };
            match handle {
                BoundsHandle::Rotate => {
                    let session = RotateSession::new(engine)?;
                    engine.start_session(Session::Rotate(session), None)
                }
                _ => {
                    let Some(location) = handle.location() else {
                        return Ok(());
                    };
                    let session = TransformSession::new(engine, location, info.point)?;
                    engine.start_session(Session::Transform(session), None)
                }
            }
        }
        Event::DragHandle(info) => {
            let Target::Handle { id } = info.target else {
                return Ok(());
            };
            let session = MoveHandleSession::new(engine, id, info.point)?;
            engine.start_session(Session::MoveHandle(session), None)
        }
        _ => Ok(()),
    }
}

// ── Creation tools ──────────────────────────────────────────────

fn handle_rect(engine: &mut Engine, event: &Event) -> Result<(), EngineError> {
    let Event::PointerDown(info) = event else {
        return Ok(());
    };
    let shape = engine.create_rect(info.point);
    engine.set_selected(Some(shape.id()));
    // The initial drag sizes the shape from its bottom-right corner.
    let session = TransformSession::new(
        engine,
        BoundsLocation::Corner(BoundsCorner::BottomRight),
        info.point,
    )?;
    engine.start_session(Session::Transform(session), Some(ToolKind::Select))
}

fn handle_line(engine: &mut Engine, event: &Event) -> Result<(), EngineError> {
    let Event::PointerDown(info) = event else {
        return Ok(());
    };
    let shape = engine.create_line(info.point);
    engine.set_selected(Some(shape.id()));
    let session = MoveHandleSession::new(engine, HandleId::End, info.point)?;
    engine.start_session(Session::MoveHandle(session), Some(ToolKind::Select))
}

fn handle_measure_line(engine: &mut Engine, event: &Event) -> Result<(), EngineError> {
    let Event::PointerDown(info) = event else {
        return Ok(());
    };
    let shape = engine.create_measure_line(info.point);
    engine.set_selected(Some(shape.id()));
    let session = MoveHandleSession::new(engine, HandleId::End, info.point)?;
    engine.start_session(Session::MoveHandle(session), Some(ToolKind::Select))
}

fn handle_freedraw(engine: &mut Engine, event: &Event) -> Result<(), EngineError> {
    let Event::PointerDown(info) = event else {
        return Ok(());
    };
    let shape = engine.create_freedraw(info.point);
    let session = FreeDrawSession::new(engine, shape.id())?;
    // No tool switch on completion: strokes chain until the user picks
    // another tool.
    engine.start_session(Session::FreeDraw(session), None)
}

fn handle_text(engine: &mut Engine, event: &Event) -> Result<(), EngineError> {
    let Event::PointerDown(info) = event else {
        return Ok(());
    };
    let shape = engine.create_text(info.point);
    engine.set_editing(Some(shape.id()));
    let session = TextEditSession::new(engine, shape.id())?;
    engine.start_session(Session::TextEdit(session), Some(ToolKind::Select))
}
