//! wasm-bindgen boundary for the browser host.
//!
//! This is the only module that touches the DOM. The host wires DOM events
//! into [`Board::dispatch`] as JSON event payloads (it owns hit-testing, so
//! events arrive pre-targeted), reads render snapshots back out, and
//! persists exported documents. Everything crosses the boundary as JSON
//! strings to keep the surface small and serde-checked.
//!
//! Text measurement uses a hidden `<pre>` element styled like the rendered
//! labels; outside a browser (native tests, SSR) it falls back to the
//! deterministic estimator.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::bounds::Bounds;
use crate::document::Document;
use crate::engine::Engine;
use crate::input::{Event, ToolKind};
use crate::shape::{Shape, ShapeStyle};
use crate::store::{Camera, GridSettings};
use crate::text_measure::{GlyphEstimate, TextMeasurer};
use crate::vec::Vec2;

/// What the host renderer needs to paint one frame.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneSnapshot {
    /// Shapes in draw order (bottom first).
    shapes: Vec<Shape>,
    camera: Camera,
    settings: GridSettings,
    selected_id: Option<String>,
    hovered_id: Option<String>,
    editing_id: Option<String>,
}

/// The drawing surface as exposed to JavaScript.
#[wasm_bindgen]
pub struct Board {
    engine: Engine,
}

#[wasm_bindgen]
impl Board {
    /// Build a board from a document JSON string (`"{}"` for an empty
    /// board).
    ///
    /// # Errors
    ///
    /// Rejects malformed documents and unknown shape types.
    #[wasm_bindgen(constructor)]
    pub fn new(document_json: &str) -> Result<Board, JsError> {
        let document = Document::from_json(document_json)?;
        Ok(Self {
            engine: Engine::with_measurer(document, Box::new(DomTextMeasurer::new())),
        })
    }

    /// Replace all state from a document JSON string.
    pub fn set_data(&mut self, document_json: &str) -> Result<(), JsError> {
        let document = Document::from_json(document_json)?;
        self.engine.set_data(document);
        Ok(())
    }

    /// Serialize the current document.
    pub fn export(&self) -> Result<String, JsError> {
        Ok(self.engine.export().to_json()?)
    }

    /// Route one input event, passed as an event JSON payload.
    pub fn dispatch(&mut self, event_json: &str) -> Result<(), JsError> {
        let event: Event = serde_json::from_str(event_json)?;
        self.engine.handle_event(event)?;
        Ok(())
    }

    /// Record the canvas element's client rect, for viewport-centered
    /// placement.
    pub fn set_viewport(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        self.engine
            .update_renderer_bounds(Bounds::new(min_x, min_y, max_x, max_y));
    }

    /// Switch the active tool by wire name (e.g. `"rectangle"`).
    pub fn set_tool(&mut self, name: &str) -> Result<(), JsError> {
        let Some(tool) = ToolKind::from_name(name) else {
            return Err(JsError::new("unknown tool name"));
        };
        self.engine.set_tool(tool);
        Ok(())
    }

    /// The active tool's wire name.
    #[wasm_bindgen(getter)]
    pub fn tool(&self) -> String {
        self.engine.tool().name().to_string()
    }

    /// Patch the style defaults (and the selected shape) from a style JSON
    /// payload.
    pub fn set_styles(&mut self, styles_json: &str) -> Result<(), JsError> {
        let patch: ShapeStyle = serde_json::from_str(styles_json)?;
        self.engine.handle_styles_change(&patch);
        Ok(())
    }

    /// Id of the selected shape, if any.
    #[wasm_bindgen(getter)]
    pub fn selected_id(&self) -> Option<String> {
        self.engine.page_state.selected_id().map(|id| id.to_string())
    }

    /// Everything the renderer needs for one frame, as JSON.
    pub fn scene(&self) -> Result<String, JsError> {
        let state = self.engine.page_state.state();
        let snapshot = SceneSnapshot {
            shapes: self
                .engine
                .page
                .sorted_shapes()
                .into_iter()
                .cloned()
                .collect(),
            camera: state.camera,
            settings: state.settings,
            selected_id: state.selected_id.map(|id| id.to_string()),
            hovered_id: state.hovered_id.map(|id| id.to_string()),
            editing_id: state.editing_id.map(|id| id.to_string()),
        };
        Ok(serde_json::to_string(&snapshot).map_err(crate::error::EngineError::Document)?)
    }

    /// The measurement scale label source (ratio and unit), as JSON.
    pub fn measurement_scale(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.engine.get_scale())
            .map_err(crate::error::EngineError::Document)?)
    }

    /// Place an image resolved by the host (data URL plus probed pixel
    /// dimensions). Returns the new shape id, or `undefined` when the
    /// input was unusable.
    pub fn add_image(&mut self, src: &str, width: f64, height: f64) -> Option<String> {
        self.engine
            .add_image(src, Vec2::new(width, height))
            .map(|id| id.to_string())
    }

    /// Install or replace the calibrated background image.
    pub fn set_background_image(
        &mut self,
        src: &str,
        width: f64,
        height: f64,
        calibration_json: &str,
    ) -> Result<Option<String>, JsError> {
        let calibration = if calibration_json.is_empty() {
            None
        } else {
            Some(serde_json::from_str(calibration_json)?)
        };
        Ok(self
            .engine
            .set_background_image(src, Vec2::new(width, height), calibration)
            .map(|id| id.to_string()))
    }
}

// ── DOM text measurement ────────────────────────────────────────

const MEASURE_NODE_ID: &str = "__board_text_measure";

const MEASURE_NODE_STYLE: &str = "white-space: pre; width: auto; padding: 4px; margin: 0; \
     opacity: 0; position: absolute; top: -500px; left: 0; pointer-events: none; \
     user-select: none;";

/// Measures text with a hidden `<pre>` styled like rendered labels.
/// Outside a browser it degrades to the glyph estimator.
pub struct DomTextMeasurer;

impl DomTextMeasurer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn measure_in_dom(text: &str, font_px: f64) -> Option<Vec2> {
        let document = web_sys::window()?.document()?;

        let element = match document.get_element_by_id(MEASURE_NODE_ID) {
            Some(el) => el,
            None => {
                let Ok(el) = document.create_element("pre") else {
                    return None;
                };
                el.set_id(MEASURE_NODE_ID);
                if el.set_attribute("style", MEASURE_NODE_STYLE).is_err() {
                    return None;
                }
                let body = document.body()?;
                if body.append_child(&el).is_err() {
                    return None;
                }
                el
            }
        };

        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return None;
        };
        let font = format!("{font_px}px/1 \"Source Sans Pro\", sans-serif");
        if element.style().set_property("font", &font).is_err() {
            return None;
        }
        element.set_text_content(Some(if text.is_empty() { "\u{200b}" } else { text }));

        // Zero extents mean the node isn't laid out (headless); report that
        // as unusable rather than a degenerate box.
        let width = f64::from(element.offset_width());
        let height = f64::from(element.offset_height());
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Vec2::new(width, height))
    }
}

impl Default for DomTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for DomTextMeasurer {
    fn measure(&self, text: &str, font_px: f64) -> Vec2 {
        match Self::measure_in_dom(text, font_px) {
            Some(size) => size,
            None => GlyphEstimate.measure(text, font_px),
        }
    }
}
