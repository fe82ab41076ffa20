//! The engine facade: stores, session routing, and coordinate conversion.
//!
//! The engine owns the three stores (page, page state, toolbar), the
//! at-most-one active session, and the screen↔canvas conversion. Every
//! input event enters through [`Engine::handle_event`]: pointer payloads
//! are rewritten from screen space to canvas space exactly once at this
//! boundary, then the event goes to the active session if there is one,
//! otherwise to the active tool.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::bounds::Bounds;
use crate::document::{Document, PageDoc, PageStateDoc};
use crate::error::EngineError;
use crate::input::{Event, ToolKind};
use crate::session::Session;
use crate::shape::{
    FreeDrawShape, ImageScale, ImageShape, LineHandles, LineShape, MeasureLineShape, RatioScale,
    RectShape, Shape, ShapeId, ShapeStyle, TextShape, freedraw, image, line, measure, rect, text,
};
use crate::store::{GridSettings, Page, PageData, PageState, PageStateData, Toolbar};
use crate::text_measure::{GlyphEstimate, TextMeasurer};
use crate::tools;
use crate::vec::Vec2;

/// The interaction engine.
pub struct Engine {
    pub page: Page,
    pub page_state: PageState,
    pub toolbar: Toolbar,
    session: Option<Session>,
    /// Tool to activate when the current session completes.
    after_session: Option<ToolKind>,
    /// Current on-screen rect of the canvas element, for centering.
    renderer_bounds: Bounds,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

impl Engine {
    /// Build an engine from a document, using the deterministic text
    /// estimator.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self::with_measurer(document, Box::new(GlyphEstimate))
    }

    /// Build an engine from a document with a host-provided text measurer.
    #[must_use]
    pub fn with_measurer(document: Document, measurer: Box<dyn TextMeasurer>) -> Self {
        let mut engine = Self {
            page: Page::default(),
            page_state: PageState::default(),
            toolbar: Toolbar::default(),
            session: None,
            after_session: None,
            renderer_bounds: Bounds::new(0.0, 0.0, 100.0, 100.0),
            measurer,
        };
        engine.set_data(document);
        engine
    }

    // ── Document lifecycle ──────────────────────────────────────

    /// Replace all state from a document. Any in-flight session is
    /// discarded; selection starts clear.
    pub fn set_data(&mut self, document: Document) {
        self.session = None;
        self.after_session = None;

        let shapes: HashMap<ShapeId, Shape> = document
            .page
            .shapes
            .into_values()
            .map(|shape| (shape.id(), shape))
            .collect();
        self.page.reset(PageData {
            id: document.page.id,
            name: document.page.name,
            shapes,
        });

        let view = document.page_state.unwrap_or_default();
        self.page_state.reset(PageStateData {
            camera: view.camera,
            settings: view.settings,
            ..PageStateData::default()
        });

        if let Some(settings) = document.settings {
            self.toolbar.set_settings(settings);
        }
    }

    /// Serialize back to a plain document. Transient state (selection,
    /// caches, the active session) is dropped.
    #[must_use]
    pub fn export(&self) -> Document {
        let page = self.page.state();
        Document {
            page: PageDoc {
                id: page.id.clone(),
                name: page.name.clone(),
                shapes: page
                    .shapes
                    .values()
                    .map(|shape| (shape.id().to_string(), shape.clone()))
                    .collect(),
            },
            page_state: Some(PageStateDoc {
                camera: self.page_state.camera(),
                settings: self.page_state.settings(),
            }),
            settings: Some(self.toolbar.settings()),
        }
    }

    // ── Coordinate conversion ───────────────────────────────────

    /// Screen point to canvas point under the current camera.
    #[must_use]
    pub fn screen_to_canvas(&self, point: Vec2) -> Vec2 {
        let camera = self.page_state.camera();
        point.div(camera.zoom).sub(camera.point)
    }

    /// Canvas point to screen point under the current camera.
    #[must_use]
    pub fn canvas_to_screen(&self, point: Vec2) -> Vec2 {
        let camera = self.page_state.camera();
        point.add(camera.point).mul(camera.zoom)
    }

    /// Record the canvas element's on-screen rect, reported by the host on
    /// every layout change.
    pub fn update_renderer_bounds(&mut self, bounds: Bounds) {
        self.renderer_bounds = bounds;
    }

    /// Screen-space center of the viewport.
    #[must_use]
    pub fn center_point(&self) -> Vec2 {
        Vec2::new(
            self.renderer_bounds.width / 2.0,
            self.renderer_bounds.height / 2.0,
        )
        .to_fixed()
    }

    /// Pan by a screen-space delta.
    pub fn pan_screen(&mut self, delta: Vec2) {
        let zoom = self.page_state.camera().zoom;
        self.page_state.pan(delta.div(zoom));
    }

    /// Zoom anchored at a screen-space point.
    pub fn zoom(&mut self, delta: f64, screen_center: Vec2) {
        self.page_state.zoom(delta, screen_center);
    }

    // ── Event routing ───────────────────────────────────────────

    /// Single entry point for all input events.
    ///
    /// # Errors
    ///
    /// Propagates programmer-error faults from session capture and
    /// exclusivity guards; see [`EngineError`]. A failing session step
    /// force-completes the session before the error surfaces, so the
    /// engine is never left with a dangling half-initialized session.
    pub fn handle_event(&mut self, event: Event) -> Result<(), EngineError> {
        let mut event = event;
        if let Some(info) = event.pointer_info_mut() {
            info.point = self.screen_to_canvas(info.point);
        }

        if let Some(session) = self.session.take() {
            match session.handle(self, &event) {
                Ok(crate::session::Flow::Continue(session)) => {
                    self.session = Some(session);
                    Ok(())
                }
                Ok(crate::session::Flow::Done) => {
                    self.finish_session();
                    Ok(())
                }
                Err(e) => {
                    self.finish_session();
                    Err(e)
                }
            }
        } else {
            tools::handle(self, &event)
        }
    }

    // ── Sessions ────────────────────────────────────────────────

    /// Install a session. `after` names the tool to activate when the
    /// session completes.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::SessionInProgress`] when a session is
    /// already active; the in-flight session is left untouched.
    pub fn start_session(
        &mut self,
        session: Session,
        after: Option<ToolKind>,
    ) -> Result<(), EngineError> {
        if self.session.is_some() {
            return Err(EngineError::SessionInProgress);
        }
        tracing::debug!(session = session.kind(), "session started");
        self.session = Some(session);
        self.after_session = after;
        Ok(())
    }

    /// Whether a session is currently active.
    #[must_use]
    pub fn session_active(&self) -> bool {
        self.session.is_some()
    }

    fn finish_session(&mut self) {
        if let Some(tool) = self.after_session.take() {
            self.set_tool(tool);
        }
    }

    // ── Tools ───────────────────────────────────────────────────

    #[must_use]
    pub fn tool(&self) -> ToolKind {
        self.toolbar.tool()
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.toolbar.set_tool(tool);
    }

    // ── Shape reads ─────────────────────────────────────────────

    /// A copy of the shape under `id`, if any.
    #[must_use]
    pub fn get_shape(&self, id: ShapeId) -> Option<Shape> {
        self.page.get_shape(id).cloned()
    }

    /// A copy of the selected shape, if any.
    #[must_use]
    pub fn get_selected_shape(&self) -> Option<Shape> {
        self.page_state
            .selected_id()
            .and_then(|id| self.get_shape(id))
    }

    /// Bounds of a shape through the engine's text measurer.
    #[must_use]
    pub fn shape_bounds(&self, shape: &Shape) -> Bounds {
        shape.bounds(self.measurer.as_ref())
    }

    #[must_use]
    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    // ── Shape writes ────────────────────────────────────────────

    pub fn update_shape(&mut self, shape: Shape) {
        self.page.update_shape(shape);
    }

    pub fn remove_shape(&mut self, id: ShapeId) {
        self.page.remove_shape(id);
    }

    // ── UI state ────────────────────────────────────────────────

    /// Select a shape (or clear with `None`) and refresh the toolbar's
    /// style defaults from it. The two stores notify sequentially.
    pub fn set_selected(&mut self, id: Option<ShapeId>) {
        self.page_state.set_selected(id);
        if let Some(shape) = self.get_selected_shape() {
            let styles = shape.styles().clone();
            self.toolbar.set_styles(&styles);
        }
    }

    pub fn set_hovered(&mut self, id: Option<ShapeId>) {
        self.page_state.set_hovered(id);
    }

    pub fn set_editing(&mut self, id: Option<ShapeId>) {
        self.page_state.set_editing(id);
    }

    /// Clear selection, hover, and editing together.
    pub fn clear_ui_state(&mut self) {
        self.set_selected(None);
        self.set_hovered(None);
        self.set_editing(None);
    }

    #[must_use]
    pub fn get_settings(&self) -> GridSettings {
        self.page_state.settings()
    }

    pub fn set_settings(&mut self, settings: GridSettings) {
        self.page_state.set_settings(settings);
    }

    /// The active snapping step: the grid size, or 1 while the grid is
    /// hidden.
    #[must_use]
    pub fn grid_factor(&self) -> f64 {
        self.page_state.grid_factor()
    }

    // ── Styles ──────────────────────────────────────────────────

    /// Patch the toolbar style defaults.
    pub fn set_styles(&mut self, patch: &ShapeStyle) {
        self.toolbar.set_styles(patch);
    }

    /// Style change from the style selector: update the defaults and
    /// restyle the selected shape with them.
    pub fn handle_styles_change(&mut self, patch: &ShapeStyle) {
        self.toolbar.set_styles(patch);
        if let Some(shape) = self.get_selected_shape() {
            let styles = self.toolbar.styles().clone();
            self.update_shape(shape.with_styles(&styles));
        }
    }

    // ── Shape creation ──────────────────────────────────────────

    fn next_common(&self) -> (ShapeId, f64) {
        (Uuid::new_v4(), self.page.next_child_index())
    }

    /// A zero-size rectangle at `point`; the creation drag defines its
    /// size.
    pub fn create_rect(&mut self, point: Vec2) -> Shape {
        let (id, child_index) = self.next_common();
        let shape = Shape::Rect(RectShape {
            id,
            child_index,
            point,
            rotation: 0.0,
            styles: self.toolbar.styles().filtered(rect::STYLE_KEYS),
            size: Vec2::ZERO,
        });
        self.page.add_shape(shape.clone());
        shape
    }

    pub fn create_line(&mut self, point: Vec2) -> Shape {
        let (id, child_index) = self.next_common();
        let shape = Shape::Line(LineShape {
            id,
            child_index,
            point,
            rotation: 0.0,
            styles: self.toolbar.styles().filtered(line::STYLE_KEYS),
            handles: LineHandles::default(),
        });
        self.page.add_shape(shape.clone());
        shape
    }

    pub fn create_measure_line(&mut self, point: Vec2) -> Shape {
        let (id, child_index) = self.next_common();
        let shape = Shape::MeasureLine(MeasureLineShape {
            id,
            child_index,
            point,
            rotation: 0.0,
            styles: self.toolbar.styles().filtered(measure::STYLE_KEYS),
            handles: LineHandles::default(),
        });
        self.page.add_shape(shape.clone());
        shape
    }

    pub fn create_freedraw(&mut self, point: Vec2) -> Shape {
        let (id, child_index) = self.next_common();
        let shape = Shape::FreeDraw(FreeDrawShape {
            id,
            child_index,
            point: point.to_fixed(),
            rotation: 0.0,
            styles: self.toolbar.styles().filtered(freedraw::STYLE_KEYS),
            points: vec![Vec2::ZERO],
            cache: freedraw::BoundsCache::default(),
        });
        self.page.add_shape(shape.clone());
        shape
    }

    pub fn create_text(&mut self, point: Vec2) -> Shape {
        let (id, child_index) = self.next_common();
        let shape = Shape::Text(TextShape {
            id,
            child_index,
            point,
            rotation: 0.0,
            styles: self.toolbar.styles().filtered(text::STYLE_KEYS),
            text: String::new(),
            scale: 1.0,
        });
        self.page.add_shape(shape.clone());
        shape
    }

    // ── Images ──────────────────────────────────────────────────

    /// Place an image centered in the viewport. The host resolves the
    /// source (data URL) and probes the dimensions before calling; invalid
    /// input is logged and dropped rather than corrupting the page.
    pub fn add_image(&mut self, src: &str, size: Vec2) -> Option<ShapeId> {
        if !Self::image_input_ok(src, size) {
            return None;
        }
        let center = self.screen_to_canvas(self.center_point());
        let point = center.sub(size.div(2.0)).to_fixed();
        let (id, child_index) = self.next_common();
        self.page.add_shape(Shape::Image(ImageShape {
            id,
            child_index,
            point,
            rotation: 0.0,
            styles: self.toolbar.styles().filtered(image::STYLE_KEYS),
            size,
            src: src.to_string(),
            is_background: false,
            scale: None,
        }));
        Some(id)
    }

    /// Install a background image below everything on the page, replacing
    /// any previous background. Optionally calibrated for the measure tool.
    pub fn set_background_image(
        &mut self,
        src: &str,
        size: Vec2,
        calibration: Option<ImageScale>,
    ) -> Option<ShapeId> {
        if !Self::image_input_ok(src, size) {
            return None;
        }
        if let Some(previous) = self.background_image() {
            self.page.remove_shape(previous.id);
        }
        let child_index = self.page.min_child_index() - 1.0;
        let id = Uuid::new_v4();
        self.page.add_shape(Shape::Image(ImageShape {
            id,
            child_index,
            point: Vec2::ZERO,
            rotation: 0.0,
            styles: ShapeStyle::default(),
            size,
            src: src.to_string(),
            is_background: true,
            scale: calibration,
        }));
        Some(id)
    }

    fn image_input_ok(src: &str, size: Vec2) -> bool {
        if src.is_empty() || size.x <= 0.0 || size.y <= 0.0 {
            tracing::warn!(
                width = size.x,
                height = size.y,
                has_src = !src.is_empty(),
                "discarding image with missing source or degenerate size"
            );
            return false;
        }
        true
    }

    fn background_image(&self) -> Option<ImageShape> {
        self.page
            .find(|shape| matches!(shape, Shape::Image(i) if i.is_background))
            .and_then(|shape| match shape {
                Shape::Image(i) => Some(i.clone()),
                _ => None,
            })
    }

    /// The real-world measurement scale: derived from a calibrated
    /// background image, identity (1 px per canvas unit) otherwise.
    #[must_use]
    pub fn get_scale(&self) -> RatioScale {
        self.background_image()
            .map_or(RatioScale::IDENTITY, |image| image.ratio_scale())
    }
}
