//! The page-state store: camera, selection, hover, editing, grid settings.
//!
//! Everything here is transient view state — it never carries shape data,
//! and selection does not survive document hydration.

#[cfg(test)]
#[path = "page_state_test.rs"]
mod page_state_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID, ZOOM_MAX, ZOOM_MIN};
use crate::shape::ShapeId;
use crate::store::{Store, SubscriberId};
use crate::vec::{Vec2, clamp};

/// Pan/zoom camera over the infinite canvas.
///
/// `point` is the camera offset in canvas units; converting a screen point
/// to canvas space is `screen / zoom − point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub point: Vec2,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            point: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

/// Grid snapping policy. `grid` is the cell size; a hidden grid snaps
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSettings {
    pub hide_grid: bool,
    pub grid: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            hide_grid: true,
            grid: DEFAULT_GRID,
        }
    }
}

/// Transient view state for the page.
#[derive(Debug, Clone, Default)]
pub struct PageStateData {
    pub camera: Camera,
    pub selected_id: Option<ShapeId>,
    pub hovered_id: Option<ShapeId>,
    pub editing_id: Option<ShapeId>,
    pub settings: GridSettings,
}

/// Store owning the transient view state. At most one shape is selected,
/// hovered, or edited at a time; the setters are independent — setting one
/// does not clear the others.
#[derive(Debug, Default)]
pub struct PageState {
    store: Store<PageStateData>,
}

impl PageState {
    #[must_use]
    pub fn new(data: PageStateData) -> Self {
        Self {
            store: Store::new(data),
        }
    }

    #[must_use]
    pub fn state(&self) -> &PageStateData {
        self.store.state()
    }

    pub fn subscribe(&mut self, f: impl Fn(&PageStateData) + 'static) -> SubscriberId {
        self.store.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.store.unsubscribe(id);
    }

    /// Replace the whole view state (hydration).
    pub fn reset(&mut self, data: PageStateData) {
        self.store.action(|state| *state = data);
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.store.state().camera
    }

    #[must_use]
    pub fn settings(&self) -> GridSettings {
        self.store.state().settings
    }

    /// The snapping step for the current grid policy: the grid size, or 1
    /// (snap nothing) while the grid is hidden.
    #[must_use]
    pub fn grid_factor(&self) -> f64 {
        let settings = self.store.state().settings;
        if settings.hide_grid {
            1.0
        } else {
            settings.grid
        }
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.store.state().selected_id
    }

    #[must_use]
    pub fn hovered_id(&self) -> Option<ShapeId> {
        self.store.state().hovered_id
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<ShapeId> {
        self.store.state().editing_id
    }

    pub fn set_selected(&mut self, id: Option<ShapeId>) {
        self.store.action(|state| state.selected_id = id);
    }

    pub fn set_hovered(&mut self, id: Option<ShapeId>) {
        self.store.action(|state| state.hovered_id = id);
    }

    pub fn set_editing(&mut self, id: Option<ShapeId>) {
        self.store.action(|state| state.editing_id = id);
    }

    pub fn set_settings(&mut self, settings: GridSettings) {
        self.store.action(|state| state.settings = settings);
    }

    /// Pan the camera by a canvas-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.store.action(|state| {
            state.camera.point = state.camera.point.add(delta);
        });
    }

    /// Zoom anchored at `center` (screen space): the canvas point under the
    /// cursor stays under the cursor. Positive `delta` zooms out.
    pub fn zoom(&mut self, delta: f64, center: Vec2) {
        self.store.action(|state| {
            let Camera { point, zoom } = state.camera;
            let new_zoom = clamp(zoom - delta * zoom, ZOOM_MIN, ZOOM_MAX);
            let p0 = center.div(zoom).sub(point);
            let p1 = center.div(new_zoom).sub(point);
            state.camera = Camera {
                point: point.add(p1.sub(p0)),
                zoom: new_zoom,
            };
        });
    }
}
