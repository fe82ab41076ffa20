//! The toolbar store: active tool, default styles, and per-item visibility.
//!
//! Visibility supports restricted ("student") documents where only a subset
//! of tools is offered; admins always see everything.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use serde::{Deserialize, Serialize};

use crate::input::ToolKind;
use crate::shape::ShapeStyle;
use crate::store::{Store, SubscriberId};

/// Per-tool visibility flags for restricted documents.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolVisibility {
    #[serde(default = "yes")]
    pub select: bool,
    #[serde(default = "yes", rename = "rectangle")]
    pub rect: bool,
    #[serde(default = "yes")]
    pub line: bool,
    #[serde(default = "yes", rename = "freedraw")]
    pub free_draw: bool,
    #[serde(default = "yes")]
    pub text: bool,
    #[serde(default = "yes", rename = "measure_line")]
    pub measure_line: bool,
}

fn yes() -> bool {
    true
}

impl Default for ToolVisibility {
    fn default() -> Self {
        Self {
            select: true,
            rect: true,
            line: true,
            free_draw: true,
            text: true,
            measure_line: true,
        }
    }
}

impl ToolVisibility {
    #[must_use]
    pub fn get(&self, tool: ToolKind) -> bool {
        match tool {
            ToolKind::Select => self.select,
            ToolKind::Rect => self.rect,
            ToolKind::Line => self.line,
            ToolKind::FreeDraw => self.free_draw,
            ToolKind::Text => self.text,
            ToolKind::MeasureLine => self.measure_line,
        }
    }

    fn set(&mut self, tool: ToolKind, visible: bool) {
        match tool {
            ToolKind::Select => self.select = visible,
            ToolKind::Rect => self.rect = visible,
            ToolKind::Line => self.line = visible,
            ToolKind::FreeDraw => self.free_draw = visible,
            ToolKind::Text => self.text = visible,
            ToolKind::MeasureLine => self.measure_line = visible,
        }
    }
}

/// Which toolbar chrome a restricted document shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    #[serde(default)]
    pub tools: ToolVisibility,
    /// The style selector panel.
    #[serde(default = "yes")]
    pub styles: bool,
    /// The background-image controls.
    #[serde(default = "yes")]
    pub background: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            tools: ToolVisibility::default(),
            styles: true,
            background: true,
        }
    }
}

/// An item whose visibility the toolbar can answer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Tool(ToolKind),
    Styles,
    Background,
}

/// Toolbar state: the active tool, the style defaults new shapes inherit,
/// and visibility configuration.
#[derive(Debug, Clone)]
pub struct ToolbarData {
    pub tool: ToolKind,
    pub styles: ShapeStyle,
    pub settings: ViewSettings,
    pub is_admin: bool,
}

impl Default for ToolbarData {
    fn default() -> Self {
        Self {
            tool: ToolKind::Select,
            styles: ShapeStyle::defaults(),
            settings: ViewSettings::default(),
            is_admin: true,
        }
    }
}

/// Store owning the toolbar state.
#[derive(Debug, Default)]
pub struct Toolbar {
    store: Store<ToolbarData>,
}

impl Toolbar {
    #[must_use]
    pub fn new(settings: ViewSettings, is_admin: bool) -> Self {
        Self {
            store: Store::new(ToolbarData {
                settings,
                is_admin,
                ..ToolbarData::default()
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ToolbarData {
        self.store.state()
    }

    pub fn subscribe(&mut self, f: impl Fn(&ToolbarData) + 'static) -> SubscriberId {
        self.store.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.store.unsubscribe(id);
    }

    #[must_use]
    pub fn tool(&self) -> ToolKind {
        self.store.state().tool
    }

    #[must_use]
    pub fn styles(&self) -> &ShapeStyle {
        &self.store.state().styles
    }

    #[must_use]
    pub fn settings(&self) -> ViewSettings {
        self.store.state().settings
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.store.action(|state| state.tool = tool);
    }

    /// Patch the style defaults. A patch already contained in the current
    /// styles is a no-op and does not notify subscribers.
    pub fn set_styles(&mut self, patch: &ShapeStyle) {
        if self.store.state().styles.contains(patch) {
            return;
        }
        let patch = patch.clone();
        self.store
            .action(|state| state.styles = state.styles.merged(&patch));
    }

    pub fn set_settings(&mut self, settings: ViewSettings) {
        self.store.action(|state| state.settings = settings);
    }

    pub fn set_visibility(&mut self, item: ToolbarItem, visible: bool) {
        self.store.action(|state| match item {
            ToolbarItem::Tool(tool) => state.settings.tools.set(tool, visible),
            ToolbarItem::Styles => state.settings.styles = visible,
            ToolbarItem::Background => state.settings.background = visible,
        });
    }

    /// Whether a toolbar item is offered to the current user. Admins see
    /// everything; restricted documents consult the visibility settings.
    #[must_use]
    pub fn is_visible(&self, item: ToolbarItem) -> bool {
        let state = self.store.state();
        if state.is_admin {
            return true;
        }
        match item {
            ToolbarItem::Tool(tool) => state.settings.tools.get(tool),
            ToolbarItem::Styles => state.settings.styles,
            ToolbarItem::Background => state.settings.background,
        }
    }
}
