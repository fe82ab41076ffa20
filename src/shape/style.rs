//! Shape styling: the shared style record and per-variant key filtering.
//!
//! Every shape carries a partial [`ShapeStyle`]; which keys a variant
//! honors is declared next to the variant and enforced whenever a style
//! patch is applied, so a rectangle never ends up with a text-only key and
//! the toolbar defaults can be handed to any shape unfiltered.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

/// Stroke weight presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeSize {
    S,
    M,
    L,
}

impl StrokeSize {
    /// Stroke width in canvas units.
    #[must_use]
    pub fn width(self) -> f64 {
        match self {
            Self::S => 2.0,
            Self::M => 3.5,
            Self::L => 5.0,
        }
    }
}

/// A partial style record. Absent keys fall back to the renderer's
/// defaults; shapes only store the keys they honor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<StrokeSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// Keys of [`ShapeStyle`], used by per-variant filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKey {
    Color,
    Fill,
    Size,
    Scale,
}

impl ShapeStyle {
    /// Toolbar defaults for a fresh document.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            color: Some("#1F1A17".to_string()),
            fill: Some("transparent".to_string()),
            size: Some(StrokeSize::M),
            scale: Some(1.0),
        }
    }

    /// Keep only the listed keys, dropping the rest.
    #[must_use]
    pub fn filtered(&self, keys: &[StyleKey]) -> Self {
        Self {
            color: keys.contains(&StyleKey::Color).then(|| self.color.clone()).flatten(),
            fill: keys.contains(&StyleKey::Fill).then(|| self.fill.clone()).flatten(),
            size: keys.contains(&StyleKey::Size).then_some(self.size).flatten(),
            scale: keys.contains(&StyleKey::Scale).then_some(self.scale).flatten(),
        }
    }

    /// A copy of `self` with every present key of `patch` applied.
    #[must_use]
    pub fn merged(&self, patch: &Self) -> Self {
        Self {
            color: patch.color.clone().or_else(|| self.color.clone()),
            fill: patch.fill.clone().or_else(|| self.fill.clone()),
            size: patch.size.or(self.size),
            scale: patch.scale.or(self.scale),
        }
    }

    /// Whether every present key of `patch` already holds the same value in
    /// `self`. Used to skip no-op store notifications.
    #[must_use]
    pub fn contains(&self, patch: &Self) -> bool {
        patch.color.as_ref().is_none_or(|c| self.color.as_ref() == Some(c))
            && patch.fill.as_ref().is_none_or(|f| self.fill.as_ref() == Some(f))
            && patch.size.is_none_or(|s| self.size == Some(s))
            && patch.scale.is_none_or(|s| self.scale == Some(s))
    }
}
