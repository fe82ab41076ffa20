//! The serialized document contract.
//!
//! A document is plain data: shape snapshots keyed by id, optional view
//! state, and optional toolbar settings. Hydration and export must
//! round-trip exactly — shapes come back field for field, and the export
//! order is stable (shapes are keyed in a sorted map by id).

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::shape::Shape;
use crate::store::{Camera, GridSettings, ViewSettings};

/// A full persisted document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub page: PageDoc,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_state: Option<PageStateDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ViewSettings>,
}

/// The shape collection of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDoc {
    #[serde(default = "default_page_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Shape snapshots keyed by their id string.
    #[serde(default)]
    pub shapes: BTreeMap<String, Shape>,
}

fn default_page_id() -> String {
    "page".to_string()
}

impl Default for PageDoc {
    fn default() -> Self {
        Self {
            id: default_page_id(),
            name: None,
            shapes: BTreeMap::new(),
        }
    }
}

/// Persisted view state. Selection, hover and editing are transient and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStateDoc {
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub settings: GridSettings,
}

impl Document {
    /// Parse a document from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Document`] when the JSON is malformed or a
    /// shape carries an unknown `type` tag.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Document`] if serialization fails.
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}
