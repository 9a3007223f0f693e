//! Domain records returned by the board backend.
//!
//! Only the fields this crate actually reads are typed. Everything else the
//! backend sends rides along in flattened `extra` maps, so a wholesale state
//! replace never drops data the UI layer might render.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The active sprint for a board. Opaque beyond identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A work item with a stable string-typed numeric id and ordered subtasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    #[serde(default)]
    pub fields: StoryFields,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Story {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), fields: StoryFields::default(), extra: Map::new() }
    }
}

/// Story payload; only `subtasks` is interpreted by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryFields {
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A work item belonging to exactly one story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubTask {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), extra: Map::new() }
    }
}

/// The currently focused grouping entity, when one is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Epic {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), name: None, extra: Map::new() }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
