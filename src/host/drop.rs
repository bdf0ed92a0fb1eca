//! Drag-and-drop payloads from the component palette.

use serde::{Deserialize, Serialize};

/// Data carried by a palette drag.
///
/// Field names follow the drag data keys (`iconType`, `icon`, `color`).
/// Empty strings are treated the same as missing values. Anything else,
/// whitespace included, is kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    /// Component type, e.g. `redis`
    #[serde(default)]
    pub icon_type: String,
    /// Display label, e.g. `Redis`
    #[serde(default)]
    pub icon: String,
    /// Optional accent color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A payload that passed validation, borrowed from the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidDrop<'a> {
    pub icon_type: &'a str,
    pub label: &'a str,
    pub color: Option<&'a str>,
}

impl DragPayload {
    pub fn new(icon_type: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            icon_type: icon_type.into(),
            icon: icon.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns the usable parts of the payload, or `None` when the type or
    /// label is missing.
    pub fn validate(&self) -> Option<ValidDrop<'_>> {
        let icon_type = non_empty(&self.icon_type)?;
        let label = non_empty(&self.icon)?;
        Some(ValidDrop {
            icon_type,
            label,
            color: self.color.as_deref().and_then(non_empty),
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Answer to a drag hovering over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    /// The drop will copy the component onto the canvas
    Copy,
}
