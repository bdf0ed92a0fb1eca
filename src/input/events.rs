//! Input event types delivered to the canvas.

use serde::{Deserialize, Serialize};

/// Key representation used for hotkeys and in-place text editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Key {
    /// Printable character
    Char(char),
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Escape key
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}
