//! Canvas events and scripted sessions.
//!
//! A script is a JSON array of events replayed in order against a mounted
//! canvas, for example:
//!
//! ```json
//! [
//!   { "event": "set-tool", "tool": "rectangle" },
//!   { "event": "pointer-down", "x": 100, "y": 100 },
//!   { "event": "pointer-move", "x": 250, "y": 180 },
//!   { "event": "pointer-up", "x": 250, "y": 180 },
//!   { "event": "drop", "x": 400, "y": 300, "iconType": "redis", "icon": "Redis" }
//! ]
//! ```

use super::drop::DragPayload;
use crate::input::{Key, Tool};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything the canvas can be asked to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum CanvasEvent {
    /// Toolbar tool button
    SetTool { tool: Tool },
    /// Toolbar swatch; hex or palette name
    SetColor { color: String },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    /// Keyboard input: hotkeys, text editing, delete
    Key { key: Key },
    /// Click on a palette entry, by icon type
    PaletteClick { id: String },
    /// A palette drag hovering over the canvas
    DragOver,
    /// A palette drag released at canvas coordinates
    Drop {
        x: f64,
        y: f64,
        #[serde(flatten)]
        payload: DragPayload,
    },
    /// Viewport size change
    Resize { width: u32, height: u32 },
    /// Toolbar clear button
    Clear,
    /// Toolbar export button; without a path the file goes to the export directory
    Export {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
    },
    /// Unmount the canvas
    Dispose,
}

/// Errors from loading a session script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a JSON array of events.
pub fn parse_script(json: &str) -> Result<Vec<CanvasEvent>, ScriptError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<CanvasEvent>, ScriptError> {
    let json = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_script(&json)?;
    log::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
