//! Canvas dimensions derived from the viewport.

use crate::config::CanvasConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Size of the browser-like window hosting the canvas, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    /// A common laptop window.
    fn default() -> Self {
        Self::new(1440, 900)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error for viewport strings that are not `WIDTHxHEIGHT`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid viewport '{0}' (expected WIDTHxHEIGHT, e.g. 1440x900)")]
pub struct ViewportParseError(pub String);

impl FromStr for Viewport {
    type Err = ViewportParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ViewportParseError(s.to_string());
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(err)?;
        let width = w.trim().parse().map_err(|_| err())?;
        let height = h.trim().parse().map_err(|_| err())?;
        Ok(Self::new(width, height))
    }
}

/// Computes the canvas size for a viewport.
///
/// Wide viewports get a fixed width, narrower ones leave room for the side
/// panels; both are capped. The height leaves room for the page chrome.
/// Tiny viewports still yield at least a 1x1 canvas.
pub fn canvas_size(viewport: Viewport, cfg: &CanvasConfig) -> (u32, u32) {
    let vw = i64::from(viewport.width);
    let vh = i64::from(viewport.height);

    let width = if vw > i64::from(cfg.wide_breakpoint) {
        i64::from(cfg.wide_width)
    } else {
        vw - i64::from(cfg.side_margin)
    };
    let width = width.min(i64::from(cfg.max_width));
    let height = (vh - i64::from(cfg.vertical_margin)).min(i64::from(cfg.max_height));

    (clamp_dimension(width), clamp_dimension(height))
}

fn clamp_dimension(value: i64) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(u32::MAX)
}
