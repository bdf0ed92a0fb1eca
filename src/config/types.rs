//! Configuration type definitions.

use super::enums::{ColorSpec, ToolSwitchPolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas sizing, background and grid settings.
///
/// The canvas size is derived from the viewport:
/// `width = min(vw > wide_breakpoint ? wide_width : vw - side_margin, max_width)` and
/// `height = min(vh - vertical_margin, max_height)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Viewport width above which the canvas uses `wide_width`
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint: u32,

    /// Canvas width on wide viewports
    #[serde(default = "default_wide_width")]
    pub wide_width: u32,

    /// Horizontal space reserved for the toolbar and palette on narrow viewports
    #[serde(default = "default_side_margin")]
    pub side_margin: u32,

    /// Upper bound on the canvas width
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Vertical space reserved for the page chrome
    #[serde(default = "default_vertical_margin")]
    pub vertical_margin: u32,

    /// Upper bound on the canvas height
    #[serde(default = "default_max_height")]
    pub max_height: u32,

    /// Canvas background color
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Distance between grid lines in pixels (valid range: 5 - 200)
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,

    /// Grid line color
    #[serde(default = "default_grid_color")]
    pub grid_color: ColorSpec,

    /// Grid line width in pixels (valid range: 0.1 - 5.0)
    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: f64,

    /// Rebuild the grid for the new size when the viewport changes.
    /// When false the grid keeps the lines drawn at mount or clear time.
    #[serde(default = "default_regenerate_grid")]
    pub regenerate_grid_on_resize: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            wide_breakpoint: default_wide_breakpoint(),
            wide_width: default_wide_width(),
            side_margin: default_side_margin(),
            max_width: default_max_width(),
            vertical_margin: default_vertical_margin(),
            max_height: default_max_height(),
            background: default_background(),
            grid_size: default_grid_size(),
            grid_color: default_grid_color(),
            grid_line_width: default_grid_line_width(),
            regenerate_grid_on_resize: default_regenerate_grid(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the ink, stroke widths and text defaults used when the canvas
/// first mounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial ink color - a hex string, a palette name (black, red, blue, green,
    /// yellow, purple, orange, white) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Outline width for rectangles, circles, lines and arrows (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Freehand brush width for the draw tool (valid range: 0.5 - 50.0)
    #[serde(default = "default_brush_width")]
    pub brush_width: f64,

    /// Brush width for the eraser (valid range: 1.0 - 100.0)
    #[serde(default = "default_eraser_width")]
    pub eraser_width: f64,

    /// Font size for the text tool in pixels (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Font family for the text tool
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Placeholder content of a freshly placed text object
    #[serde(default = "default_text_placeholder")]
    pub text_placeholder: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            stroke_width: default_stroke_width(),
            brush_width: default_brush_width(),
            eraser_width: default_eraser_width(),
            font_size: default_font_size(),
            font_family: default_font_family(),
            text_placeholder: default_text_placeholder(),
        }
    }
}

/// Arrow drawing settings.
///
/// Controls the two head segments added when an arrow gesture ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Arrowhead length in pixels (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Arrowhead angle in degrees (valid range: 15.0 - 60.0)
    /// Smaller angles create narrower arrowheads, larger angles create wider ones
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Pixel density multiplier (valid range: 1.0 - 4.0)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// File name prefix; the export is named `<prefix>-<unix-ms>.png`
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Directory for exports. Defaults to the user's download directory,
    /// then the current directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            multiplier: default_multiplier(),
            filename_prefix: default_filename_prefix(),
            directory: None,
        }
    }
}

/// Interaction behavior settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct BehaviorConfig {
    /// What happens to a half-drawn shape when the tool changes:
    /// "commit" finishes it with its own tool, "discard" removes it
    #[serde(default)]
    pub tool_switch_during_gesture: ToolSwitchPolicy,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_wide_breakpoint() -> u32 {
    1400
}

fn default_wide_width() -> u32 {
    1400
}

fn default_side_margin() -> u32 {
    200
}

fn default_max_width() -> u32 {
    1600
}

fn default_vertical_margin() -> u32 {
    250
}

fn default_max_height() -> u32 {
    800
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("#1a1f2e".to_string())
}

fn default_grid_size() -> u32 {
    25
}

fn default_grid_color() -> ColorSpec {
    ColorSpec::Name("#2d3748".to_string())
}

fn default_grid_line_width() -> f64 {
    0.5
}

fn default_regenerate_grid() -> bool {
    true
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_brush_width() -> f64 {
    2.0
}

fn default_eraser_width() -> f64 {
    20.0
}

fn default_font_size() -> f64 {
    20.0
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_text_placeholder() -> String {
    "Double click to edit".to_string()
}

fn default_arrow_length() -> f64 {
    15.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

fn default_multiplier() -> f64 {
    2.0
}

fn default_filename_prefix() -> String {
    "system-design".to_string()
}
