//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchboard/config.toml`. Settings cover canvas sizing and grid,
//! drawing defaults, arrow appearance, PNG export and interaction behavior.
//!
//! If no config file exists, the defaults reproduce the stock canvas exactly.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ToolSwitchPolicy};
pub use types::{ArrowConfig, BehaviorConfig, CanvasConfig, DrawingConfig, ExportConfig};

use crate::draw::FontDescriptor;
use crate::input::GestureSettings;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// grid_size = 25
/// regenerate_grid_on_resize = true
///
/// [drawing]
/// default_color = "blue"
/// stroke_width = 2.0
///
/// [arrow]
/// length = 15.0
/// angle_degrees = 30.0
///
/// [export]
/// multiplier = 2.0
///
/// [behavior]
/// tool_switch_during_gesture = "commit"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas sizing, background and grid
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Ink, stroke widths and text defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Arrowhead appearance
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// PNG export options
    #[serde(default)]
    pub export: ExportConfig,

    /// Interaction behavior
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause degenerate
    /// canvases or rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `grid_size`: 5 - 200
    /// - `grid_line_width`: 0.1 - 5.0
    /// - `stroke_width`: 0.5 - 20.0
    /// - `brush_width`: 0.5 - 50.0
    /// - `eraser_width`: 1.0 - 100.0
    /// - `font_size`: 8.0 - 72.0
    /// - `arrow.length`: 5.0 - 50.0
    /// - `arrow.angle_degrees`: 15.0 - 60.0
    /// - `export.multiplier`: 1.0 - 4.0
    pub fn validate_and_clamp(&mut self) {
        // Grid spacing: 5 - 200
        if !(5..=200).contains(&self.canvas.grid_size) {
            log::warn!(
                "Invalid grid_size {}, clamping to 5-200 range",
                self.canvas.grid_size
            );
            self.canvas.grid_size = self.canvas.grid_size.clamp(5, 200);
        }

        clamp_f64("grid_line_width", &mut self.canvas.grid_line_width, 0.1, 5.0);
        clamp_f64("stroke_width", &mut self.drawing.stroke_width, 0.5, 20.0);
        clamp_f64("brush_width", &mut self.drawing.brush_width, 0.5, 50.0);
        clamp_f64("eraser_width", &mut self.drawing.eraser_width, 1.0, 100.0);
        clamp_f64("font_size", &mut self.drawing.font_size, 8.0, 72.0);
        clamp_f64("arrow length", &mut self.arrow.length, 5.0, 50.0);
        clamp_f64("arrow angle", &mut self.arrow.angle_degrees, 15.0, 60.0);
        clamp_f64("export multiplier", &mut self.export.multiplier, 1.0, 4.0);

        // The wide width must fit under the hard cap
        if self.canvas.wide_width > self.canvas.max_width {
            log::warn!(
                "wide_width {} exceeds max_width {}, lowering it",
                self.canvas.wide_width,
                self.canvas.max_width
            );
            self.canvas.wide_width = self.canvas.max_width;
        }

        for (name, spec, fallback) in [
            ("canvas.background", &mut self.canvas.background, "#1a1f2e"),
            ("canvas.grid_color", &mut self.canvas.grid_color, "#2d3748"),
            ("drawing.default_color", &mut self.drawing.default_color, "#000000"),
        ] {
            if spec.try_to_color().is_none() {
                log::warn!("Invalid {} {:?}, falling back to '{}'", name, spec, fallback);
                *spec = ColorSpec::from(fallback);
            }
        }

        if self.drawing.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Arial'");
            self.drawing.font_family = "Arial".to_string();
        }

        if self.export.filename_prefix.trim().is_empty()
            || self.export.filename_prefix.contains(['/', '\\'])
        {
            log::warn!(
                "Invalid filename_prefix '{}', falling back to 'system-design'",
                self.export.filename_prefix
            );
            self.export.filename_prefix = "system-design".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory
    /// and returns where it went.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the TOML layout, for editor integration.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Config)).unwrap_or_default()
    }

    /// Builds the gesture parameters the input state works with.
    pub fn gesture_settings(&self) -> GestureSettings {
        GestureSettings {
            stroke_width: self.drawing.stroke_width,
            brush_width: self.drawing.brush_width,
            eraser_width: self.drawing.eraser_width,
            font_size: self.drawing.font_size,
            font: FontDescriptor::regular(self.drawing.font_family.clone()),
            text_placeholder: self.drawing.text_placeholder.clone(),
            arrow_head_length: self.arrow.length,
            arrow_head_angle: self.arrow.angle_degrees,
            tool_switch_policy: self.behavior.tool_switch_during_gesture,
        }
    }
}

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(&*value) {
        log::warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            name,
            value,
            min,
            max
        );
        // NaN is not contained in any range; send it to the minimum
        *value = if value.is_nan() {
            min
        } else {
            (*value).clamp(min, max)
        };
    }
}
