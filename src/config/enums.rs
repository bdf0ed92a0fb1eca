//! Configuration enum types.

use crate::draw::{Color, color::BLACK, color::palette_color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use crate::input::ToolSwitchPolicy;

/// Color specification - a hex string, a palette name, or RGB values.
///
/// # Examples
/// ```toml
/// # Hex color
/// default_color = "#3b82f6"
///
/// # Toolbar palette name
/// default_color = "purple"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#rrggbb` or a palette name: black, red, blue, green, yellow, purple, orange, white
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Hex strings are parsed first, then palette names. Anything else falls
    /// back to black with a warning.
    pub fn to_color(&self) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using black", self);
            BLACK
        })
    }

    /// Like [`ColorSpec::to_color`] but reports unknown names instead of
    /// substituting a fallback.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => Color::from_hex(name)
                .ok()
                .or_else(|| palette_color(name.trim())),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Name(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_names_and_rgb_all_resolve() {
        assert_eq!(ColorSpec::from("#ef4444").to_color().to_hex(), "#ef4444");
        assert_eq!(ColorSpec::from("Purple").to_color().to_hex(), "#a855f7");
        assert_eq!(ColorSpec::Rgb([255, 128, 0]).to_color().to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        let spec = ColorSpec::from("chartreuse-ish");
        assert!(spec.try_to_color().is_none());
        assert_eq!(spec.to_color(), BLACK);
    }
}
