//! RGBA color type, hex parsing, and the toolbar palette.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchboard::draw::Color;
/// let red = Color::from_hex("#ef4444").unwrap();
/// let glow = red.with_alpha(0.3);
/// assert_eq!(glow.to_hex(), "#ef4444");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a string is not a `#rrggbb` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}' (expected #rrggbb)")]
pub struct ColorParseError(pub String);

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Parses a six digit hex color. The leading `#` is optional and digits are
    /// case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let (r, g, b) = parse_hex_channels(hex).ok_or_else(|| ColorParseError(hex.to_string()))?;
        Ok(Self::from_rgb8(r, g, b))
    }

    /// Returns the 8-bit channels, ignoring alpha.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Formats the color as lowercase `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

fn parse_hex_channels(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a < 1.0 {
            let (r, g, b) = self.to_rgb8();
            write!(f, "rgba({r}, {g}, {b}, {})", self.a)
        } else {
            f.write_str(&self.to_hex())
        }
    }
}

// Shapes serialize their colors as hex plus alpha so scene dumps stay readable.
#[derive(Serialize, Deserialize)]
struct ColorRepr {
    hex: String,
    #[serde(default = "opaque")]
    alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ColorRepr {
            hex: self.to_hex(),
            alpha: self.a,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ColorRepr::deserialize(deserializer)?;
        let color = Color::from_hex(&repr.hex).map_err(serde::de::Error::custom)?;
        Ok(color.with_alpha(repr.alpha))
    }
}

// ============================================================================
// Toolbar palette
// ============================================================================

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// `#ef4444`
pub const RED: Color = Color::new(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 1.0);

/// `#3b82f6`, also the fallback icon color
pub const BLUE: Color = Color::new(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 1.0);

/// `#10b981`
pub const GREEN: Color = Color::new(16.0 / 255.0, 185.0 / 255.0, 129.0 / 255.0, 1.0);

/// `#eab308`
pub const YELLOW: Color = Color::new(234.0 / 255.0, 179.0 / 255.0, 8.0 / 255.0, 1.0);

/// `#a855f7`
pub const PURPLE: Color = Color::new(168.0 / 255.0, 85.0 / 255.0, 247.0 / 255.0, 1.0);

/// `#f97316`
pub const ORANGE: Color = Color::new(249.0 / 255.0, 115.0 / 255.0, 22.0 / 255.0, 1.0);

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Canvas background, `#1a1f2e`
pub const BACKGROUND: Color = Color::new(26.0 / 255.0, 31.0 / 255.0, 46.0 / 255.0, 1.0);

/// Grid stroke, `#2d3748`
pub const GRID: Color = Color::new(45.0 / 255.0, 55.0 / 255.0, 72.0 / 255.0, 1.0);

/// Named swatches shown in the toolbar, in display order.
pub const PALETTE: [(&str, Color); 8] = [
    ("Black", BLACK),
    ("Red", RED),
    ("Blue", BLUE),
    ("Green", GREEN),
    ("Yellow", YELLOW),
    ("Purple", PURPLE),
    ("Orange", ORANGE),
    ("White", WHITE),
];

/// Looks up a palette swatch by name (case-insensitive).
pub fn palette_color(name: &str) -> Option<Color> {
    PALETTE
        .iter()
        .find(|(swatch, _)| swatch.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}
