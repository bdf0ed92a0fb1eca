//! Font descriptor for text rendering.

use serde::{Deserialize, Serialize};

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name and weight. Text objects
/// carry their own descriptor so icon labels and user text can differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Arial", "Sans")
    pub family: String,

    /// Font weight (e.g., "normal", "bold" or numeric 100-900)
    pub weight: String,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
        }
    }

    /// Regular-weight descriptor for the given family.
    pub fn regular(family: impl Into<String>) -> Self {
        Self::new(family, "normal")
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Weight Size", e.g. "Arial Bold 12". Numeric weights are
    /// mapped to their Pango names.
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        let weight = match self.weight.to_lowercase().as_str() {
            "normal" | "400" => None,
            "600" => Some("Semi-Bold".to_string()),
            "bold" | "700" => Some("Bold".to_string()),
            other => Some(capitalize_first(other)),
        };
        if let Some(weight) = weight {
            parts.push(weight);
        }

        parts.push(format!("{}", size.round() as i32));
        parts.join(" ")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::regular("Arial")
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        assert_eq!(FontDescriptor::default().to_pango_string(20.0), "Arial 20");
    }

    #[test]
    fn test_pango_string_bold() {
        let font = FontDescriptor::new("Arial", "bold");
        assert_eq!(font.to_pango_string(12.0), "Arial Bold 12");
    }

    #[test]
    fn test_pango_string_numeric_weight() {
        let font = FontDescriptor::new("Sans", "600");
        assert_eq!(font.to_pango_string(9.0), "Sans Semi-Bold 9");
    }
}
