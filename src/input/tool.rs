//! Drawing tool selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. The active tool determines how the
/// scene reacts to pointer input and which interaction flags its objects carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pick and move existing objects (V)
    #[default]
    Select,
    /// Freehand pencil (P)
    Draw,
    /// Rectangle from corner to corner (R)
    Rectangle,
    /// Circle anchored at the press point (C)
    Circle,
    /// Straight line (L)
    Line,
    /// Line with a two-segment head at the release point (A)
    Arrow,
    /// Paints over strokes with the background color (E)
    Eraser,
    /// Places an editable text block on click (T)
    Text,
}

impl Tool {
    /// Every tool in toolbar order.
    pub const ALL: [Tool; 8] = [
        Tool::Select,
        Tool::Draw,
        Tool::Line,
        Tool::Arrow,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Text,
        Tool::Eraser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Draw => "draw",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Line => "line",
            Tool::Arrow => "arrow",
            Tool::Eraser => "eraser",
            Tool::Text => "text",
        }
    }

    /// Toolbar hotkey (uppercase letter).
    pub fn hotkey(self) -> char {
        match self {
            Tool::Select => 'V',
            Tool::Draw => 'P',
            Tool::Rectangle => 'R',
            Tool::Circle => 'C',
            Tool::Line => 'L',
            Tool::Arrow => 'A',
            Tool::Eraser => 'E',
            Tool::Text => 'T',
        }
    }

    /// Maps a hotkey character (case-insensitive) back to its tool.
    pub fn from_hotkey(c: char) -> Option<Tool> {
        let c = c.to_ascii_uppercase();
        Tool::ALL.into_iter().find(|tool| tool.hotkey() == c)
    }

    /// Tools that paint with the freehand brush instead of discrete shapes.
    pub fn uses_brush(self) -> bool {
        matches!(self, Tool::Draw | Tool::Eraser)
    }

}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for tool names that are not in the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool '{0}'")]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkeys_round_trip_for_every_tool() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_hotkey(tool.hotkey()), Some(tool));
            assert_eq!(
                Tool::from_hotkey(tool.hotkey().to_ascii_lowercase()),
                Some(tool)
            );
        }
        assert_eq!(Tool::from_hotkey('x'), None);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Rectangle".parse::<Tool>(), Ok(Tool::Rectangle));
        assert_eq!(" eraser ".parse::<Tool>(), Ok(Tool::Eraser));
        assert!("lasso".parse::<Tool>().is_err());
    }

    #[test]
    fn only_draw_and_eraser_use_the_brush() {
        let brush_tools: Vec<Tool> = Tool::ALL.into_iter().filter(|t| t.uses_brush()).collect();
        assert_eq!(brush_tools, [Tool::Draw, Tool::Eraser]);
    }
}
