//! Drawing state machine and input state management.

use crate::draw::color::BLACK;
use crate::draw::{Color, FontDescriptor, ObjectId, Scene};
use crate::input::tool::Tool;
use crate::util::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current gesture state machine.
///
/// At most one gesture is in flight. Every variant other than `Idle` is
/// entered on pointer-down and left on pointer-up (or when the tool changes).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a pointer press
    Idle,
    /// Building a rectangle, circle, line or arrow (pointer held down)
    Shaping {
        /// Tool that started the gesture
        tool: Tool,
        /// Where the pointer was pressed
        start: Point,
        /// Provisional shape already in the scene
        provisional: ObjectId,
    },
    /// Freehand brush stroke in progress (draw or eraser)
    Painting,
    /// Select tool is dragging an object around
    Dragging {
        /// Object being moved
        id: ObjectId,
        /// Last pointer position seen during the drag
        last: Point,
    },
}

/// What happens to an in-flight gesture when the tool changes under it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ToolSwitchPolicy {
    /// Finish the gesture with the tool that started it
    #[default]
    Commit,
    /// Remove the provisional shape or stroke
    Discard,
}

/// Text object currently in in-place edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEdit {
    /// The text object being edited
    pub id: ObjectId,
    /// True while the whole text is still selected; the next printable key replaces it
    pub replace_on_type: bool,
}

/// Stroke, text and arrow parameters used when building objects.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSettings {
    /// Stroke width for interpreter shapes
    pub stroke_width: f64,
    /// Freehand brush width for the draw tool
    pub brush_width: f64,
    /// Freehand brush width for the eraser
    pub eraser_width: f64,
    /// Font size for new text objects
    pub font_size: f64,
    /// Font for new text objects
    pub font: FontDescriptor,
    /// Initial content of a new text object
    pub text_placeholder: String,
    /// Arrowhead segment length in pixels
    pub arrow_head_length: f64,
    /// Arrowhead half-angle in degrees
    pub arrow_head_angle: f64,
    /// Behavior when the tool changes mid-gesture
    pub tool_switch_policy: ToolSwitchPolicy,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            brush_width: 2.0,
            eraser_width: 20.0,
            font_size: 20.0,
            font: FontDescriptor::default(),
            text_placeholder: "Double click to edit".to_string(),
            arrow_head_length: 15.0,
            arrow_head_angle: 30.0,
            tool_switch_policy: ToolSwitchPolicy::Commit,
        }
    }
}

/// Main input state: the scene plus everything that decides how it reacts
/// to pointer and keyboard input.
///
/// The canvas host owns exactly one `InputState`. All handlers take
/// `&mut self`, so a gesture can never observe another one half-applied.
#[derive(Debug)]
pub struct InputState {
    /// The canvas contents and canvas-wide interaction flags
    pub scene: Scene,
    /// Shape and text parameters
    pub settings: GestureSettings,
    /// Current gesture
    pub(super) state: DrawingState,
    pub(super) tool: Tool,
    pub(super) color: Color,
    pub(super) editing: Option<TextEdit>,
}

impl InputState {
    /// Wraps a scene with the select tool active and black ink.
    ///
    /// The tool configuration is applied immediately so the scene's flags
    /// already match the initial tool.
    pub fn new(scene: Scene, settings: GestureSettings) -> Self {
        Self::with_color(scene, settings, BLACK)
    }

    /// Like [`InputState::new`] with a specific starting color.
    pub fn with_color(scene: Scene, settings: GestureSettings, color: Color) -> Self {
        let mut state = Self {
            scene,
            settings,
            state: DrawingState::Idle,
            tool: Tool::default(),
            color,
            editing: None,
        };
        state.apply_tool_config();
        state
    }

    pub fn active_tool(&self) -> Tool {
        self.tool
    }

    pub fn active_color(&self) -> Color {
        self.color
    }

    pub fn drawing_state(&self) -> &DrawingState {
        &self.state
    }

    /// Where the current shape gesture started, if one is in flight.
    pub fn start_point(&self) -> Option<Point> {
        match self.state {
            DrawingState::Shaping { start, .. } => Some(start),
            _ => None,
        }
    }

    /// The provisional shape of the current gesture, if any.
    pub fn provisional(&self) -> Option<ObjectId> {
        match self.state {
            DrawingState::Shaping { provisional, .. } => Some(provisional),
            _ => None,
        }
    }

    pub fn text_edit(&self) -> Option<TextEdit> {
        self.editing
    }

    pub fn is_editing_text(&self) -> bool {
        self.editing.is_some()
    }

    /// Leaves in-place text editing. The text object stays active.
    pub fn exit_text_editing(&mut self) {
        if let Some(edit) = self.editing.take() {
            log::debug!("Leaving text edit mode for {}", edit.id);
            self.scene.request_render();
        }
    }

    /// Drops every piece of transient gesture state without committing it.
    ///
    /// Used when the scene is about to be wiped; any provisional object is
    /// removed along with its reference.
    pub fn abort_gesture(&mut self) {
        if let DrawingState::Shaping { provisional, .. } = self.state {
            self.scene.remove(provisional);
        }
        if let Some(brush) = self.scene.brush_mut() {
            brush.cancel();
        }
        self.state = DrawingState::Idle;
        self.editing = None;
    }
}
