use super::{DrawingState, InputState, ToolSwitchPolicy};
use crate::draw::Color;
use crate::input::tool::Tool;

impl InputState {
    /// Makes `tool` the active tool and reconfigures the scene for it.
    ///
    /// A gesture still in flight is finished or dropped according to
    /// [`ToolSwitchPolicy`] first, and text editing ends. Selecting the tool
    /// that is already active changes nothing.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }

        self.settle_gesture_for_switch();
        self.exit_text_editing();

        log::info!("Tool changed: {} -> {}", self.tool, tool);
        self.tool = tool;
        self.apply_tool_config();
    }

    /// Sets the ink color for new shapes and the freehand brush.
    pub fn set_color(&mut self, color: Color) {
        if color == self.color {
            return;
        }
        log::debug!("Active color changed to {}", color);
        self.color = color;
        self.apply_tool_config();
    }

    /// Reconfigures the scene's interaction flags and brush for the active tool.
    ///
    /// Runs after every tool or color change:
    /// - draw/eraser turn free-drawing mode on and paint with the ink or the
    ///   background color
    /// - select enables selection and makes every object pickable
    /// - every other tool disables selection and drops the active object;
    ///   brush tools also stop objects from receiving events
    ///
    /// Grid lines keep their flags no matter which tool is active.
    pub fn apply_tool_config(&mut self) {
        let tool = self.tool;
        self.scene.set_drawing_mode(false);

        if tool.uses_brush() {
            let (color, width) = if tool == Tool::Eraser {
                (self.scene.background(), self.settings.eraser_width)
            } else {
                (self.color, self.settings.brush_width)
            };
            self.scene.set_drawing_mode(true);
            let brush = self.scene.ensure_brush();
            brush.color = color;
            brush.width = width;
        }

        match tool {
            Tool::Select => {
                self.scene.set_selection(true);
                self.scene.set_interaction(true, true);
            }
            Tool::Draw | Tool::Eraser => {
                self.scene.set_selection(false);
                self.scene.discard_active_object();
                self.scene.set_interaction(false, false);
            }
            _ => {
                self.scene.set_selection(false);
                self.scene.discard_active_object();
                self.scene.set_interaction(false, true);
            }
        }

        self.scene.request_render();
    }

    /// Brings the gesture state back to Idle ahead of a tool change.
    fn settle_gesture_for_switch(&mut self) {
        match self.settings.tool_switch_policy {
            ToolSwitchPolicy::Commit => self.finish_gesture(),
            ToolSwitchPolicy::Discard => {
                if !matches!(self.state, DrawingState::Idle) {
                    log::debug!("Discarding gesture in flight on tool switch");
                }
                self.abort_gesture();
            }
        }
    }
}
