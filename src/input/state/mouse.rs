use super::{DrawingState, InputState, TextEdit};
use crate::draw::{Shape, Style};
use crate::input::tool::Tool;
use crate::util::{self, Point};
use log::debug;

impl InputState {
    /// Processes a pointer press at canvas coordinates.
    ///
    /// # Behavior
    /// - Text editing ends before the press is handled
    /// - Rectangle/circle/line/arrow: capture the start point and add a
    ///   zero-size provisional shape in the active color
    /// - Text: place a text object, make it active, and enter edit mode
    /// - Draw/eraser: start a brush stroke when free-drawing mode is on
    /// - Select: pick the topmost interactive object under the pointer
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let at = Point::new(x, y);
        self.exit_text_editing();

        if !matches!(self.state, DrawingState::Idle) {
            // A lost pointer-up leaves the previous gesture open; close it first
            debug!("Pointer down with a gesture still open, finishing it");
            self.finish_gesture();
        }

        match self.tool {
            Tool::Rectangle | Tool::Circle | Tool::Line | Tool::Arrow => {
                let shape = self.provisional_shape(self.tool, at);
                let provisional = self.scene.add(shape);
                self.state = DrawingState::Shaping {
                    tool: self.tool,
                    start: at,
                    provisional,
                };
            }
            Tool::Text => self.place_text(at),
            Tool::Draw | Tool::Eraser => {
                if self.scene.is_drawing_mode() {
                    self.scene.ensure_brush().begin(at);
                    self.state = DrawingState::Painting;
                }
            }
            Tool::Select => {
                if !self.scene.selection_enabled() {
                    return;
                }
                match self.scene.hit_test(at) {
                    Some(id) => {
                        self.scene.set_active_object(id);
                        self.state = DrawingState::Dragging { id, last: at };
                    }
                    None => self.scene.discard_active_object(),
                }
            }
        }
        self.scene.request_render();
    }

    /// Processes pointer motion. Ignored when no gesture is in flight.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let at = Point::new(x, y);
        match self.state {
            DrawingState::Idle => return,
            DrawingState::Shaping {
                start, provisional, ..
            } => {
                let Some(object) = self.scene.get_mut(provisional) else {
                    return;
                };
                match &mut object.shape {
                    Shape::Rect {
                        left,
                        top,
                        width,
                        height,
                        ..
                    } => {
                        let bounds = util::normalize_drag_rect(start, at);
                        *left = bounds.left;
                        *top = bounds.top;
                        *width = bounds.width;
                        *height = bounds.height;
                    }
                    Shape::Circle { radius, .. } => *radius = util::drag_radius(start, at),
                    Shape::Line { x2, y2, .. } => {
                        *x2 = at.x;
                        *y2 = at.y;
                    }
                    _ => {}
                }
            }
            DrawingState::Painting => {
                if let Some(brush) = self.scene.brush_mut() {
                    brush.extend(at);
                }
            }
            DrawingState::Dragging { id, last } => {
                if let Some(object) = self.scene.get_mut(id) {
                    object.shape.translate(at.x - last.x, at.y - last.y);
                }
                self.state = DrawingState::Dragging { id, last: at };
            }
        }
        self.scene.request_render();
    }

    /// Processes a pointer release.
    ///
    /// The release position is not used; shapes keep the geometry of the last
    /// move. Releases with no gesture in flight are ignored.
    pub fn on_pointer_up(&mut self, _x: f64, _y: f64) {
        if matches!(self.state, DrawingState::Idle) {
            return;
        }
        self.finish_gesture();
        self.scene.request_render();
    }

    /// Commits whatever the current gesture built and returns to Idle.
    ///
    /// Arrows get their two head segments here, as separate line objects in
    /// the current ink color.
    pub(super) fn finish_gesture(&mut self) {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => {}
            DrawingState::Shaping {
                tool, provisional, ..
            } => {
                if tool == Tool::Arrow {
                    self.add_arrowhead(provisional);
                }
                log::info!("Committed {} {}", tool, provisional);
            }
            DrawingState::Painting => {
                if let Some(path) = self.scene.brush_mut().and_then(|brush| brush.finish()) {
                    let id = self.scene.add(path);
                    log::info!("Committed freehand stroke {}", id);
                }
            }
            DrawingState::Dragging { id, .. } => debug!("Finished moving {}", id),
        }
    }

    fn provisional_shape(&self, tool: Tool, at: Point) -> Shape {
        let style = Style::outline(self.color, self.settings.stroke_width);
        match tool {
            Tool::Rectangle => Shape::Rect {
                left: at.x,
                top: at.y,
                width: 0.0,
                height: 0.0,
                corner_radius: 0.0,
                style,
            },
            Tool::Circle => Shape::Circle {
                left: at.x,
                top: at.y,
                radius: 0.0,
                style,
            },
            _ => Shape::Line {
                x1: at.x,
                y1: at.y,
                x2: at.x,
                y2: at.y,
                stroke: self.color,
                stroke_width: self.settings.stroke_width,
            },
        }
    }

    fn add_arrowhead(&mut self, shaft: crate::draw::ObjectId) {
        let Some(Shape::Line { x1, y1, x2, y2, .. }) =
            self.scene.get(shaft).map(|object| &object.shape)
        else {
            return;
        };
        let tip = Point::new(*x2, *y2);
        let barbs = util::arrowhead_barbs(
            Point::new(*x1, *y1),
            tip,
            self.settings.arrow_head_length,
            self.settings.arrow_head_angle,
        );
        for end in barbs {
            self.scene.add(Shape::Line {
                x1: tip.x,
                y1: tip.y,
                x2: end.x,
                y2: end.y,
                stroke: self.color,
                stroke_width: self.settings.stroke_width,
            });
        }
    }

    fn place_text(&mut self, at: Point) {
        let id = self.scene.add(Shape::Text {
            left: at.x,
            top: at.y,
            text: self.settings.text_placeholder.clone(),
            fill: self.color,
            font_size: self.settings.font_size,
            font: self.settings.font.clone(),
        });
        self.scene.set_active_object(id);
        self.editing = Some(TextEdit {
            id,
            replace_on_type: true,
        });
        log::info!("Placed text {} at ({:.0}, {:.0})", id, at.x, at.y);
    }
}
