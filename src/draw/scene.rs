//! Scene container: every object on the canvas plus canvas-level state.

use super::brush::Brush;
use super::color::Color;
use super::shape::Shape;
use crate::util::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a scene object. Never reused within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Distinguishes the background grid from user content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
    /// Visual-only grid line, never selectable or evented
    Grid,
    /// Anything the user drew, typed, or dropped
    Drawing,
}

/// One entry in the scene's z-ordered object list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub shape: Shape,
    /// Whether the object can be picked by the select tool
    pub selectable: bool,
    /// Whether the object receives pointer events at all
    pub evented: bool,
}

impl SceneObject {
    pub fn is_grid(&self) -> bool {
        self.kind == ObjectKind::Grid
    }
}

/// The mutable collection of all drawable objects plus canvas properties.
///
/// Objects are kept in draw order (first = bottom layer). The scene also
/// carries the canvas-wide interaction switches that tools toggle: the
/// multi-selection flag, free-drawing mode and its lazily created brush, and
/// the active (selected) object.
#[derive(Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
    next_id: u64,
    width: u32,
    height: u32,
    background: Color,
    selection: bool,
    drawing_mode: bool,
    brush: Option<Brush>,
    active: Option<ObjectId>,
    render_requests: u64,
}

impl Scene {
    /// Creates an empty scene with the given size and background.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
            width,
            height,
            background,
            selection: true,
            drawing_mode: false,
            brush: None,
            active: None,
            render_requests: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Updates the canvas size without touching any object.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.request_render();
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a user object on top of the stack. New objects start selectable
    /// and evented; the next tool change reconfigures them like the rest.
    pub fn add(&mut self, shape: Shape) -> ObjectId {
        let id = self.allocate_id();
        log::debug!("Adding {} {}", shape.kind(), id);
        self.objects.push(SceneObject {
            id,
            kind: ObjectKind::Drawing,
            shape,
            selectable: true,
            evented: true,
        });
        id
    }

    /// Replaces every grid object with `lines`, placed below all user objects.
    pub fn replace_grid(&mut self, lines: Vec<Shape>) {
        self.objects.retain(|object| !object.is_grid());
        let grid: Vec<SceneObject> = lines
            .into_iter()
            .map(|shape| SceneObject {
                id: self.allocate_id(),
                kind: ObjectKind::Grid,
                shape,
                selectable: false,
                evented: false,
            })
            .collect();
        self.objects.splice(0..0, grid);
    }

    /// Removes an object, clearing the active selection if it pointed there.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|object| object.id == id)?;
        if self.active == Some(id) {
            self.active = None;
        }
        Some(self.objects.remove(index))
    }

    /// Discards every object and the active selection.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.active = None;
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|object| object.id == id)
    }

    /// All objects in draw order, grid included.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Non-grid objects in draw order.
    pub fn drawings(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|object| !object.is_grid())
    }

    /// Total object count, grid lines included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn grid_line_count(&self) -> usize {
        self.objects.iter().filter(|object| object.is_grid()).count()
    }

    /// Sets the interaction flags on every non-grid object.
    pub fn set_interaction(&mut self, selectable: bool, evented: bool) {
        for object in self.objects.iter_mut().filter(|object| !object.is_grid()) {
            object.selectable = selectable;
            object.evented = evented;
        }
    }

    /// Returns the topmost non-grid object under `point` that is both
    /// selectable and evented.
    pub fn hit_test(&self, point: Point) -> Option<ObjectId> {
        self.objects
            .iter()
            .rev()
            .filter(|object| !object.is_grid() && object.selectable && object.evented)
            .find(|object| object.shape.bounding_box().contains(point))
            .map(|object| object.id)
    }

    pub fn selection_enabled(&self) -> bool {
        self.selection
    }

    /// Enables or disables multi-object selection.
    pub fn set_selection(&mut self, enabled: bool) {
        self.selection = enabled;
    }

    pub fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    /// Marks an existing object as the active selection.
    pub fn set_active_object(&mut self, id: ObjectId) -> bool {
        if self.get(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    pub fn discard_active_object(&mut self) {
        self.active = None;
    }

    pub fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    /// Toggles free-drawing mode. A stroke already in progress is left alone;
    /// its owner decides whether to commit or drop it.
    pub fn set_drawing_mode(&mut self, enabled: bool) {
        self.drawing_mode = enabled;
    }

    /// Returns the freehand brush, constructing it on first use.
    ///
    /// Every call after the first returns the same cached instance.
    pub fn ensure_brush(&mut self) -> &mut Brush {
        self.brush.get_or_insert_with(|| {
            log::debug!("Creating freehand brush");
            Brush::default()
        })
    }

    pub fn brush(&self) -> Option<&Brush> {
        self.brush.as_ref()
    }

    pub(crate) fn brush_mut(&mut self) -> Option<&mut Brush> {
        self.brush.as_mut()
    }

    /// Counts a repaint request.
    pub fn request_render(&mut self) {
        self.render_requests += 1;
    }

    /// Total number of render requests over the scene's lifetime.
    pub fn render_requests(&self) -> u64 {
        self.render_requests
    }
}
