//! Canvas host: owns the scene and input state and wires them to the outside.
//!
//! The host sizes the canvas from the viewport, draws the background grid,
//! routes pointer, keyboard and drag events into the [`InputState`], and
//! implements the toolbar actions (clear, export) plus palette drops.
//! Success messages are queued as [`Notice`]s.

pub mod drop;
pub mod event;
pub mod export;
pub mod grid;
pub mod sizing;

pub use drop::{DragPayload, DropEffect, ValidDrop};
pub use event::{CanvasEvent, ScriptError, load_script, parse_script};
pub use export::ExportError;
pub use grid::{grid_line_count, grid_lines};
pub use sizing::{Viewport, ViewportParseError, canvas_size};

use crate::config::{ColorSpec, Config};
use crate::draw::{ColorParseError, ObjectId, Scene};
use crate::icons::{PaletteEntry, build_icon_node, find_entry};
use crate::input::{InputState, Tool};
use crate::notice::{Notice, NoticeQueue};
use crate::util::Point;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Window-level events the host subscribes to while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    Resize,
    Drop,
    DragOver,
}

/// Errors surfaced while dispatching a canvas event.
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// What a dispatched event led to.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// The event was applied
    Handled,
    /// The event had no effect (unmounted canvas, invalid drop, unused key)
    Ignored,
    /// Answer to a drag hovering over the canvas
    DropEffect(DropEffect),
    /// An icon card was added
    Dropped(ObjectId),
    /// The canvas was written to this file
    Exported(PathBuf),
}

/// The mounted drawing canvas.
#[derive(Debug)]
pub struct CanvasHost {
    input: InputState,
    config: Config,
    viewport: Viewport,
    listeners: Vec<Listener>,
    notices: NoticeQueue,
}

impl CanvasHost {
    /// Mounts a canvas sized for `viewport`.
    ///
    /// The scene starts with the background color, the grid, a brush in the
    /// default ink, and the select tool's configuration applied.
    pub fn mount(viewport: Viewport, config: Config) -> Self {
        let (width, height) = canvas_size(viewport, &config.canvas);
        let mut scene = Scene::new(width, height, config.canvas.background.to_color());
        scene.replace_grid(grid_lines(width, height, &config.canvas));

        let color = config.drawing.default_color.to_color();
        let brush = scene.ensure_brush();
        brush.color = color;
        brush.width = config.drawing.brush_width;

        let input = InputState::with_color(scene, config.gesture_settings(), color);
        log::info!(
            "Mounted {}x{} canvas for {} viewport",
            width,
            height,
            viewport
        );

        Self {
            input,
            config,
            viewport,
            listeners: vec![Listener::Resize, Listener::Drop, Listener::DragOver],
            notices: NoticeQueue::default(),
        }
    }

    /// Unregisters every listener. Later events are ignored.
    pub fn dispose(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        self.input.abort_gesture();
        self.listeners.clear();
        log::info!("Canvas disposed");
    }

    pub fn is_mounted(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn scene(&self) -> &Scene {
        &self.input.scene
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Direct access to the input state, for callers that drive gestures themselves.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Removes every object, restores the background, and redraws the grid.
    ///
    /// Any gesture or text edit in progress is dropped with the rest.
    pub fn clear(&mut self) {
        let canvas = &self.config.canvas;
        self.input.abort_gesture();

        let scene = &mut self.input.scene;
        scene.clear();
        scene.set_background(canvas.background.to_color());
        scene.replace_grid(grid_lines(scene.width(), scene.height(), canvas));
        scene.request_render();

        log::info!("Canvas cleared");
        self.notices.post(Notice::success("Canvas cleared!"));
    }

    /// Resizes the canvas for a new viewport. User objects are kept.
    pub fn resize(&mut self, viewport: Viewport) {
        let (width, height) = canvas_size(viewport, &self.config.canvas);
        self.viewport = viewport;

        let scene = &mut self.input.scene;
        scene.set_dimensions(width, height);
        if self.config.canvas.regenerate_grid_on_resize {
            scene.replace_grid(grid_lines(width, height, &self.config.canvas));
        }
        log::debug!("Resized canvas to {}x{} for {} viewport", width, height, viewport);
    }

    /// Answer for a drag hovering over the canvas.
    pub fn drag_over(&self) -> DropEffect {
        DropEffect::Copy
    }

    /// Adds a component card centred on (`x`, `y`).
    ///
    /// Returns `None`, leaving the scene untouched, when the payload lacks a
    /// type or label.
    pub fn drop_icon(&mut self, x: f64, y: f64, payload: &DragPayload) -> Option<ObjectId> {
        let Some(drop) = payload.validate() else {
            log::debug!("Ignoring drop with incomplete payload: {:?}", payload);
            return None;
        };

        let node = build_icon_node(drop.icon_type, drop.label, Point::new(x, y), drop.color);
        let id = self.input.scene.add(node);
        self.input.scene.request_render();

        log::info!("Dropped {} ({}) as {}", drop.label, drop.icon_type, id);
        self.notices
            .post(Notice::success(format!("Added {} to canvas", drop.label)));
        Some(id)
    }

    /// A click on a palette entry. Entries are placed by dragging, so the
    /// click only posts a hint.
    pub fn palette_click(&mut self, id: &str) -> Option<&'static PaletteEntry> {
        let entry = find_entry(id)?;
        self.notices
            .post(Notice::info(format!("Drag {} to canvas", entry.label)));
        Some(entry)
    }

    /// Renders the scene to PNG bytes at the configured multiplier.
    pub fn export_png_bytes(&self) -> Result<Vec<u8>, ExportError> {
        export::render_png(&self.input.scene, self.config.export.multiplier)
    }

    /// Exports to `<export dir>/<prefix>-<unix-ms>.png`.
    pub fn export(&mut self) -> Result<PathBuf, ExportError> {
        let path = export::export_directory(&self.config.export)
            .join(export::export_filename(&self.config.export.filename_prefix));
        self.export_to(&path)
    }

    /// Exports to an explicit file path.
    pub fn export_to(&mut self, path: &Path) -> Result<PathBuf, ExportError> {
        let bytes = self.export_png_bytes()?;
        let written = export::write_png(&bytes, path)?;
        self.notices.post(Notice::success("Canvas exported as PNG!"));
        Ok(written)
    }

    /// Notices posted since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Routes one event to the matching handler.
    ///
    /// Events arriving after [`CanvasHost::dispose`] are ignored.
    pub fn dispatch(&mut self, event: CanvasEvent) -> Result<EventOutcome, HostError> {
        if !self.accepts(&event) {
            log::debug!("Canvas not listening, ignoring {:?}", event);
            return Ok(EventOutcome::Ignored);
        }

        let outcome = match event {
            CanvasEvent::SetTool { tool } => {
                self.input.set_tool(tool);
                EventOutcome::Handled
            }
            CanvasEvent::SetColor { color } => {
                let parsed = ColorSpec::Name(color.clone())
                    .try_to_color()
                    .ok_or(ColorParseError(color))?;
                self.input.set_color(parsed);
                EventOutcome::Handled
            }
            CanvasEvent::PointerDown { x, y } => {
                self.input.on_pointer_down(x, y);
                EventOutcome::Handled
            }
            CanvasEvent::PointerMove { x, y } => {
                self.input.on_pointer_move(x, y);
                EventOutcome::Handled
            }
            CanvasEvent::PointerUp { x, y } => {
                self.input.on_pointer_up(x, y);
                EventOutcome::Handled
            }
            CanvasEvent::Key { key } => {
                if self.input.on_key_press(key) {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
            CanvasEvent::PaletteClick { id } => match self.palette_click(&id) {
                Some(_) => EventOutcome::Handled,
                None => EventOutcome::Ignored,
            },
            CanvasEvent::DragOver => EventOutcome::DropEffect(self.drag_over()),
            CanvasEvent::Drop { x, y, payload } => match self.drop_icon(x, y, &payload) {
                Some(id) => EventOutcome::Dropped(id),
                None => EventOutcome::Ignored,
            },
            CanvasEvent::Resize { width, height } => {
                self.resize(Viewport::new(width, height));
                EventOutcome::Handled
            }
            CanvasEvent::Clear => {
                self.clear();
                EventOutcome::Handled
            }
            CanvasEvent::Export { path } => {
                let written = match path {
                    Some(path) => self.export_to(&path)?,
                    None => self.export()?,
                };
                EventOutcome::Exported(written)
            }
            CanvasEvent::Dispose => {
                self.dispose();
                EventOutcome::Handled
            }
        };
        Ok(outcome)
    }

    /// Convenience for switching tools from outside the event stream.
    pub fn set_tool(&mut self, tool: Tool) {
        self.input.set_tool(tool);
    }

    fn accepts(&self, event: &CanvasEvent) -> bool {
        match event {
            CanvasEvent::Resize { .. } => self.has_listener(Listener::Resize),
            CanvasEvent::Drop { .. } => self.has_listener(Listener::Drop),
            CanvasEvent::DragOver => self.has_listener(Listener::DragOver),
            _ => self.is_mounted(),
        }
    }
}
