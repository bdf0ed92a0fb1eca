//! Scene model and rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types used by the canvas:
//! - [`Color`]: RGBA color representation with the toolbar palette
//! - [`Shape`]: Drawable primitives (lines, rectangles, circles, text, groups)
//! - [`Scene`]: Z-ordered object list plus canvas-wide interaction state
//! - [`Brush`]: Freehand brush used by the draw and eraser tools
//! - Rendering functions for Cairo-based output

pub mod brush;
pub mod color;
pub mod font;
pub mod render;
pub mod scene;
pub mod shape;

// Re-export commonly used types at module level
pub use brush::Brush;
pub use color::{Color, ColorParseError};
pub use font::FontDescriptor;
pub use render::{render_scene, render_shape, render_text};
pub use scene::{ObjectId, ObjectKind, Scene, SceneObject};
pub use shape::{Shape, Style};

pub use color::{BACKGROUND, BLACK, BLUE, GREEN, GRID, ORANGE, PURPLE, RED, WHITE, YELLOW};
