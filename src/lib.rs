//! Library exports for the sketchboard canvas engine.
//!
//! The canvas is headless: [`host::CanvasHost`] owns the scene and the input
//! state machine, and everything that reaches it (pointer gestures, toolbar
//! actions, palette drops) arrives as plain method calls or
//! [`host::CanvasEvent`]s. Rendering and PNG export go through Cairo.

pub mod config;
pub mod draw;
pub mod host;
pub mod icons;
pub mod input;
pub mod notice;
pub mod util;

pub use config::Config;
pub use host::{CanvasEvent, CanvasHost, Viewport};
