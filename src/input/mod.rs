//! Input handling and tool state machine.
//!
//! This module translates pointer and keyboard events into scene mutations.
//! [`InputState`] is the single owned context: it holds the scene, the active
//! tool and color, and the per-gesture state machine.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::Key;
pub use state::{DrawingState, GestureSettings, InputState, ToolSwitchPolicy};
pub use tool::{Tool, UnknownTool};
