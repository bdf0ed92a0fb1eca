mod core;
mod keys;
mod mouse;
mod tool_config;

#[cfg(test)]
mod tests;

pub use self::core::{DrawingState, GestureSettings, InputState, TextEdit, ToolSwitchPolicy};
