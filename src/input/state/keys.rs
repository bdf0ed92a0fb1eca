use super::InputState;
use crate::draw::Shape;
use crate::input::events::Key;
use crate::input::tool::Tool;

impl InputState {
    /// Processes a key press.
    ///
    /// While a text object is in edit mode every key goes to the text. Outside
    /// edit mode letters switch tools and Delete/Backspace remove the active
    /// object. Returns whether the key did anything.
    pub fn on_key_press(&mut self, key: Key) -> bool {
        if self.editing.is_some() {
            return self.edit_text(key);
        }

        match key {
            Key::Char(c) => match Tool::from_hotkey(c) {
                Some(tool) => {
                    self.set_tool(tool);
                    true
                }
                None => false,
            },
            Key::Delete | Key::Backspace => self.delete_active_object(),
            Key::Escape => {
                if self.scene.active_object().is_some() {
                    self.scene.discard_active_object();
                    self.scene.request_render();
                    true
                } else {
                    false
                }
            }
            Key::Return | Key::Unknown => false,
        }
    }

    /// Removes the active object, if there is one.
    pub fn delete_active_object(&mut self) -> bool {
        let Some(id) = self.scene.active_object() else {
            return false;
        };
        if self.scene.remove(id).is_some() {
            log::info!("Deleted {}", id);
            self.scene.request_render();
            true
        } else {
            false
        }
    }

    fn edit_text(&mut self, key: Key) -> bool {
        let Some(mut edit) = self.editing else {
            return false;
        };
        if key == Key::Escape {
            self.exit_text_editing();
            return true;
        }

        let Some(Shape::Text { text, .. }) = self
            .scene
            .get_mut(edit.id)
            .map(|object| &mut object.shape)
        else {
            // Object vanished underneath us
            self.editing = None;
            return false;
        };

        let handled = match key {
            Key::Char(c) => {
                insert_char(text, c, edit.replace_on_type);
                true
            }
            Key::Return => {
                insert_char(text, '\n', edit.replace_on_type);
                true
            }
            Key::Backspace | Key::Delete if edit.replace_on_type => {
                text.clear();
                true
            }
            Key::Backspace => text.pop().is_some(),
            // Caret sits at the end, nothing to delete forward
            Key::Delete => false,
            Key::Escape | Key::Unknown => false,
        };

        if handled {
            edit.replace_on_type = false;
            self.editing = Some(edit);
            self.scene.request_render();
        }
        handled
    }
}

fn insert_char(text: &mut String, c: char, replace: bool) {
    if replace {
        text.clear();
    }
    text.push(c);
}
