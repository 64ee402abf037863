//! Single-line text entry used while naming a note or typing a bookmark URL.
//!
//! `cursor` is a byte offset into `value` and always lands on a char boundary.

use crate::kernel::action::InputAction;

pub const INPUT_CHAR_LIMIT: usize = 80;

#[derive(Debug, Clone)]
pub struct InputFieldState {
    value: String,
    cursor: usize,
    placeholder: &'static str,
    focused: bool,
    char_limit: usize,
}

impl Default for InputFieldState {
    fn default() -> Self {
        Self::new(INPUT_CHAR_LIMIT)
    }
}

impl InputFieldState {
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: "",
            focused: false,
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn focus(&mut self, placeholder: &'static str) {
        self.placeholder = placeholder;
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Empties the buffer; placeholder and focus are left alone.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn apply(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Insert(ch) => self.insert_char(ch),
            InputAction::Paste(text) => self.insert_str(&text),
            InputAction::Backspace => self.backspace(),
            InputAction::Delete => self.delete(),
            InputAction::Left => self.move_to(self.prev_boundary()),
            InputAction::Right => self.move_to(self.next_boundary()),
            InputAction::Home => self.move_to(0),
            InputAction::End => self.move_to(self.value.len()),
            InputAction::ClearToStart => {
                if self.cursor == 0 {
                    return false;
                }
                self.value.drain(..self.cursor);
                self.cursor = 0;
                true
            }
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() || self.char_count() >= self.char_limit {
            return false;
        }
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        true
    }

    fn insert_str(&mut self, text: &str) -> bool {
        let room = self.char_limit.saturating_sub(self.char_count());
        let accepted: String = text
            .chars()
            .filter(|ch| !ch.is_control())
            .take(room)
            .collect();
        if accepted.is_empty() {
            return false;
        }
        self.value.insert_str(self.cursor, &accepted);
        self.cursor += accepted.len();
        true
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        let next = self.next_boundary();
        self.value.drain(self.cursor..next);
        true
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
            .unwrap_or(self.value.len())
    }

    fn move_to(&mut self, cursor: usize) -> bool {
        let changed = cursor != self.cursor;
        self.cursor = cursor;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/input_field.rs"]
mod tests;
