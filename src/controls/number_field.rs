//! Free-text numeric entry
//!
//! Unlike a stepper, this field holds whatever the user typed; callers
//! decide what to do when the text does not parse. The tab limit field
//! relies on that: bad input is simply never written back.

use super::FocusState;

/// State for a numeric text field
#[derive(Debug, Clone)]
pub struct NumberFieldState {
    /// Raw text as typed
    pub text: String,
    /// Label displayed before the field
    pub label: String,
    /// Cursor position in bytes
    pub cursor: usize,
    /// Focus state
    pub focus: FocusState,
}

impl NumberFieldState {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        let text = value.to_string();
        Self {
            cursor: text.len(),
            text,
            label: label.into(),
            focus: FocusState::Normal,
        }
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Replace the text with a value
    pub fn set_value(&mut self, value: i64) {
        self.text = value.to_string();
        self.cursor = self.text.len();
    }

    /// Replace the text verbatim
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// The trimmed text parsed as an integer, if it parses
    pub fn parsed(&self) -> Option<i64> {
        self.text.trim().parse::<i64>().ok()
    }

    /// Insert a character at the cursor; only digits and '-' are accepted
    pub fn insert_char(&mut self, c: char) {
        if !self.is_enabled() {
            return;
        }
        if c.is_ascii_digit() || c == '-' {
            self.text.insert(self.cursor, c);
            self.cursor += c.len_utf8();
        }
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if !self.is_enabled() || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
    }

    /// Move the cursor left one character
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor right one character
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += 1;
        }
    }
}
