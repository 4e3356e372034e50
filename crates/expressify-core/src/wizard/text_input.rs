//! Single-line text entry

use super::input::{Input, Widget};
use colored::Colorize;

/// Editable text buffer with a cursor (counted in chars)
pub struct TextInput {
    prompt: &'static str,
    placeholder: &'static str,
    input: String,
    cursor_position: usize,
    focused: bool,
}

impl TextInput {
    pub fn new(prompt: &'static str, placeholder: &'static str) -> Self {
        Self {
            prompt,
            placeholder,
            input: String::new(),
            cursor_position: 0,
            focused: false,
        }
    }

    /// Start accepting edits
    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor_position);
        self.input.insert(at, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_offset(self.cursor_position);
            self.input.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}

impl Widget for TextInput {
    fn handle_input(&mut self, input: Input) {
        if !self.focused {
            return;
        }

        match input {
            Input::Char(c) => self.insert_char(c),
            Input::Backspace => self.delete_char(),
            Input::Left => self.move_cursor_left(),
            Input::Right => self.move_cursor_right(),
            _ => {}
        }
    }

    fn render(&self) -> String {
        let field = if self.input.is_empty() {
            let cursor = if self.focused {
                " ".reversed().to_string()
            } else {
                String::new()
            };
            format!("{}{}", cursor, self.placeholder.dimmed())
        } else if self.focused {
            let at = self.byte_offset(self.cursor_position);
            let (before, rest) = self.input.split_at(at);
            let mut rest = rest.chars();
            let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
            format!("{}{}{}", before, under.reversed(), rest.as_str())
        } else {
            self.input.clone()
        };

        format!("{}\n\n> {}", self.prompt.cyan().bold(), field)
    }

    fn is_complete(&self) -> bool {
        true
    }
}
