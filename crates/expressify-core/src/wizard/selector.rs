//! Single-choice list over one option catalog

use super::input::{Input, Widget};
use crate::catalog::OptionSet;
use colored::Colorize;
use std::marker::PhantomData;

/// Highlight and filter state for choosing one `T`
///
/// Typing narrows the list to labels containing the filter text (ignoring
/// case). When nothing matches, nothing is highlighted.
pub struct Selector<T: OptionSet> {
    filter: String,
    cursor: usize,
    _options: PhantomData<T>,
}

impl<T: OptionSet> Selector<T> {
    pub fn new() -> Self {
        Self {
            filter: String::new(),
            cursor: 0,
            _options: PhantomData,
        }
    }

    /// Options matching the current filter, in catalog order
    pub fn visible(&self) -> Vec<T> {
        let needle = self.filter.to_lowercase();
        T::ALL
            .iter()
            .copied()
            .filter(|option| option.label().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn highlighted(&self) -> Option<T> {
        self.visible().get(self.cursor).copied()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    pub fn previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            len - 1
        } else {
            self.cursor - 1
        };
    }

    fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.cursor = 0;
    }

    fn pop_filter(&mut self) {
        if self.filter.pop().is_some() {
            self.cursor = 0;
        }
    }
}

impl<T: OptionSet> Default for Selector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: OptionSet> Widget for Selector<T> {
    fn handle_input(&mut self, input: Input) {
        match input {
            Input::Up => self.previous(),
            Input::Down => self.next(),
            Input::Char(c) => self.push_filter(c),
            Input::Backspace => self.pop_filter(),
            _ => {}
        }
    }

    fn render(&self) -> String {
        let mut lines = vec![T::PROMPT.cyan().bold().to_string(), String::new()];

        if !self.filter.is_empty() {
            lines.push(format!("{} {}", "Filter:".dimmed(), self.filter));
        }

        let visible = self.visible();
        if visible.is_empty() {
            lines.push("  No matches".red().to_string());
        }

        for (i, option) in visible.iter().enumerate() {
            if i == self.cursor {
                lines.push(format!("{} {}", "▶".yellow(), option.label().yellow().bold()));
            } else {
                lines.push(format!("  {}", option.label()));
            }
        }

        lines.join("\n")
    }

    fn is_complete(&self) -> bool {
        self.highlighted().is_some()
    }
}
