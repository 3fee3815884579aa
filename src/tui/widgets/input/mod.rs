mod action;
mod key_handler;
mod render;

pub use action::InputAction;

use crate::ui::theme::Theme;
use ratatui::style::Style;
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Type a country name";

/// Single-line search box.
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl SearchInput<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: Self::create_textarea(vec![String::new()]),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.textarea.lines().concat()
    }

    pub fn set_text(&mut self, text: &str) {
        self.textarea = Self::create_textarea(vec![single_line(text)]);
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.textarea = Self::create_textarea(vec![String::new()]);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(String::is_empty)
    }

    fn create_textarea(lines: Vec<String>) -> TextArea<'static> {
        let mut textarea = TextArea::new(lines);
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Theme::muted());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Theme::white());
        textarea
    }
}

impl Default for SearchInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}
