use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{InputAction, SearchInput, single_line};

impl SearchInput<'_> {
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => InputAction::Clear,
            (KeyCode::Enter, _) | (KeyCode::Char('m' | 'j'), KeyModifiers::CONTROL) => {
                InputAction::Submit
            }

            (KeyCode::Up, KeyModifiers::NONE) => InputAction::SuggestionPrev,
            (KeyCode::Down, KeyModifiers::NONE) => InputAction::SuggestionNext,

            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.is_empty() {
                    InputAction::Continue
                } else {
                    self.clear();
                    InputAction::Edited
                }
            }

            _ => {
                if self.textarea.input(key) {
                    InputAction::Edited
                } else {
                    InputAction::Continue
                }
            }
        }
    }

    pub fn handle_paste(&mut self, text: &str) -> InputAction {
        let text = single_line(text);
        if !text.is_empty() && self.textarea.insert_str(text) {
            InputAction::Edited
        } else {
            InputAction::Continue
        }
    }
}
