#![allow(clippy::cast_possible_truncation)]

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Borders};

use super::SearchInput;
use crate::ui::theme::Theme;

impl SearchInput<'_> {
    pub fn render(&self, area: Rect, frame: &mut Frame, focused: bool) {
        let border_style = if focused {
            Theme::primary()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .border_set(ratatui::symbols::border::ROUNDED)
            .title(" Search ");

        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(&self.textarea, inner);

        if focused {
            let (_, cursor_col) = self.textarea.cursor();
            let x = (inner.x + cursor_col as u16).min(inner.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
