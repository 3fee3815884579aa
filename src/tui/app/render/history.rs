#![allow(clippy::cast_possible_truncation)]

use crate::tui::view::{Focus, TerminalView};
use crate::ui::theme::{BoxChars, Theme};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

const DELETE_MARK: &str = "✕";

pub fn render_history(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let focused = view.focus() == Focus::History;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { Theme::primary() } else { Theme::border() })
        .border_set(ratatui::symbols::border::ROUNDED)
        .title(format!(" History ({}) ", view.history_rows().len()));

    let row_width = block.inner(area).width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = view
        .history_rows()
        .iter()
        .map(|record| {
            let used = record.value.width() + record.time.width() + DELETE_MARK.width() + 2;
            let gap = row_width.saturating_sub(used).max(1);
            ListItem::new(Line::from(vec![
                Span::styled(record.value.as_str(), Theme::white()),
                Span::raw(" ".repeat(gap)),
                Span::styled(record.time.as_str(), Theme::muted()),
                Span::raw(" "),
                Span::styled(DELETE_MARK, Theme::error()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::secondary())
        .highlight_symbol(BoxChars::ARROW_RIGHT);

    let selected = if focused {
        view.selected_history_index()
    } else {
        None
    };
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
