use crate::core::view::SearchView;
use crate::tui::view::{Focus, TerminalView};
use crate::ui::theme::{BoxChars, Theme};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

const HIGHLIGHT_SYMBOL: &str = BoxChars::ARROW_RIGHT;

pub fn render_suggestions(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .border_set(ratatui::symbols::border::ROUNDED)
        .title(" Suggestions ");

    if view.suggestions().is_empty() {
        let line = if view.no_suggestions_visible() {
            Line::from(Span::styled(" No suggestions found", Theme::warning()))
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let items: Vec<ListItem> = view
        .suggestions()
        .iter()
        .map(|name| ListItem::new(Line::from(Span::styled(name.as_str(), Theme::off_white()))))
        .collect();

    let highlight = if view.focus() == Focus::Input {
        Theme::primary_bold()
    } else {
        Theme::muted()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default().with_selected(view.selected_suggestion_index());
    frame.render_stateful_widget(list, area, &mut state);
}
