use crate::tui::view::Focus;
use crate::ui::theme::{Spinners, Theme};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Copy)]
pub struct StatusInfo {
    pub fetching: bool,
    pub spinner_frame: usize,
    pub suggestion_count: usize,
    pub no_suggestions: bool,
    pub focus: Focus,
}

pub fn render_status(frame: &mut Frame, area: Rect, status: StatusInfo) {
    let hints = match status.focus {
        Focus::Input => "↑↓ pick | ↵ select | Esc clear | Tab history | ^C quit",
        Focus::History => "↑↓ move | d delete | C clear all | Tab search | ^C quit",
    };

    let left_line = Line::from(vec![Span::raw(" "), Span::styled(hints, Theme::muted())]);
    let left_len = (left_line.width() + 1) as u16;
    frame
        .buffer_mut()
        .set_line(area.x, area.y, &left_line, left_len.min(area.width));

    let right = if status.fetching {
        let frames = Spinners::BRAILLE;
        let frame_char = frames[status.spinner_frame % frames.len()];
        Some(Span::styled(format!("{frame_char} Searching"), Theme::warning()))
    } else if status.no_suggestions {
        Some(Span::styled("No suggestions found", Theme::error()))
    } else if status.suggestion_count > 0 {
        Some(Span::styled(
            format!("{} suggestions", status.suggestion_count),
            Theme::success(),
        ))
    } else {
        None
    };

    if let Some(span) = right {
        let right_line = Line::from(vec![span, Span::raw(" ")]);
        let status_len = (right_line.width() + 1) as u16;
        let status_x = area.x + area.width.saturating_sub(status_len);
        frame
            .buffer_mut()
            .set_line(status_x, area.y, &right_line, status_len);
    }
}
