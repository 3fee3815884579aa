use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct LayoutAreas {
    pub header: Rect,
    pub input: Rect,
    pub suggestions: Rect,
    pub history: Rect,
    pub status: Rect,
}

#[must_use]
pub fn calculate_layout(area: Rect) -> LayoutAreas {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    LayoutAreas {
        header: main_chunks[0],
        input: main_chunks[1],
        suggestions: body_chunks[0],
        history: body_chunks[1],
        status: main_chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_calculation() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_layout(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status.height, 1);

        let expected_body_height = 40 - 3 - 3 - 1;
        assert_eq!(layout.suggestions.height, expected_body_height);
        assert_eq!(layout.history.height, expected_body_height);
        assert_eq!(layout.suggestions.width + layout.history.width, 100);
    }

    #[test]
    fn test_layout_small_terminal() {
        let area = Rect::new(0, 0, 40, 10);
        let layout = calculate_layout(area);

        assert!(layout.suggestions.height > 0);
        assert_eq!(layout.suggestions.y, layout.history.y);
    }
}
