use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct TabsLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn tabs_layout(area: Rect) -> TabsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab bar
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    TabsLayout {
        tab_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

/// Content above a one-line status bar (login screen).
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// A centered rect of at most `width` x `height` within `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
