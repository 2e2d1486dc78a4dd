use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(index, tab)| Line::from(format!("F{} {}", index + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .style(Theme::tab_inactive())
        .highlight_style(Theme::tab_active())
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Theme::border()),
        );
    frame.render_widget(tabs, area);
}
