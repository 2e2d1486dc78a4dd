use crate::app::state::Modal;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, modal: &Modal) {
    let body_lines = modal.body.lines().count() as u16;
    let height = (body_lines + 6).min(frame.area().height);
    let area = layout::centered(frame.area(), 48, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(Span::styled(format!(" {} ", modal.title), Theme::title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // body
        Constraint::Length(1), // spacer
        Constraint::Length(1), // buttons
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(modal.body.as_str())
            .style(Theme::text())
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let mut spans: Vec<Span> = Vec::new();
    for (index, (label, _)) in modal.buttons.iter().enumerate() {
        let style = if index == modal.selected {
            Theme::button_focused()
        } else {
            Theme::button()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        chunks[2],
    );
}
