use crate::app::state::{AppState, CreateFocus};
use crate::feed;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let create = &state.create;
    let chunks = Layout::vertical([
        Constraint::Length(2), // heading
        Constraint::Length(3), // skill
        Constraint::Length(4), // category chips
        Constraint::Length(6), // description
        Constraint::Length(1), // submit
        Constraint::Length(2), // note
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Share a Skill", Theme::title()),
            Line::styled(
                "Tell others what you can teach them",
                Theme::text_secondary(),
            ),
        ]),
        chunks[0],
    );

    let editing = state.modal.is_none() && !create.posting;
    widgets::text_field(
        frame,
        chunks[1],
        &create.skill,
        "Skill name *",
        create.focus == CreateFocus::Skill,
        false,
        editing && create.focus == CreateFocus::Skill,
    );

    render_categories(frame, chunks[2], state);

    widgets::text_field(
        frame,
        chunks[3],
        &create.description,
        "Description *",
        create.focus == CreateFocus::Description,
        false,
        editing && create.focus == CreateFocus::Description,
    );

    let label = if create.posting {
        "Posting..."
    } else {
        "Post Skill  ⏎"
    };
    let button_area = Rect {
        width: area.width.min(24),
        ..chunks[4]
    };
    widgets::button(frame, button_area, label, create.focus == CreateFocus::Submit);

    frame.render_widget(
        Paragraph::new("* Required fields").style(Theme::text_tertiary()),
        chunks[5],
    );
}

fn render_categories(frame: &mut Frame, area: Rect, state: &AppState) {
    let create = &state.create;
    let focused = create.focus == CreateFocus::Category;
    let title_style = if focused {
        Theme::label()
    } else {
        Theme::text_secondary()
    };
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(2)]).split(area);
    frame.render_widget(Paragraph::new("Category *").style(title_style), rows[0]);

    let mut spans: Vec<Span> = Vec::new();
    for (index, (_, label)) in feed::CATEGORIES.iter().enumerate() {
        let style = if create.category == Some(index) {
            Theme::chip_selected()
        } else if focused && index == create.category_cursor {
            Theme::chip_cursor()
        } else {
            Theme::chip()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(ratatui::widgets::Wrap { trim: false }),
        rows[1],
    );
}
