use crate::app::state::{AppState, FeedPhase, HomeFocus};
use crate::feed;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const CARD_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // header
        Constraint::Length(3), // search
        Constraint::Min(4),    // cards
    ])
    .split(area);

    match state.home.phase {
        FeedPhase::Loading => render_skeleton(frame, &chunks, state),
        FeedPhase::Ready => render_feed(frame, &chunks, state),
    }
}

fn render_skeleton(frame: &mut Frame, chunks: &[Rect], state: &AppState) {
    let shimmer = state.home.shimmer.value();
    let header_rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
        .split(chunks[0]);
    widgets::skeleton_line(frame, header_rows[0], shimmer, chunks[0].width * 7 / 10);
    widgets::skeleton_line(frame, header_rows[1], shimmer, chunks[0].width / 2);
    widgets::skeleton_line(frame, chunks[1], shimmer, chunks[1].width);

    let mut y = chunks[2].y;
    while y + CARD_HEIGHT <= chunks[2].bottom() {
        let card = Rect::new(chunks[2].x, y, chunks[2].width, CARD_HEIGHT);
        render_skeleton_card(frame, card, shimmer);
        y += CARD_HEIGHT;
    }
}

fn render_skeleton_card(frame: &mut Frame, area: Rect, shimmer: f32) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);
    widgets::skeleton_line(frame, rows[0], shimmer, inner.width * 6 / 10);
    widgets::skeleton_line(frame, rows[1], shimmer, inner.width * 4 / 10);
    widgets::skeleton_line(frame, rows[2], shimmer, inner.width);
    widgets::skeleton_line(frame, rows[3], shimmer, inner.width * 3 / 10);
}

fn render_feed(frame: &mut Frame, chunks: &[Rect], state: &AppState) {
    let home = &state.home;
    let user = state.session.expect_user();

    let header_style = Theme::faded(Theme::text_secondary(), home.header_opacity.value());
    let title_style = Theme::faded(Theme::title(), home.header_opacity.value());
    let header = vec![
        Line::styled(format!("Welcome back, {}!", user.first_name()), header_style),
        Line::styled("Discover Skills", title_style),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let search_focused = home.focus == HomeFocus::Search;
    let title = if home.refreshing {
        "Search skills... (refreshing)"
    } else {
        "Search skills..."
    };
    widgets::text_field(
        frame,
        chunks[1],
        &home.search,
        title,
        search_focused,
        false,
        search_focused && state.modal.is_none(),
    );

    if home.visible.is_empty() {
        frame.render_widget(
            Paragraph::new(format!("No skills match \"{}\"", home.search.text.trim()))
                .style(Theme::text_secondary())
                .alignment(Alignment::Center),
            chunks[2],
        );
        return;
    }

    let list_opacity = home.list_opacity.value();
    let mut y = chunks[2].y;
    for (pos, &offer_index) in home.visible.iter().enumerate() {
        if y + CARD_HEIGHT > chunks[2].bottom() {
            break;
        }
        let card_area = Rect::new(chunks[2].x, y, chunks[2].width, CARD_HEIGHT);
        let fade = home
            .card_fades
            .get(pos)
            .map(|f| f.value())
            .unwrap_or(1.0)
            .min(list_opacity);
        let selected = home.focus == HomeFocus::List && pos == home.selected;
        render_card(frame, card_area, &feed::OFFERS[offer_index], fade, selected);
        y += CARD_HEIGHT;
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    offer: &feed::SkillOffer,
    opacity: f32,
    selected: bool,
) {
    let border = if selected {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::faded(border, opacity));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let title_line = Line::from(vec![
        Span::styled(offer.skill, Theme::faded(Theme::card_title(), opacity)),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", offer.category),
            Theme::faded(Theme::category_badge(), opacity),
        ),
    ]);
    frame.render_widget(Paragraph::new(title_line), rows[0]);

    frame.render_widget(
        Paragraph::new(format!("Offered by {}", offer.user))
            .style(Theme::faded(Theme::text_secondary(), opacity)),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(offer.description).style(Theme::faded(Theme::text(), opacity)),
        rows[2],
    );

    let footer = Line::from(vec![
        Span::styled("★ 4.8", Theme::faded(Theme::text_tertiary(), opacity)),
        Span::raw("  "),
        Span::styled(
            if selected { "Learn More ⏎" } else { "" },
            Theme::faded(Theme::card_selected(), opacity),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), rows[3]);
}
