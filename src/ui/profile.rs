use crate::app::state::{AppState, PROFILE_STATS};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.profile;
    let user = state.session.expect_user();

    let chunks = Layout::vertical([
        Constraint::Length(4), // avatar + identity
        Constraint::Length(2), // bio
        Constraint::Length(2), // skills offered
        Constraint::Length(2), // skills wanted
        Constraint::Min(2),    // stats
    ])
    .split(area);

    render_header(frame, chunks[0], state);

    let content = Theme::faded(Theme::text(), profile.content_opacity.value());
    let secondary = Theme::faded(Theme::text_secondary(), profile.content_opacity.value());
    frame.render_widget(Paragraph::new(user.bio.as_str()).style(content), chunks[1]);

    frame.render_widget(
        Paragraph::new(Line::from(chip_row(
            "Offers:",
            &user.skills_offered,
            content,
            secondary,
        ))),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(Line::from(chip_row(
            "Wants:",
            &user.skills_wanted,
            content,
            secondary,
        ))),
        chunks[3],
    );

    render_stats(frame, chunks[4], state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.profile;
    let user = state.session.expect_user();

    let header = Theme::faded(Theme::title(), profile.header_opacity.value());
    // The avatar pulse breathes between 1.0 and 1.05; render it as a pad
    // toggle since cells cannot scale.
    let pulsing = profile.avatar_pulse.value() > 1.02;
    let avatar_style = Theme::faded(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        profile.avatar_scale.value(),
    );
    let initials = if pulsing {
        format!("  {}  ", user.initials())
    } else {
        format!(" {} ", user.initials())
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(initials, avatar_style),
            Span::raw("  "),
            Span::styled(user.name.as_str(), header),
        ]),
        Line::from(vec![
            Span::raw("      "),
            Span::styled(
                user.email.as_str(),
                Theme::faded(Theme::text_secondary(), profile.header_opacity.value()),
            ),
        ]),
        Line::raw(""),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn chip_row<'a>(
    label: &'a str,
    skills: &'a [String],
    content: Style,
    secondary: Style,
) -> Vec<Span<'a>> {
    let mut spans = vec![Span::styled(label, secondary), Span::raw(" ")];
    for skill in skills {
        spans.push(Span::styled(format!(" {skill} "), content.bg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    spans
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.profile;
    let mut y = area.y;
    for (index, (label, _)) in PROFILE_STATS.iter().enumerate() {
        if y + 2 > area.bottom() {
            break;
        }
        let fill = profile
            .stat_fills
            .get(index)
            .map(|anim| anim.value())
            .unwrap_or(0.0);
        let row = Rect::new(area.x, y, area.width.min(48), 2);
        widgets::progress_bar(frame, row, label, fill);
        y += 3;
    }
}
