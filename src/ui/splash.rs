use crate::app::state::AppState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const LOGO: &[&str] = &[
    r"  _______ ",
    r" ~~~~~~~~~",
    r"~~ ≈≈≈≈ ~~",
    r" ~~~~~~~~~",
];

/// Logo pops in past its resting size, then name and tagline fade in.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = layout::centered(frame.area(), 46, 12);
    let chunks = Layout::vertical([
        Constraint::Length(LOGO.len() as u16 + 1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .split(area);

    // Scale is rendered as a progressive reveal of the logo rows.
    let scale = state.splash.logo_scale.value().clamp(0.0, 1.0);
    let rows = ((LOGO.len() as f32) * scale).round() as usize;
    let logo_style = Theme::faded(Theme::logo(), state.splash.logo_opacity.value());
    let lines: Vec<Line> = LOGO[..rows.min(LOGO.len())]
        .iter()
        .map(|l| Line::styled(*l, logo_style))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new("SkillSwap")
            .style(Theme::faded(Theme::title(), state.splash.name_opacity.value()))
            .alignment(Alignment::Center),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new("Dive Deep • Share Skills • Rise Together")
            .style(Theme::faded(
                Theme::text_secondary(),
                state.splash.tagline_opacity.value(),
            ))
            .alignment(Alignment::Center),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new("press Enter to skip")
            .style(Theme::text_tertiary())
            .alignment(Alignment::Center),
        chunks[4],
    );
}
