use crate::app::state::{AppState, LoginField};
use crate::forms;
use crate::session;
use crate::ui::theme::Theme;
use crate::ui::{layout, widgets};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let login = &state.login;
    let form_opacity = login.form_opacity.value();
    // The form slides up as its spring settles: 30 -> 0 maps to a shrinking
    // top margin.
    let slide = (login.form_offset.value() / 10.0).round().max(0.0) as u16;

    let card_width = 52u16.min(area.width.saturating_sub(2));
    let card = layout::centered(area, card_width, 22.min(area.height));
    let card = Rect {
        y: (card.y + slide).min(area.bottom().saturating_sub(1)),
        height: card.height.saturating_sub(slide),
        ..card
    };

    let title = if login.sign_up { "Create Account" } else { "Sign In" };
    let block = Block::default()
        .title(format!(" SkillSwap · {title} "))
        .title_style(Theme::faded(Theme::title(), login.logo_opacity.value()))
        .borders(Borders::ALL)
        .border_style(Theme::faded(Theme::border_focused(), form_opacity));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::vertical([
        Constraint::Length(1), // subtitle
        Constraint::Length(3), // email
        Constraint::Length(1), // email hint
        Constraint::Length(3), // password
        Constraint::Length(1), // password hint
        Constraint::Length(1),
        Constraint::Length(1), // submit
        Constraint::Length(1),
        Constraint::Length(1), // mode switch hint
        Constraint::Length(1),
        Constraint::Min(3), // demo credentials
    ])
    .split(inner);

    let subtitle = if login.sign_up {
        "Join our community of learners"
    } else {
        "Welcome back to your journey"
    };
    frame.render_widget(
        Paragraph::new(subtitle)
            .style(Theme::faded(Theme::text_secondary(), form_opacity))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let show_cursor = state.modal.is_none() && !login.loading;
    widgets::text_field(
        frame,
        chunks[1],
        &login.email,
        "Email Address",
        login.focus == LoginField::Email,
        false,
        show_cursor && login.focus == LoginField::Email,
    );
    if !login.email.text.is_empty() && !forms::email_valid(&login.email.text) {
        frame.render_widget(
            Paragraph::new("Please enter a valid email.").style(Theme::hint()),
            chunks[2],
        );
    }

    widgets::text_field(
        frame,
        chunks[3],
        &login.password,
        if login.show_password {
            "Password (visible, Ctrl+P hides)"
        } else {
            "Password"
        },
        login.focus == LoginField::Password,
        !login.show_password,
        show_cursor && login.focus == LoginField::Password,
    );
    if !login.password.text.is_empty() && !forms::password_valid(&login.password.text) {
        frame.render_widget(
            Paragraph::new("Minimum 4 characters.").style(Theme::hint()),
            chunks[4],
        );
    }

    let submit_label = match (login.loading, login.sign_up) {
        (true, false) => "Signing in...",
        (true, true) => "Creating account...",
        (false, false) => "Sign In  ⏎",
        (false, true) => "Create Account  ⏎",
    };
    widgets::button(frame, chunks[6], submit_label, !login.loading);

    let switch_hint = if login.sign_up {
        "Already have an account? Press F2 to sign in"
    } else {
        "Don't have an account? Press F2 to sign up"
    };
    frame.render_widget(
        Paragraph::new(switch_hint)
            .style(Theme::faded(Theme::text_tertiary(), form_opacity))
            .alignment(Alignment::Center),
        chunks[8],
    );

    let demo = format!(
        "Demo Credentials\nEmail: {}   Password: {}",
        session::DEMO_EMAIL,
        session::DEMO_PASSWORD
    );
    frame.render_widget(
        Paragraph::new(demo)
            .style(Theme::faded(Theme::text_tertiary(), form_opacity))
            .alignment(Alignment::Center),
        chunks[10],
    );
}
