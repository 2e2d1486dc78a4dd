use crate::app::state::{AppState, CreateFocus, FeedPhase, HomeFocus, Route, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = hints_for(state);
    let who = state
        .session
        .user()
        .map(|user| format!(" {} ", user.name))
        .unwrap_or_default();

    // Display widths, not byte lengths; the hints carry wide glyphs.
    let pad = (area.width as usize).saturating_sub(hints.width() + who.width() + 1);
    let line = Line::from(vec![
        Span::styled(format!(" {hints}"), Theme::status_bar()),
        Span::styled(" ".repeat(pad), Theme::status_bar()),
        Span::styled(who, Theme::status_bar().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn hints_for(state: &AppState) -> &'static str {
    if state.modal.is_some() {
        return "←/→ select  ⏎ choose  Esc close";
    }
    match state.route {
        Route::Splash => "⏎ skip  Ctrl+C quit",
        Route::Login => "Tab fields  F2 switch mode  Ctrl+P show password  ⏎ submit  Ctrl+C quit",
        Route::Tabs => match state.tab {
            Tab::Home => match (state.home.phase, state.home.focus) {
                (FeedPhase::Loading, _) => "loading...  Ctrl+C quit",
                (_, HomeFocus::Search) => "type to filter  ⏎/Esc to list  Ctrl+C quit",
                (_, HomeFocus::List) => {
                    "↑/↓ select  ⏎ details  / search  r refresh  n new post  Ctrl+C quit"
                }
            },
            Tab::Create => match state.create.focus {
                CreateFocus::Category => "←/→ pick  Space select  Tab next  Ctrl+C quit",
                CreateFocus::Submit => "⏎ post  Tab next  Ctrl+C quit",
                _ => "type  Tab next field  Ctrl+C quit",
            },
            Tab::Profile => "e edit profile  l log out  Ctrl+C quit",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    #[test]
    fn user_name_sits_flush_with_the_right_edge() {
        let now = Instant::now();
        let mut config = AppConfig::default();
        config.ui.animations = false;
        config.ui.splash = false;
        let mut state = AppState::new(config, now);
        assert!(state.session.login("test@student.com", "12345"));
        state.set_route(Route::Tabs, now);
        // Ready feed with search focus: these hints carry wide glyphs.
        state.home.phase = FeedPhase::Ready;

        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..80u16)
            .filter_map(|x| buffer.cell((x, 0)).map(|c| c.symbol()))
            .collect();
        // " Alice Example " is 15 columns wide, so it occupies the last 15
        // cells exactly; a byte-based pad would land it short of the edge.
        let cell = |x: u16| buffer.cell((x, 0)).unwrap().symbol();
        assert_eq!(cell(66), "A", "status row was {row:?}");
        assert_eq!(cell(78), "e", "status row was {row:?}");
        assert_eq!(cell(79), " ", "status row was {row:?}");
    }
}
