use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::{Duration, Instant};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;
const FADE_WINDOW: Duration = Duration::from_millis(400);

/// Stacked in the top-right corner, newest at the bottom, dimming just
/// before they expire.
pub fn render(frame: &mut Frame, state: &AppState, now: Instant) {
    let screen = frame.area();
    if screen.width < TOAST_WIDTH + 2 {
        return;
    }
    let x = screen.right().saturating_sub(TOAST_WIDTH + 1);
    let mut y = screen.y + 1;

    for toast in state.toasts.iter() {
        if y + TOAST_HEIGHT > screen.bottom() {
            break;
        }
        let area = Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT);
        let accent = Theme::toast_accent(toast.kind);
        let expiring = toast.expires_at.saturating_duration_since(now) < FADE_WINDOW;
        let mut style = Style::default().fg(accent);
        if expiring {
            style = style.add_modifier(Modifier::DIM);
        }

        frame.render_widget(Clear, area);
        let block = Block::default().borders(Borders::ALL).border_style(style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut text_style = Theme::text();
        if expiring {
            text_style = text_style.add_modifier(Modifier::DIM);
        }
        let line = Line::from(vec![
            Span::styled(format!("{} ", Theme::toast_icon(toast.kind)), style),
            Span::styled(toast.message.as_str(), text_style),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        y += TOAST_HEIGHT;
    }
}
