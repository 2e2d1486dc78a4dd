//! Shared building blocks: text fields, buttons, progress bars, skeletons.

use crate::forms::TextField;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Single- or multi-line input with a border, label title, and optional
/// masking. Places the terminal cursor when `show_cursor` is set.
pub fn text_field(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    title: &str,
    focused: bool,
    masked: bool,
    show_cursor: bool,
) {
    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(if focused { Theme::label() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let display = if masked {
        "•".repeat(field.text.chars().count())
    } else {
        field.text.clone()
    };
    let lines: Vec<Line> = display
        .split('\n')
        .map(|l| Line::styled(l.to_string(), Theme::input_text()))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused && show_cursor && inner.width > 0 && inner.height > 0 {
        let (row, col) = cursor_position(field, masked);
        let x = (inner.x + col).min(inner.right().saturating_sub(1));
        let y = (inner.y + row).min(inner.bottom().saturating_sub(1));
        frame.set_cursor_position((x, y));
    }
}

fn cursor_position(field: &TextField, masked: bool) -> (u16, u16) {
    let before = &field.text[..field.cursor];
    if masked {
        // Mask bullets are one column each.
        return (0, before.chars().count() as u16);
    }
    let row = before.matches('\n').count() as u16;
    let col = before.rsplit('\n').next().unwrap_or("").width() as u16;
    (row, col)
}

pub fn button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };
    let paragraph = Paragraph::new(format!(" {label} "))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Animated progress bar with a label line above; `value` is the current
/// animated fill in [0, 1]. Expects a two-row area.
pub fn progress_bar(frame: &mut Frame, area: Rect, label: &str, value: f32) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
    frame.render_widget(
        Paragraph::new(label).style(Theme::text_secondary()),
        chunks[0],
    );
    let ratio = value.clamp(0.0, 1.0) as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Theme::progress_color(value)))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    frame.render_widget(gauge, chunks[1]);
}

/// One shimmering placeholder line. `shimmer` oscillates in [0.3, 1.0].
pub fn skeleton_line(frame: &mut Frame, area: Rect, shimmer: f32, width: u16) {
    let width = width.min(area.width) as usize;
    let paragraph = Paragraph::new("░".repeat(width))
        .style(Style::default().fg(Theme::shimmer_color(shimmer)));
    frame.render_widget(paragraph, area);
}
