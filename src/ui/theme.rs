use crate::toast::ToastKind;
use ratatui::style::{Color, Modifier, Style};

/// Ocean palette, mapped onto terminal colors.
pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn text_tertiary() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_title() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn card_selected() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn category_badge() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn chip() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn chip_selected() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn chip_cursor() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn tab_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn logo() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Dim a style by an animated opacity in [0, 1]. Terminals have no real
    /// alpha, so this quantizes: invisible below 0.15, dim below 0.7, full
    /// otherwise.
    pub fn faded(style: Style, opacity: f32) -> Style {
        if opacity < 0.15 {
            Style::default().fg(Color::Reset).add_modifier(Modifier::HIDDEN)
        } else if opacity < 0.7 {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    /// Skeleton shimmer shade for a value oscillating in [0.3, 1.0].
    pub fn shimmer_color(value: f32) -> Color {
        if value < 0.5 {
            Color::DarkGray
        } else if value < 0.8 {
            Color::Gray
        } else {
            Color::White
        }
    }

    /// Progress bar color, stepping error -> warning -> info -> success as
    /// the bar fills.
    pub fn progress_color(value: f32) -> Color {
        if value < 0.3 {
            Color::Red
        } else if value < 0.7 {
            Color::Yellow
        } else if value < 1.0 {
            Color::Blue
        } else {
            Color::Green
        }
    }

    pub fn toast_accent(kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Warning => Color::Yellow,
            ToastKind::Info => Color::Cyan,
        }
    }

    pub fn toast_icon(kind: ToastKind) -> &'static str {
        match kind {
            ToastKind::Success => "✔",
            ToastKind::Error => "✘",
            ToastKind::Warning => "!",
            ToastKind::Info => "i",
        }
    }
}
