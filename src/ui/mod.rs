pub mod create;
pub mod home;
pub mod layout;
pub mod login;
pub mod modal;
pub mod profile;
pub mod splash;
pub mod status_bar;
pub mod tab_bar;
pub mod theme;
pub mod toast_stack;
pub mod widgets;

use crate::app::state::{AppState, Route, Tab};
use ratatui::Frame;
use std::time::Instant;

pub fn render(frame: &mut Frame, state: &AppState, now: Instant) {
    match state.route {
        Route::Splash => splash::render(frame, state),
        Route::Login => {
            let (content, status) = layout::screen_layout(frame.area());
            login::render(frame, content, state);
            status_bar::render(frame, status, state);
        }
        Route::Tabs => {
            let chunks = layout::tabs_layout(frame.area());
            tab_bar::render(frame, chunks.tab_bar, state);
            match state.tab {
                Tab::Home => home::render(frame, chunks.content, state),
                Tab::Create => create::render(frame, chunks.content, state),
                Tab::Profile => profile::render(frame, chunks.content, state),
            }
            status_bar::render(frame, chunks.status_bar, state);
        }
    }

    toast_stack::render(frame, state, now);
    if let Some(modal) = &state.modal {
        modal::render(frame, modal);
    }
}
