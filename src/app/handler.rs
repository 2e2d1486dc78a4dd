use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::feed;
use crate::forms::{self, FormError};
use crate::toast::ToastKind;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Drive the app with one event. `now` is threaded through so tests can run
/// the clock by hand; the main loop passes `Instant::now()`.
pub fn handle_event(state: &mut AppState, event: AppEvent, now: Instant) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent, now)
        }
        AppEvent::Tick => handle_tick(state, now),
    }
}

fn handle_tick(state: &mut AppState, now: Instant) -> Vec<Action> {
    let mut actions = Vec::new();
    state.tick_count = state.tick_count.wrapping_add(1);

    if state.toasts.sweep_expired(now) > 0 {
        state.dirty = true;
    }

    for kind in state.take_due_ops(now) {
        complete_op(state, kind, now, &mut actions);
        state.dirty = true;
    }

    if state.advance_animations(now) {
        state.dirty = true;
    }

    actions
}

/// A deferred op reached its deadline while its owning screen is still live.
fn complete_op(state: &mut AppState, kind: PendingKind, now: Instant, actions: &mut Vec<Action>) {
    match kind {
        PendingKind::SplashDone => {
            let route = if state.session.is_logged_in() {
                Route::Tabs
            } else {
                Route::Login
            };
            state.set_route(route, now);
        }
        PendingKind::Login {
            email,
            password,
            sign_up,
        } => {
            state.login.loading = false;
            if sign_up {
                state.session.begin_demo_session();
                state.modal = Some(Modal::with_buttons(
                    "Success",
                    "Account created! You are now logged in.",
                    vec![("OK".into(), ModalChoice::SignupOk)],
                ));
            } else if state.session.login(&email, &password) {
                state.set_route(Route::Tabs, now);
            } else {
                state.modal = Some(Modal::info(
                    "Login failed",
                    FormError::InvalidCredentials.to_string(),
                ));
            }
        }
        PendingKind::InitialLoad => {
            let animations = state.animations();
            state.home.enter_ready(now, animations);
        }
        PendingKind::Refresh => {
            state.home.refreshing = false;
            state.home.search.clear();
            state.home.apply_filter();
            let animations = state.animations();
            state.home.restart_card_fades(now, animations);
        }
        PendingKind::Post {
            skill,
            category,
            description,
        } => {
            state.create.posting = false;
            actions.push(Action::LogCreatedOffer {
                skill,
                category,
                description,
            });
            state.modal = Some(Modal::with_buttons(
                "Posted",
                "Your post was logged. Returning to Home.",
                vec![("OK".into(), ModalChoice::PostOk)],
            ));
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key, now),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // A modal captures all input while visible
    if state.modal.is_some() {
        handle_modal_key(state, key, now);
        return vec![];
    }

    match state.route {
        Route::Splash => handle_splash_key(state, key, now),
        Route::Login => handle_login_key(state, key, now),
        Route::Tabs => handle_tabs_key(state, key, now),
    }
    vec![]
}

fn handle_modal_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    let Some(modal) = state.modal.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Left | KeyCode::BackTab => {
            if modal.selected > 0 {
                modal.selected -= 1;
            }
        }
        KeyCode::Right | KeyCode::Tab => {
            if modal.selected + 1 < modal.buttons.len() {
                modal.selected += 1;
            }
        }
        KeyCode::Esc => {
            state.modal = None;
        }
        KeyCode::Enter => {
            let modal = state.modal.take().expect("modal checked above");
            let (_, choice) = &modal.buttons[modal.selected];
            activate_modal_choice(state, *choice, now);
        }
        _ => {}
    }
}

fn activate_modal_choice(state: &mut AppState, choice: ModalChoice, now: Instant) {
    match choice {
        ModalChoice::Dismiss => {}
        ModalChoice::Connect { offer } => {
            let user = feed::OFFERS[offer].user;
            state.show_toast(
                format!("Connection request sent to {user}!"),
                ToastKind::Success,
                now,
            );
        }
        ModalChoice::ConfirmLogout => {
            state.session.logout();
            state.set_route(Route::Login, now);
        }
        ModalChoice::PostOk => {
            state.create.reset();
            state.set_tab(Tab::Home, now);
        }
        ModalChoice::SignupOk => {
            state.set_route(Route::Tabs, now);
        }
    }
}

fn handle_splash_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Any of these skips straight past the splash.
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        let route = if state.session.is_logged_in() {
            Route::Tabs
        } else {
            Route::Login
        };
        state.set_route(route, now);
    }
}

fn handle_login_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    if state.login.loading {
        return;
    }
    match key.code {
        KeyCode::F(2) => {
            state.login.sign_up = !state.login.sign_up;
        }
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.login.show_password = !state.login.show_password;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.login.focused_field_mut().delete_word_back();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.login.cycle_focus();
        }
        KeyCode::Enter => submit_login(state, now),
        KeyCode::Backspace => state.login.focused_field_mut().delete_back(),
        KeyCode::Delete => state.login.focused_field_mut().delete_forward(),
        KeyCode::Left => state.login.focused_field_mut().move_left(),
        KeyCode::Right => state.login.focused_field_mut().move_right(),
        KeyCode::Home => state.login.focused_field_mut().move_home(),
        KeyCode::End => state.login.focused_field_mut().move_end(),
        KeyCode::Char(c) => state.login.focused_field_mut().insert_char(c),
        _ => {}
    }
}

fn submit_login(state: &mut AppState, now: Instant) {
    let email = state.login.email.text.clone();
    let password = state.login.password.text.clone();
    let delay = Duration::from_millis(state.config.latency.login_ms);

    if state.login.sign_up {
        match forms::validate_signup(&email, &password) {
            Ok(()) => {
                state.login.loading = true;
                state.schedule(
                    PendingKind::Login {
                        email,
                        password,
                        sign_up: true,
                    },
                    delay,
                    now,
                );
            }
            Err(e) => {
                state.modal = Some(Modal::info("Check your details", e.to_string()));
            }
        }
        return;
    }

    // Sign-in: the submit is a no-op while the shape hints are showing.
    // Whether the credentials are right is only learned after the simulated
    // round trip.
    if !forms::email_valid(&email) || !forms::password_valid(&password) {
        return;
    }
    state.login.loading = true;
    state.schedule(
        PendingKind::Login {
            email,
            password,
            sign_up: false,
        },
        delay,
        now,
    );
}

fn handle_tabs_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::F(1) => return state.set_tab(Tab::Home, now),
        KeyCode::F(2) => return state.set_tab(Tab::Create, now),
        KeyCode::F(3) => return state.set_tab(Tab::Profile, now),
        _ => {}
    }
    match state.tab {
        Tab::Home => handle_home_key(state, key, now),
        Tab::Create => handle_create_key(state, key, now),
        Tab::Profile => handle_profile_key(state, key, now),
    }
}

fn handle_home_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    if state.home.phase == FeedPhase::Loading {
        return;
    }
    match state.home.focus {
        HomeFocus::Search => handle_search_key(state, key, now),
        HomeFocus::List => handle_list_key(state, key, now),
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    let mut filter_changed = false;
    match key.code {
        KeyCode::Esc | KeyCode::Down | KeyCode::Tab | KeyCode::Enter => {
            if !state.home.visible.is_empty() {
                state.home.focus = HomeFocus::List;
            }
        }
        KeyCode::Backspace => {
            state.home.search.delete_back();
            filter_changed = true;
        }
        KeyCode::Delete => {
            state.home.search.delete_forward();
            filter_changed = true;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.home.search.delete_word_back();
            filter_changed = true;
        }
        KeyCode::Left => state.home.search.move_left(),
        KeyCode::Right => state.home.search.move_right(),
        KeyCode::Home => state.home.search.move_home(),
        KeyCode::End => state.home.search.move_end(),
        KeyCode::Char(c) => {
            state.home.search.insert_char(c);
            filter_changed = true;
        }
        _ => {}
    }
    if filter_changed {
        state.home.apply_filter();
        let animations = state.animations();
        state.home.restart_card_fades(now, animations);
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('/') | KeyCode::Esc => {
            state.home.focus = HomeFocus::Search;
        }
        KeyCode::Up => {
            if state.home.selected > 0 {
                state.home.selected -= 1;
            } else {
                state.home.focus = HomeFocus::Search;
            }
        }
        KeyCode::Down => {
            if state.home.selected + 1 < state.home.visible.len() {
                state.home.selected += 1;
            }
        }
        KeyCode::Char('r') => {
            if !state.home.refreshing {
                state.home.refreshing = true;
                let delay = Duration::from_millis(state.config.latency.refresh_ms);
                state.schedule(PendingKind::Refresh, delay, now);
            }
        }
        KeyCode::Char('n') => {
            state.show_toast("Navigating to create offer...", ToastKind::Info, now);
            state.set_tab(Tab::Create, now);
        }
        KeyCode::Enter => {
            if let Some(index) = state.home.selected_offer_index() {
                open_offer_detail(state, index, now);
            }
        }
        _ => {}
    }
}

fn open_offer_detail(state: &mut AppState, index: usize, now: Instant) {
    let offer = &feed::OFFERS[index];
    state.show_toast(
        format!("Viewing {} by {}", offer.skill, offer.user),
        ToastKind::Info,
        now,
    );
    state.modal = Some(Modal::with_buttons(
        offer.skill,
        format!(
            "Offered by: {}\n\n{}\n\nCategory: {}",
            offer.user, offer.description, offer.category
        ),
        vec![
            ("Close".into(), ModalChoice::Dismiss),
            ("Connect".into(), ModalChoice::Connect { offer: index }),
        ],
    ));
}

fn handle_create_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    if state.create.posting {
        return;
    }
    match key.code {
        KeyCode::Tab => return state.create.focus_next(),
        KeyCode::BackTab => return state.create.focus_prev(),
        _ => {}
    }
    match state.create.focus {
        CreateFocus::Skill => match key.code {
            KeyCode::Enter | KeyCode::Down => state.create.focus_next(),
            KeyCode::Backspace => state.create.skill.delete_back(),
            KeyCode::Delete => state.create.skill.delete_forward(),
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.create.skill.delete_word_back()
            }
            KeyCode::Left => state.create.skill.move_left(),
            KeyCode::Right => state.create.skill.move_right(),
            KeyCode::Home => state.create.skill.move_home(),
            KeyCode::End => state.create.skill.move_end(),
            KeyCode::Char(c) => state.create.skill.insert_char(c),
            _ => {}
        },
        CreateFocus::Category => match key.code {
            KeyCode::Left => {
                if state.create.category_cursor > 0 {
                    state.create.category_cursor -= 1;
                }
            }
            KeyCode::Right => {
                if state.create.category_cursor + 1 < feed::CATEGORIES.len() {
                    state.create.category_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.create.category = Some(state.create.category_cursor);
            }
            KeyCode::Up => state.create.focus_prev(),
            KeyCode::Down => state.create.focus_next(),
            _ => {}
        },
        CreateFocus::Description => match key.code {
            KeyCode::Enter => state.create.description.insert_char('\n'),
            KeyCode::Backspace => state.create.description.delete_back(),
            KeyCode::Delete => state.create.description.delete_forward(),
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.create.description.delete_word_back()
            }
            KeyCode::Left => state.create.description.move_left(),
            KeyCode::Right => state.create.description.move_right(),
            KeyCode::Home => state.create.description.move_home(),
            KeyCode::End => state.create.description.move_end(),
            KeyCode::Char(c) => state.create.description.insert_char(c),
            _ => {}
        },
        CreateFocus::Submit => match key.code {
            KeyCode::Enter => submit_post(state, now),
            KeyCode::Up => state.create.focus_prev(),
            _ => {}
        },
    }
}

fn submit_post(state: &mut AppState, now: Instant) {
    let skill = state.create.skill.text.trim().to_string();
    let description = state.create.description.text.trim().to_string();
    let category = state.create.selected_category();

    match forms::validate_post(&skill, category, &description) {
        Ok(()) => {
            state.create.posting = true;
            let delay = Duration::from_millis(state.config.latency.post_ms);
            state.schedule(
                PendingKind::Post {
                    skill,
                    category: category.expect("validated").to_string(),
                    description,
                },
                delay,
                now,
            );
        }
        Err(e) => {
            state.modal = Some(Modal::info("Incomplete", e.to_string()));
        }
    }
}

fn handle_profile_key(state: &mut AppState, key: KeyEvent, _now: Instant) {
    match key.code {
        KeyCode::Char('e') => {
            state.modal = Some(Modal::info(
                "Edit Profile",
                "Profile editing will be available in a future update!",
            ));
        }
        KeyCode::Char('l') => {
            state.modal = Some(Modal::with_buttons(
                "Logout",
                "Are you sure you want to logout?",
                vec![
                    ("Cancel".into(), ModalChoice::Dismiss),
                    ("Logout".into(), ModalChoice::ConfirmLogout),
                ],
            ));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::feed;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.animations = false;
        config.ui.splash = false;
        config
    }

    fn new_state(now: Instant) -> AppState {
        AppState::new(test_config(), now)
    }

    fn key(state: &mut AppState, code: KeyCode, now: Instant) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
            now,
        )
    }

    fn type_str(state: &mut AppState, text: &str, now: Instant) {
        for c in text.chars() {
            key(state, KeyCode::Char(c), now);
        }
    }

    fn tick(state: &mut AppState, now: Instant) -> Vec<Action> {
        handle_event(state, AppEvent::Tick, now)
    }

    /// Drive the full login flow with the demo credentials.
    fn log_in(state: &mut AppState, now: Instant) {
        type_str(state, "test@student.com", now);
        key(state, KeyCode::Tab, now);
        type_str(state, "12345", now);
        key(state, KeyCode::Enter, now);
        assert!(state.login.loading);
        tick(state, now + Duration::from_millis(1001));
        assert_eq!(state.route, Route::Tabs);
    }

    /// Log in and finish the initial feed load.
    fn at_home(now: Instant) -> AppState {
        let mut state = new_state(now);
        log_in(&mut state, now);
        tick(&mut state, now + Duration::from_millis(3000));
        assert_eq!(state.home.phase, FeedPhase::Ready);
        state
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let now = Instant::now();
        let mut state = new_state(now);
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
            now,
        );
        assert_eq!(actions, [Action::Quit]);
    }

    #[test]
    fn successful_login_waits_out_the_simulated_delay() {
        let now = Instant::now();
        let mut state = new_state(now);
        type_str(&mut state, "test@student.com", now);
        key(&mut state, KeyCode::Tab, now);
        type_str(&mut state, "12345", now);
        key(&mut state, KeyCode::Enter, now);
        assert!(state.login.loading);
        assert_eq!(state.route, Route::Login);

        // Not yet due.
        tick(&mut state, now + Duration::from_millis(500));
        assert_eq!(state.route, Route::Login);

        tick(&mut state, now + Duration::from_millis(1000));
        assert_eq!(state.route, Route::Tabs);
        assert!(state.session.is_logged_in());
        assert_eq!(state.session.expect_user().name, "Alice Example");
    }

    #[test]
    fn wrong_credentials_raise_a_modal_and_leave_session_unchanged() {
        let now = Instant::now();
        let mut state = new_state(now);
        type_str(&mut state, "alice@example.com", now);
        key(&mut state, KeyCode::Tab, now);
        type_str(&mut state, "letmein", now);
        key(&mut state, KeyCode::Enter, now);

        // The verdict only lands after the simulated round trip.
        assert!(state.login.loading);
        assert!(state.modal.is_none());
        tick(&mut state, now + Duration::from_millis(1001));

        let modal = state.modal.as_ref().expect("failure modal");
        assert_eq!(modal.title, "Login failed");
        assert!(!state.login.loading);
        assert!(!state.session.is_logged_in());
        assert_eq!(state.route, Route::Login);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn malformed_email_blocks_submit_silently() {
        let now = Instant::now();
        let mut state = new_state(now);
        type_str(&mut state, "not-an-email", now);
        key(&mut state, KeyCode::Tab, now);
        type_str(&mut state, "12345", now);
        key(&mut state, KeyCode::Enter, now);
        assert!(state.modal.is_none());
        assert!(!state.login.loading);
    }

    #[test]
    fn signup_flow_installs_demo_session_after_modal_ok() {
        let now = Instant::now();
        let mut state = new_state(now);
        key(&mut state, KeyCode::F(2), now);
        assert!(state.login.sign_up);
        type_str(&mut state, "new@user.org", now);
        key(&mut state, KeyCode::Tab, now);
        type_str(&mut state, "secret", now);
        key(&mut state, KeyCode::Enter, now);
        assert!(state.login.loading);

        tick(&mut state, now + Duration::from_millis(1001));
        assert!(state.session.is_logged_in());
        let modal = state.modal.as_ref().expect("success modal");
        assert_eq!(modal.title, "Success");

        key(&mut state, KeyCode::Enter, now);
        assert_eq!(state.route, Route::Tabs);
    }

    #[test]
    fn signup_with_bad_details_is_rejected_immediately() {
        let now = Instant::now();
        let mut state = new_state(now);
        key(&mut state, KeyCode::F(2), now);
        type_str(&mut state, "someone@else.net", now);
        key(&mut state, KeyCode::Tab, now);
        type_str(&mut state, "abc", now);
        key(&mut state, KeyCode::Enter, now);
        let modal = state.modal.as_ref().expect("details modal");
        assert_eq!(modal.title, "Check your details");
        assert!(!state.login.loading);
    }

    #[test]
    fn feed_loads_after_simulated_latency() {
        let now = Instant::now();
        let mut state = new_state(now);
        log_in(&mut state, now);
        assert_eq!(state.home.phase, FeedPhase::Loading);
        tick(&mut state, now + Duration::from_millis(2000));
        assert_eq!(state.home.phase, FeedPhase::Loading);
        tick(&mut state, now + Duration::from_millis(2600));
        assert_eq!(state.home.phase, FeedPhase::Ready);
    }

    #[test]
    fn feed_load_survives_a_tab_round_trip() {
        let now = Instant::now();
        let mut state = new_state(now);
        log_in(&mut state, now);
        assert_eq!(state.home.phase, FeedPhase::Loading);

        // Away and back before the load completes.
        key(&mut state, KeyCode::F(2), now);
        assert_eq!(state.tab, Tab::Create);
        key(&mut state, KeyCode::F(1), now);
        assert_eq!(state.tab, Tab::Home);

        tick(&mut state, now + Duration::from_millis(60_000));
        assert_eq!(state.home.phase, FeedPhase::Ready);
    }

    #[test]
    fn typing_python_filters_to_the_python_offer() {
        let now = Instant::now();
        let mut state = at_home(now);
        type_str(&mut state, "Python", now);
        let visible: Vec<_> = state
            .home
            .visible
            .iter()
            .map(|&i| feed::OFFERS[i].skill)
            .collect();
        assert_eq!(visible, ["Python Tutoring"]);
    }

    #[test]
    fn guitar_search_is_case_insensitive_end_to_end() {
        let now = Instant::now();
        let mut state = at_home(now);
        type_str(&mut state, "guitar", now);
        let visible: Vec<_> = state
            .home
            .visible
            .iter()
            .map(|&i| feed::OFFERS[i].skill)
            .collect();
        assert_eq!(visible, ["Guitar Lessons"]);
    }

    #[test]
    fn clearing_the_search_restores_all_offers() {
        let now = Instant::now();
        let mut state = at_home(now);
        type_str(&mut state, "zzz", now);
        assert!(state.home.visible.is_empty());
        for _ in 0.."zzz".len() {
            key(&mut state, KeyCode::Backspace, now);
        }
        assert_eq!(state.home.visible, [0, 1, 2, 3]);
    }

    #[test]
    fn offer_detail_connect_shows_success_toast() {
        let now = Instant::now();
        let mut state = at_home(now);
        key(&mut state, KeyCode::Down, now); // focus the list
        key(&mut state, KeyCode::Enter, now); // open detail
        assert!(state.modal.is_some());
        assert_eq!(state.toasts.len(), 1); // "Viewing ..."

        key(&mut state, KeyCode::Right, now); // select Connect
        key(&mut state, KeyCode::Enter, now);
        assert!(state.modal.is_none());
        let last = state.toasts.iter().last().unwrap();
        assert_eq!(last.message, "Connection request sent to Ali!");
        assert_eq!(last.kind, ToastKind::Success);
    }

    #[test]
    fn refresh_resets_the_filter_after_its_delay() {
        let now = Instant::now();
        let mut state = at_home(now);
        type_str(&mut state, "guitar", now);
        key(&mut state, KeyCode::Down, now);
        key(&mut state, KeyCode::Char('r'), now);
        assert!(state.home.refreshing);
        tick(&mut state, now + Duration::from_millis(1100));
        assert!(!state.home.refreshing);
        assert!(state.home.search.text.is_empty());
        assert_eq!(state.home.visible.len(), 4);
    }

    #[test]
    fn leaving_home_cancels_a_running_refresh() {
        let now = Instant::now();
        let mut state = at_home(now);
        key(&mut state, KeyCode::Down, now);
        key(&mut state, KeyCode::Char('r'), now);
        assert_eq!(state.pending.len(), 1);
        key(&mut state, KeyCode::F(3), now); // to profile
        assert!(state.pending.is_empty());
        assert!(!state.home.refreshing);
        // The refresh deadline passing later has no effect.
        tick(&mut state, now + Duration::from_millis(5000));
        assert!(!state.home.refreshing);
    }

    #[test]
    fn create_post_happy_path_logs_and_returns_home() {
        let now = Instant::now();
        let mut state = at_home(now);
        key(&mut state, KeyCode::F(2), now);
        assert_eq!(state.tab, Tab::Create);

        type_str(&mut state, "Ocean Photography", now);
        key(&mut state, KeyCode::Tab, now); // category
        key(&mut state, KeyCode::Right, now);
        key(&mut state, KeyCode::Right, now);
        key(&mut state, KeyCode::Right, now);
        key(&mut state, KeyCode::Right, now);
        key(&mut state, KeyCode::Right, now); // photography
        key(&mut state, KeyCode::Char(' '), now);
        assert_eq!(state.create.selected_category(), Some("Photography"));
        key(&mut state, KeyCode::Tab, now); // description
        type_str(&mut state, "Golden hour shots by the sea.", now);
        key(&mut state, KeyCode::Tab, now); // submit
        key(&mut state, KeyCode::Enter, now);
        assert!(state.create.posting);

        let actions = tick(&mut state, now + Duration::from_millis(500));
        assert_eq!(
            actions,
            [Action::LogCreatedOffer {
                skill: "Ocean Photography".into(),
                category: "Photography".into(),
                description: "Golden hour shots by the sea.".into(),
            }]
        );
        let modal = state.modal.as_ref().expect("posted modal");
        assert_eq!(modal.title, "Posted");

        key(&mut state, KeyCode::Enter, now);
        assert_eq!(state.tab, Tab::Home);
        assert!(state.create.skill.text.is_empty());
        assert!(state.create.category.is_none());
    }

    #[test]
    fn incomplete_post_raises_the_right_modal() {
        let now = Instant::now();
        let mut state = at_home(now);
        key(&mut state, KeyCode::F(2), now);
        // Straight to submit with everything empty.
        key(&mut state, KeyCode::Tab, now);
        key(&mut state, KeyCode::Tab, now);
        key(&mut state, KeyCode::Tab, now);
        key(&mut state, KeyCode::Enter, now);
        let modal = state.modal.as_ref().expect("incomplete modal");
        assert_eq!(modal.title, "Incomplete");
        assert!(modal.body.contains("skill name and description"));
        assert!(!state.create.posting);

        // Fill the fields but skip the category.
        key(&mut state, KeyCode::Esc, now);
        key(&mut state, KeyCode::Tab, now); // back around to skill
        type_str(&mut state, "Surfing", now);
        key(&mut state, KeyCode::Tab, now);
        key(&mut state, KeyCode::Tab, now);
        type_str(&mut state, "Catch your first wave.", now);
        key(&mut state, KeyCode::Tab, now);
        key(&mut state, KeyCode::Enter, now);
        let modal = state.modal.as_ref().expect("category modal");
        assert!(modal.body.contains("category"));
    }

    #[test]
    fn logout_confirm_returns_to_login() {
        let now = Instant::now();
        let mut state = at_home(now);
        key(&mut state, KeyCode::F(3), now);
        key(&mut state, KeyCode::Char('l'), now);
        assert!(state.modal.is_some());

        // Cancel first.
        key(&mut state, KeyCode::Enter, now);
        assert!(state.session.is_logged_in());
        assert_eq!(state.route, Route::Tabs);

        key(&mut state, KeyCode::Char('l'), now);
        key(&mut state, KeyCode::Right, now);
        key(&mut state, KeyCode::Enter, now);
        assert!(!state.session.is_logged_in());
        assert_eq!(state.route, Route::Login);
    }

    #[test]
    fn toast_expires_via_tick_sweep() {
        let now = Instant::now();
        let mut state = at_home(now);
        state.show_toast("hello", ToastKind::Info, now);
        assert_eq!(state.toasts.len(), 1);
        tick(&mut state, now + Duration::from_millis(2999));
        assert_eq!(state.toasts.len(), 1);
        tick(&mut state, now + Duration::from_millis(3001));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn splash_redirects_by_session_state() {
        let now = Instant::now();
        let mut config = AppConfig::default();
        config.ui.animations = false;
        let mut state = AppState::new(config, now);
        assert_eq!(state.route, Route::Splash);
        tick(&mut state, now + Duration::from_millis(3100));
        assert_eq!(state.route, Route::Login);
    }

    #[test]
    fn splash_can_be_skipped_with_enter() {
        let now = Instant::now();
        let mut config = AppConfig::default();
        config.ui.animations = false;
        let mut state = AppState::new(config, now);
        key(&mut state, KeyCode::Enter, now);
        assert_eq!(state.route, Route::Login);
        // The splash redirect was cancelled along with the route change.
        assert!(state.pending.is_empty());
    }

    #[test]
    fn loading_feed_ignores_input() {
        let now = Instant::now();
        let mut state = new_state(now);
        log_in(&mut state, now);
        assert_eq!(state.home.phase, FeedPhase::Loading);
        type_str(&mut state, "Python", now);
        assert!(state.home.search.text.is_empty());
    }
}
