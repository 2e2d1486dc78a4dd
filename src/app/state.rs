use crate::anim::{Anim, Curve, Easing, Spring};
use crate::config::AppConfig;
use crate::feed;
use crate::forms::TextField;
use crate::session::Session;
use crate::toast::{ToastKind, ToastQueue};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    Login,
    Tabs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Create,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Create, Tab::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Create => "Create",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Create => 1,
            Tab::Profile => 2,
        }
    }
}

/// Splash sequence: logo pops past its resting size, app name and tagline
/// fade in staggered, then the route redirects by session state.
#[derive(Debug)]
pub struct SplashScreen {
    pub logo_scale: Anim,
    pub logo_opacity: Anim,
    pub name_opacity: Anim,
    pub tagline_opacity: Anim,
}

impl SplashScreen {
    pub fn new(now: Instant, animations: bool) -> Self {
        let mut screen = Self {
            logo_scale: Anim::new(0.0)
                .then(
                    1.2,
                    Curve::Timing {
                        duration: Duration::from_millis(800),
                        easing: Easing::EaseOut,
                    },
                )
                .then(
                    1.0,
                    Curve::Timing {
                        duration: Duration::from_millis(400),
                        easing: Easing::EaseInOut,
                    },
                ),
            logo_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(800), Easing::EaseOut),
            name_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut)
                .with_delay(Duration::from_millis(600)),
            tagline_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut)
                .with_delay(Duration::from_millis(1200)),
        };
        screen.start(now, animations);
        screen
    }

    fn start(&mut self, now: Instant, animations: bool) {
        for anim in [
            &mut self.logo_scale,
            &mut self.logo_opacity,
            &mut self.name_opacity,
            &mut self.tagline_opacity,
        ] {
            if animations {
                anim.start(now);
            } else {
                anim.finish();
            }
        }
    }

    fn advance(&mut self, now: Instant) -> bool {
        let mut dirty = false;
        for anim in [
            &mut self.logo_scale,
            &mut self.logo_opacity,
            &mut self.name_opacity,
            &mut self.tagline_opacity,
        ] {
            dirty |= anim.advance(now);
        }
        dirty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug)]
pub struct LoginScreen {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub sign_up: bool,
    pub show_password: bool,
    pub loading: bool,
    pub logo_opacity: Anim,
    pub logo_scale: Anim,
    pub form_opacity: Anim,
    pub form_offset: Anim,
}

impl LoginScreen {
    pub fn new(now: Instant, animations: bool) -> Self {
        let mut screen = Self {
            email: TextField::new(),
            password: TextField::new(),
            focus: LoginField::Email,
            sign_up: false,
            show_password: false,
            loading: false,
            logo_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut),
            logo_scale: Anim::spring(
                0.8,
                1.0,
                Spring {
                    damping: 10.0,
                    stiffness: 120.0,
                },
            ),
            form_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(500), Easing::EaseOut)
                .with_delay(Duration::from_millis(250)),
            form_offset: Anim::spring(
                30.0,
                0.0,
                Spring {
                    damping: 14.0,
                    stiffness: 120.0,
                },
            )
            .with_delay(Duration::from_millis(250)),
        };
        for anim in [
            &mut screen.logo_opacity,
            &mut screen.logo_scale,
            &mut screen.form_opacity,
            &mut screen.form_offset,
        ] {
            if animations {
                anim.start(now);
            } else {
                anim.finish();
            }
        }
        screen
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    fn advance(&mut self, now: Instant) -> bool {
        let mut dirty = false;
        for anim in [
            &mut self.logo_opacity,
            &mut self.logo_scale,
            &mut self.form_opacity,
            &mut self.form_offset,
        ] {
            dirty |= anim.advance(now);
        }
        dirty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    /// Simulated initial load; skeleton cards shimmer.
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Search,
    List,
}

#[derive(Debug)]
pub struct HomeScreen {
    pub phase: FeedPhase,
    pub search: TextField,
    /// Indices into [`feed::OFFERS`] surviving the current filter.
    pub visible: Vec<usize>,
    pub selected: usize,
    pub focus: HomeFocus,
    pub refreshing: bool,
    pub shimmer: Anim,
    pub header_opacity: Anim,
    pub search_opacity: Anim,
    pub list_opacity: Anim,
    pub card_fades: Vec<Anim>,
}

impl HomeScreen {
    pub fn new(now: Instant, animations: bool) -> Self {
        let mut shimmer =
            Anim::timing(0.3, 1.0, Duration::from_millis(1000), Easing::EaseInOut).ping_pong();
        if animations {
            shimmer.start(now);
        } else {
            shimmer.finish();
        }
        Self {
            phase: FeedPhase::Loading,
            search: TextField::new(),
            visible: (0..feed::OFFERS.len()).collect(),
            selected: 0,
            focus: HomeFocus::Search,
            refreshing: false,
            shimmer,
            header_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut),
            search_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut)
                .with_delay(Duration::from_millis(200)),
            list_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut)
                .with_delay(Duration::from_millis(400)),
            card_fades: Vec::new(),
        }
    }

    /// Leave the skeleton and fade the real content in.
    pub fn enter_ready(&mut self, now: Instant, animations: bool) {
        self.phase = FeedPhase::Ready;
        for anim in [
            &mut self.header_opacity,
            &mut self.search_opacity,
            &mut self.list_opacity,
        ] {
            if animations {
                anim.start(now);
            } else {
                anim.finish();
            }
        }
        self.restart_card_fades(now, animations);
    }

    /// Recompute the visible set from the search text. Pure filter; the
    /// selection is clamped to the surviving cards.
    pub fn apply_filter(&mut self) {
        let query = self.search.text.clone();
        self.visible = feed::filter_offers(feed::OFFERS, &query)
            .iter()
            .map(|offer| {
                feed::OFFERS
                    .iter()
                    .position(|o| o.id == offer.id)
                    .expect("filtered offer comes from OFFERS")
            })
            .collect();
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    /// One staggered fade per visible card.
    pub fn restart_card_fades(&mut self, now: Instant, animations: bool) {
        self.card_fades = (0..self.visible.len())
            .map(|i| {
                let mut fade =
                    Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut)
                        .with_delay(Duration::from_millis(i as u64 * 100));
                if animations {
                    fade.start(now);
                } else {
                    fade.finish();
                }
                fade
            })
            .collect();
    }

    pub fn selected_offer_index(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    fn advance(&mut self, now: Instant) -> bool {
        let mut dirty = self.shimmer.advance(now);
        for anim in [
            &mut self.header_opacity,
            &mut self.search_opacity,
            &mut self.list_opacity,
        ] {
            dirty |= anim.advance(now);
        }
        for fade in &mut self.card_fades {
            dirty |= fade.advance(now);
        }
        dirty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateFocus {
    Skill,
    Category,
    Description,
    Submit,
}

#[derive(Debug)]
pub struct CreateScreen {
    pub skill: TextField,
    pub description: TextField,
    /// Index into [`feed::CATEGORIES`] once one has been picked.
    pub category: Option<usize>,
    pub category_cursor: usize,
    pub focus: CreateFocus,
    pub posting: bool,
}

impl CreateScreen {
    pub fn new() -> Self {
        Self {
            skill: TextField::new(),
            description: TextField::multiline(),
            category: None,
            category_cursor: 0,
            focus: CreateFocus::Skill,
            posting: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            CreateFocus::Skill => CreateFocus::Category,
            CreateFocus::Category => CreateFocus::Description,
            CreateFocus::Description => CreateFocus::Submit,
            CreateFocus::Submit => CreateFocus::Skill,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            CreateFocus::Skill => CreateFocus::Submit,
            CreateFocus::Category => CreateFocus::Skill,
            CreateFocus::Description => CreateFocus::Category,
            CreateFocus::Submit => CreateFocus::Description,
        };
    }

    pub fn selected_category(&self) -> Option<&'static str> {
        self.category.map(|i| feed::CATEGORIES[i].1)
    }
}

/// Demo profile stats behind the animated progress bars.
pub const PROFILE_STATS: &[(&str, f32)] = &[
    ("Profile complete", 0.90),
    ("Swaps completed", 0.45),
    ("Avg. rating 4.8", 0.96),
];

#[derive(Debug)]
pub struct ProfileScreen {
    pub header_opacity: Anim,
    pub avatar_scale: Anim,
    pub content_opacity: Anim,
    pub avatar_pulse: Anim,
    pub stat_fills: Vec<Anim>,
}

impl ProfileScreen {
    pub fn new(now: Instant, animations: bool) -> Self {
        let mut screen = Self {
            header_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut),
            avatar_scale: Anim::spring(
                0.0,
                1.0,
                Spring {
                    damping: 8.0,
                    stiffness: 100.0,
                },
            ),
            content_opacity: Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::EaseOut)
                .with_delay(Duration::from_millis(200)),
            avatar_pulse: Anim::timing(1.0, 1.05, Duration::from_millis(900), Easing::EaseInOut)
                .with_delay(Duration::from_millis(800))
                .ping_pong(),
            stat_fills: PROFILE_STATS
                .iter()
                .map(|(_, value)| Anim::spring(0.0, *value, Spring::SNAPPY))
                .collect(),
        };
        let ProfileScreen {
            header_opacity,
            avatar_scale,
            content_opacity,
            avatar_pulse,
            stat_fills,
        } = &mut screen;
        for anim in [header_opacity, avatar_scale, content_opacity, avatar_pulse]
            .into_iter()
            .chain(stat_fills.iter_mut())
        {
            if animations {
                anim.start(now);
            } else {
                anim.finish();
            }
        }
        screen
    }

    fn advance(&mut self, now: Instant) -> bool {
        let mut dirty = false;
        for anim in [
            &mut self.header_opacity,
            &mut self.avatar_scale,
            &mut self.content_opacity,
            &mut self.avatar_pulse,
        ] {
            dirty |= anim.advance(now);
        }
        for fill in &mut self.stat_fills {
            dirty |= fill.advance(now);
        }
        dirty
    }
}

/// Which surface a deferred op belongs to. Leaving that surface cancels the
/// op, so a completion can never land on a screen that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpOwner {
    Splash,
    Login,
    Home,
    Create,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingKind {
    SplashDone,
    /// Simulated auth round trip. Credentials were already checked before
    /// scheduling; `sign_up` picks which completion path runs.
    Login {
        email: String,
        password: String,
        sign_up: bool,
    },
    InitialLoad,
    Refresh,
    Post {
        skill: String,
        category: String,
        description: String,
    },
}

impl PendingKind {
    pub fn owner(&self) -> OpOwner {
        match self {
            PendingKind::SplashDone => OpOwner::Splash,
            PendingKind::Login { .. } => OpOwner::Login,
            PendingKind::InitialLoad | PendingKind::Refresh => OpOwner::Home,
            PendingKind::Post { .. } => OpOwner::Create,
        }
    }
}

#[derive(Debug)]
pub struct PendingOp {
    pub kind: PendingKind,
    pub complete_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChoice {
    Dismiss,
    /// Send a connection request for an offer (index into `feed::OFFERS`).
    Connect { offer: usize },
    ConfirmLogout,
    PostOk,
    SignupOk,
}

/// Blocking alert dialog. While one is open it captures all input.
#[derive(Debug)]
pub struct Modal {
    pub title: String,
    pub body: String,
    pub buttons: Vec<(String, ModalChoice)>,
    pub selected: usize,
}

impl Modal {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            buttons: vec![("OK".into(), ModalChoice::Dismiss)],
            selected: 0,
        }
    }

    pub fn with_buttons(
        title: impl Into<String>,
        body: impl Into<String>,
        buttons: Vec<(String, ModalChoice)>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            buttons,
            selected: 0,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub route: Route,
    pub tab: Tab,
    pub splash: SplashScreen,
    pub login: LoginScreen,
    pub home: HomeScreen,
    pub create: CreateScreen,
    pub profile: ProfileScreen,
    pub toasts: ToastQueue,
    pub modal: Option<Modal>,
    pub pending: Vec<PendingOp>,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig, now: Instant) -> Self {
        let animations = config.ui.animations;
        let max_toasts = config.toast.max_visible;
        let splash_enabled = config.ui.splash;
        let mut state = Self {
            config,
            session: Session::new(),
            route: if splash_enabled {
                Route::Splash
            } else {
                Route::Login
            },
            tab: Tab::Home,
            splash: SplashScreen::new(now, animations),
            login: LoginScreen::new(now, animations),
            home: HomeScreen::new(now, animations),
            create: CreateScreen::new(),
            profile: ProfileScreen::new(now, animations),
            toasts: ToastQueue::new(max_toasts),
            modal: None,
            pending: Vec::new(),
            should_quit: false,
            dirty: true,
            tick_count: 0,
        };
        if state.route == Route::Splash {
            state.schedule(PendingKind::SplashDone, Duration::from_millis(3000), now);
        }
        state
    }

    pub fn animations(&self) -> bool {
        self.config.ui.animations
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.config.toast.duration_ms)
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let duration = self.toast_duration();
        self.toasts.show(message, kind, duration, now);
        self.dirty = true;
    }

    pub fn schedule(&mut self, kind: PendingKind, delay: Duration, now: Instant) {
        self.pending.push(PendingOp {
            kind,
            complete_at: now + delay,
        });
    }

    /// Ops completed by `now`, removed from the queue in scheduling order.
    pub fn take_due_ops(&mut self, now: Instant) -> Vec<PendingKind> {
        let mut due = Vec::new();
        self.pending.retain_mut(|op| {
            if op.complete_at <= now {
                due.push(op.kind.clone());
                false
            } else {
                true
            }
        });
        due
    }

    /// Replace the current route, dropping any deferred ops owned by the
    /// surface being left and resetting their in-flight flags.
    pub fn set_route(&mut self, route: Route, now: Instant) {
        if self.route == route {
            return;
        }
        self.route = route;
        match route {
            Route::Splash => {}
            Route::Login => {
                let animations = self.animations();
                self.login = LoginScreen::new(now, animations);
            }
            Route::Tabs => {
                self.tab = Tab::Home;
                if self.home.phase == FeedPhase::Loading {
                    let delay = Duration::from_millis(self.config.latency.initial_load_ms);
                    self.schedule(PendingKind::InitialLoad, delay, now);
                }
            }
        }
        self.prune_pending();
        self.dirty = true;
    }

    pub fn set_tab(&mut self, tab: Tab, now: Instant) {
        if self.route != Route::Tabs || self.tab == tab {
            return;
        }
        self.tab = tab;
        if tab == Tab::Profile {
            // The profile animates in on every visit, like a fresh mount.
            let animations = self.animations();
            self.profile = ProfileScreen::new(now, animations);
        }
        if tab == Tab::Home
            && self.home.phase == FeedPhase::Loading
            && !self
                .pending
                .iter()
                .any(|op| op.kind == PendingKind::InitialLoad)
        {
            // The load was cancelled when Home was left; restart it, or the
            // skeleton never resolves.
            let delay = Duration::from_millis(self.config.latency.initial_load_ms);
            self.schedule(PendingKind::InitialLoad, delay, now);
        }
        self.prune_pending();
        self.dirty = true;
    }

    /// Which op owners are live for the current route/tab.
    fn owner_is_live(&self, owner: OpOwner) -> bool {
        match (self.route, owner) {
            (Route::Splash, OpOwner::Splash) => true,
            (Route::Login, OpOwner::Login) => true,
            (Route::Tabs, OpOwner::Home) => self.tab == Tab::Home,
            (Route::Tabs, OpOwner::Create) => self.tab == Tab::Create,
            _ => false,
        }
    }

    fn prune_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        let (live, dropped): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .partition(|op| self.owner_is_live(op.kind.owner()));
        self.pending = live;
        for op in dropped {
            match op.kind.owner() {
                OpOwner::Login => self.login.loading = false,
                OpOwner::Home => self.home.refreshing = false,
                OpOwner::Create => self.create.posting = false,
                OpOwner::Splash => {}
            }
        }
    }

    /// Advance the animations of whatever is on screen. Returns true when a
    /// value changed and the frame needs a redraw.
    pub fn advance_animations(&mut self, now: Instant) -> bool {
        match self.route {
            Route::Splash => self.splash.advance(now),
            Route::Login => self.login.advance(now),
            Route::Tabs => match self.tab {
                Tab::Home => self.home.advance(now),
                Tab::Create => false,
                Tab::Profile => self.profile.advance(now),
            },
        }
    }
}
