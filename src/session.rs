//! Mock authentication state.
//!
//! There is no backend: credentials are checked against a single hard-coded
//! pair and a successful login installs the one fixed demo user. The session
//! is owned by `AppState` and lives for the whole process.

/// Demo credentials accepted by [`Session::login`].
pub const DEMO_EMAIL: &str = "test@student.com";
pub const DEMO_PASSWORD: &str = "12345";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
}

impl User {
    /// Avatar initials, e.g. "Alice Example" -> "AE".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

fn demo_user() -> User {
    User {
        name: "Alice Example".into(),
        email: DEMO_EMAIL.into(),
        bio: "CS student who loves art and music. Here to exchange coding \
              lessons for art tips!"
            .into(),
        skills_offered: vec!["Java Programming".into(), "Guitar Basics".into()],
        skills_wanted: vec!["Digital Painting".into(), "French Language".into()],
    }
}

/// Logged-in/logged-out state plus the current user record.
///
/// At most one session is active; it starts logged out.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Attempt a login. Only the demo credential pair succeeds; any other
    /// pair leaves the session untouched and returns false. The email is
    /// trimmed, the password is compared exactly.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if email.trim() == DEMO_EMAIL && password == DEMO_PASSWORD {
            self.user = Some(demo_user());
            true
        } else {
            false
        }
    }

    /// Complete a mock sign-up. There is no user store, so any well-formed
    /// registration just installs the demo user.
    pub fn begin_demo_session(&mut self) {
        self.user = Some(demo_user());
    }

    /// Unconditionally back to the logged-out state.
    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The current user, for screens that are only reachable while logged
    /// in. Calling this while logged out is a programming error.
    pub fn expect_user(&self) -> &User {
        self.user
            .as_ref()
            .expect("session user accessed while logged out")
    }
}
