//! # Navigation State
//!
//! The one piece of state that outlives a route activation: whether the user
//! is logged in. It starts `Undetermined` and the navigation chrome settles it
//! once at startup. No login flow exists yet, so nothing moves it to
//! `LoggedIn` from inside the console.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginState {
    /// Nobody has looked at the session yet.
    #[default]
    Undetermined,
    LoggedOut,
    LoggedIn,
}

impl LoginState {
    pub fn label(&self) -> &'static str {
        match self {
            LoginState::Undetermined => "…",
            LoginState::LoggedOut => "logged out",
            LoginState::LoggedIn => "logged in",
        }
    }
}

/// Session-wide state shared by every view. Owned by `App`.
#[derive(Debug, Default)]
pub struct SessionState {
    pub login: LoginState,
}

/// Controller behind the navigation chrome.
pub struct NavigationController<'a> {
    session: &'a mut SessionState,
}

impl<'a> NavigationController<'a> {
    pub fn new(session: &'a mut SessionState) -> Self {
        Self { session }
    }

    /// Settles an undetermined login state to `LoggedOut`. A state that is
    /// already determined is left alone.
    pub fn init(self) -> LoginState {
        if self.session.login == LoginState::Undetermined {
            self.session.login = LoginState::LoggedOut;
            debug!("Login state defaulted to logged out");
        }
        self.session.login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_defaults_undetermined_to_logged_out() {
        let mut session = SessionState::default();
        assert_eq!(session.login, LoginState::Undetermined);
        let state = NavigationController::new(&mut session).init();
        assert_eq!(state, LoginState::LoggedOut);
        assert_eq!(session.login, LoginState::LoggedOut);
    }

    #[test]
    fn test_init_never_overwrites_logged_in() {
        let mut session = SessionState {
            login: LoginState::LoggedIn,
        };
        NavigationController::new(&mut session).init();
        assert_eq!(session.login, LoginState::LoggedIn);
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut session = SessionState::default();
        NavigationController::new(&mut session).init();
        NavigationController::new(&mut session).init();
        assert_eq!(session.login, LoginState::LoggedOut);
    }
}
