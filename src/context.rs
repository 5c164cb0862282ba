//! Application Context
//!
//! Session and API configuration provided via Leptos Context API. Pages read
//! the session through signals and change it only through the methods here.

use leptos::prelude::*;

use budget_core::{ApiConfig, HttpBudgetApi, Session, User};

use crate::commands;

/// App-wide session context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session - read
    pub session: ReadSignal<Session>,
    /// Current session - write
    set_session: WriteSignal<Session>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    /// Build the context, restoring a persisted session if there is one
    pub fn new(config: ApiConfig) -> Self {
        let (session, set_session) = signal(commands::load_session());
        Self {
            session,
            set_session,
            config: StoredValue::new(config),
        }
    }

    /// Current token (tracked)
    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// API client carrying the current token
    pub fn api(&self) -> HttpBudgetApi {
        let token = self.session.with_untracked(|s| s.token.clone());
        HttpBudgetApi::new(self.config.get_value()).with_token(token)
    }

    pub fn set_token(&self, token: String) {
        self.set_session.update(|s| s.set_token(token));
        self.persist();
    }

    pub fn set_user(&self, user: User) {
        self.set_session.update(|s| s.set_user(user));
        self.persist();
    }

    /// Clear the session and its persisted copy
    pub fn sign_out(&self) {
        log::info!("[session] Signing out");
        self.set_session.update(Session::clear);
        commands::clear_session();
    }

    fn persist(&self) {
        self.session.with_untracked(commands::save_session);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
