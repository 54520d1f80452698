//! Process-wide session state, provided via Leptos context.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::auth::SessionSink;
use crate::types::Session;

const SESSION_KEY: &str = "sonata_session";

/// The signed-in user, if any. Survives reloads through `localStorage`.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        let stored: Option<Session> = LocalStorage::get(SESSION_KEY).ok();
        let (session, set_session) = signal(stored);
        Self {
            session,
            set_session,
        }
    }

    pub fn log_in(&self, token: String, username: String) {
        let session = Session { token, username };
        if let Err(e) = LocalStorage::set(SESSION_KEY, &session) {
            log::warn!("failed to persist session: {e}");
        }
        log::info!("signed in as {}", session.username);
        self.set_session.set(Some(session));
    }

    pub fn log_out(&self) {
        LocalStorage::delete(SESSION_KEY);
        log::info!("signed out");
        self.set_session.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with_untracked(Option::is_some)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSink for SessionState {
    fn log_in(&self, token: String, username: String) {
        SessionState::log_in(self, token, username);
    }
}
