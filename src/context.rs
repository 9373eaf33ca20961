//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiClient, FetchTransport};
use crate::auth::{can_delete, AuthSession, SessionState};
use crate::config::AppConfig;
use crate::models::User;
use crate::storage::{BrowserStorage, SessionStore};
use crate::toast::Toaster;

pub type Session = AuthSession<BrowserStorage, RwSignal<SessionState>>;
pub type Api = ApiClient<FetchTransport, Session, Toaster>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session - drives the route guard
    pub session: RwSignal<SessionState>,
    /// Backend client; carries the session and the toaster
    pub api: Api,
    pub toaster: Toaster,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let session = RwSignal::new(SessionState::Loading);
        let toaster = Toaster::new(config.toast_ms);
        let auth = AuthSession::new(SessionStore::new(BrowserStorage), session);
        let api = ApiClient::new(FetchTransport::new(config.api_url), auth, toaster);
        Self { session, api, toaster }
    }

    /// Signed-in user (tracked)
    pub fn current_user(&self) -> Option<User> {
        self.session.with(|state| state.user().cloned())
    }

    /// Whether delete controls should show (tracked)
    pub fn can_delete(&self) -> bool {
        self.session.with(can_delete)
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
