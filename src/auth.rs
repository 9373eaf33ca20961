//! Auth Session
//!
//! Owns the current-user state. A page load starts in `Loading` and settles
//! once the persisted session has been checked; after that only login and
//! logout move it.

use leptos::prelude::*;
use serde::de::IgnoredAny;

use crate::api::{ApiClient, Method, SessionHooks, Transport};
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginForm, RegisterForm, User};
use crate::storage::{KeyValueStore, SessionStore, StoredSession};
use crate::toast::Notify;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(StoredSession),
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(session) => Some(&session.token),
            _ => None,
        }
    }
}

/// Whether ticket deletion is offered. Only signed-in admins see it.
pub fn can_delete(state: &SessionState) -> bool {
    state.user().is_some_and(User::is_admin)
}

/// Holder of the in-memory session state
pub trait SessionSlot {
    fn snapshot(&self) -> SessionState;
    fn transition(&self, next: SessionState);
}

impl SessionSlot for RwSignal<SessionState> {
    fn snapshot(&self) -> SessionState {
        self.get_untracked()
    }

    fn transition(&self, next: SessionState) {
        self.set(next);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AuthSession<K, S> {
    store: SessionStore<K>,
    slot: S,
}

impl<K: KeyValueStore, S: SessionSlot> AuthSession<K, S> {
    pub fn new(store: SessionStore<K>, slot: S) -> Self {
        Self { store, slot }
    }

    /// Settle the `Loading` state from persisted credentials. No-op once settled.
    pub fn initialize(&self) {
        if !self.slot.snapshot().is_loading() {
            return;
        }
        let next = match self.store.load() {
            Some(session) => {
                log::info!("[AUTH] Restored session for {}", session.user.email);
                SessionState::Authenticated(session)
            }
            None => SessionState::Unauthenticated,
        };
        self.slot.transition(next);
    }

    pub fn state(&self) -> SessionState {
        self.slot.snapshot()
    }

    pub fn current_user(&self) -> Option<User> {
        self.slot.snapshot().user().cloned()
    }

    pub fn is_admin(&self) -> bool {
        can_delete(&self.slot.snapshot())
    }

    fn establish(&self, response: AuthResponse) -> User {
        self.store.save(&response.access_token, &response.user);
        let user = response.user.clone();
        self.slot.transition(SessionState::Authenticated(StoredSession {
            token: response.access_token,
            user: response.user,
        }));
        user
    }

    pub fn logout(&self) {
        self.store.clear();
        self.slot.transition(SessionState::Unauthenticated);
    }
}

impl<K: KeyValueStore, S: SessionSlot> SessionHooks for AuthSession<K, S> {
    fn token(&self) -> Option<String> {
        self.slot.snapshot().token().map(str::to_string)
    }

    fn expire(&self) {
        self.logout();
    }
}

// ========================
// Auth Operations
// ========================

impl<T, K, S, N> ApiClient<T, AuthSession<K, S>, N>
where
    T: Transport,
    K: KeyValueStore,
    S: SessionSlot,
    N: Notify,
{
    /// `POST /auth/login`. Errors go back to the caller untouched so the
    /// login form can tell a wrong password from an outage.
    pub async fn login(&self, email: &str, senha: &str) -> Result<User, ApiError> {
        let body = crate::api::encode(&LoginForm { email, senha })?;
        let response: AuthResponse = self.send_quiet(Method::Post, "/auth/login", Some(body)).await?;
        let user = self.session().establish(response);
        log::info!("[AUTH] Logged in as {}", user.email);
        Ok(user)
    }

    /// `POST /auth/register`, then log in with the same credentials.
    pub async fn register(&self, nome: &str, email: &str, senha: &str) -> Result<User, ApiError> {
        let body = crate::api::encode(&RegisterForm { nome, email, senha })?;
        let _: IgnoredAny = self.send_quiet(Method::Post, "/auth/register", Some(body)).await?;
        self.login(email, senha).await
    }

    pub fn logout(&self) {
        log::info!("[AUTH] Logged out");
        self.session().logout();
    }
}


#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::testing::CellSlot;
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::storage::memory::MemoryStore;
    use crate::storage::{TOKEN_KEY, USER_KEY};
    use crate::toast::testing::RecordingNotifier;

    type TestApi = ApiClient<ScriptedTransport, AuthSession<MemoryStore, CellSlot>, RecordingNotifier>;

    struct Harness {
        api: TestApi,
        transport: ScriptedTransport,
        storage: MemoryStore,
        notifier: RecordingNotifier,
    }

    fn harness() -> Harness {
        let storage = MemoryStore::default();
        let transport = ScriptedTransport::default();
        let notifier = RecordingNotifier::default();
        let session = AuthSession::new(SessionStore::new(storage.clone()), CellSlot::default());
        let api = ApiClient::new(transport.clone(), session, notifier.clone());
        Harness { api, transport, storage, notifier }
    }

    const LOGIN_OK: &str = r#"{
        "access_token": "jwt-1",
        "user": {"id": "u1", "nome": "Ana", "email": "a@b.com", "papel": "admin"}
    }"#;

    fn signed_in_as(user_json: &str) -> SessionState {
        SessionState::Authenticated(StoredSession {
            token: "jwt".to_string(),
            user: serde_json::from_str(user_json).unwrap(),
        })
    }

    #[test]
    fn test_delete_offered_only_to_admins() {
        assert!(can_delete(&signed_in_as(r#"{"nome": "Ana", "papel": "admin"}"#)));
        assert!(!can_delete(&signed_in_as(r#"{"nome": "Bia", "papel": "user"}"#)));
        assert!(!can_delete(&signed_in_as(r#"{"nome": "Caio"}"#)));
        assert!(!can_delete(&SessionState::Unauthenticated));
        assert!(!can_delete(&SessionState::Loading));
    }

    #[test]
    fn test_initialize_restores_persisted_session_without_network() {
        let h = harness();
        h.storage.set(TOKEN_KEY, "jwt-0").unwrap();
        h.storage
            .set(USER_KEY, r#"{"id": "u1", "nome": "Ana", "email": "a@b.com"}"#)
            .unwrap();

        h.api.session().initialize();

        assert_eq!(h.api.session().current_user().unwrap().nome, "Ana");
        assert_eq!(h.api.session().token().as_deref(), Some("jwt-0"));
        assert!(h.transport.requests.borrow().is_empty());
    }

    #[test]
    fn test_initialize_with_corrupt_user_is_unauthenticated() {
        let h = harness();
        h.storage.set(TOKEN_KEY, "jwt-0").unwrap();
        h.storage.set(USER_KEY, "undefined").unwrap();

        h.api.session().initialize();

        assert_eq!(h.api.session().state(), SessionState::Unauthenticated);
        assert!(!h.storage.contains(TOKEN_KEY));
        assert!(!h.storage.contains(USER_KEY));
    }

    #[test]
    fn test_initialize_with_empty_token_is_unauthenticated() {
        let h = harness();
        h.storage.set(TOKEN_KEY, "").unwrap();
        h.storage.set(USER_KEY, r#"{"id": "u1", "nome": "Ana"}"#).unwrap();

        h.api.session().initialize();

        assert_eq!(h.api.session().state(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_initialize_only_runs_from_loading() {
        let h = harness();
        h.api.session().initialize();
        h.storage.set(TOKEN_KEY, "jwt-0").unwrap();
        h.storage.set(USER_KEY, r#"{"nome": "Ana"}"#).unwrap();
        h.api.session().initialize();
        assert_eq!(h.api.session().state(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_login_then_401_logs_out() {
        let h = harness();
        h.api.session().initialize();
        h.transport.respond(200, LOGIN_OK);

        let user = block_on(h.api.login("a@b.com", "secret")).unwrap();
        assert!(user.is_admin());
        assert!(h.api.session().is_admin());
        assert_eq!(h.storage.get(TOKEN_KEY).as_deref(), Some("jwt-1"));
        assert!(h.storage.contains(USER_KEY));

        {
            let sent = &h.transport.requests.borrow()[0];
            assert_eq!(sent.path, "/auth/login");
            assert_eq!(sent.body.as_ref().unwrap()["senha"], "secret");
        }

        h.transport.respond(401, "");
        assert!(block_on(h.api.list_chamados()).is_err());
        assert_eq!(h.api.session().state(), SessionState::Unauthenticated);
        assert!(!h.storage.contains(TOKEN_KEY));
        assert_eq!(h.notifier.titles(), vec!["Não Autorizado"]);
    }

    #[test]
    fn test_requests_after_login_carry_token() {
        let h = harness();
        h.transport.respond(200, LOGIN_OK).respond(200, "[]");
        block_on(h.api.login("a@b.com", "secret")).unwrap();
        block_on(h.api.list_usuarios()).unwrap();
        assert_eq!(h.transport.requests.borrow()[1].token.as_deref(), Some("jwt-1"));
    }

    #[test]
    fn test_failed_login_propagates_without_side_effects() {
        let h = harness();
        h.api.session().initialize();
        h.transport.respond(401, r#"{"message": "Senha inválida"}"#);

        let err = block_on(h.api.login("a@b.com", "nope")).unwrap_err();
        assert!(err.is_invalid_credentials());
        assert_eq!(h.api.session().state(), SessionState::Unauthenticated);
        assert!(h.notifier.seen.borrow().is_empty());
    }

    #[test]
    fn test_register_logs_in_with_same_credentials() {
        let h = harness();
        h.transport.respond(201, "").respond(200, LOGIN_OK);

        block_on(h.api.register("Ana", "a@b.com", "secret")).unwrap();

        assert_eq!(h.transport.paths(), vec!["/auth/register", "/auth/login"]);
        let login = &h.transport.requests.borrow()[1];
        assert_eq!(login.body.as_ref().unwrap()["email"], "a@b.com");
        assert_eq!(login.body.as_ref().unwrap()["senha"], "secret");
        assert!(h.api.session().current_user().is_some());
    }

    #[test]
    fn test_failed_register_never_logs_in() {
        let h = harness();
        h.transport.respond(409, r#"{"message": "Email já cadastrado"}"#);

        let err = block_on(h.api.register("Ana", "a@b.com", "secret")).unwrap_err();
        assert_eq!(err.message(), Some("Email já cadastrado"));
        assert_eq!(h.transport.paths(), vec!["/auth/register"]);
    }

    #[test]
    fn test_logout_is_local() {
        let h = harness();
        h.transport.respond(200, LOGIN_OK);
        block_on(h.api.login("a@b.com", "secret")).unwrap();

        h.api.logout();

        assert_eq!(h.api.session().state(), SessionState::Unauthenticated);
        assert!(!h.storage.contains(USER_KEY));
        assert_eq!(h.transport.requests.borrow().len(), 1);
    }
}
