//! Route Guard
//!
//! Picks which route tree is mounted for the current session. Public routes
//! are login and registration; everything else needs a session. Path
//! matching itself is left to `leptos_router`. Admin-only controls are
//! hidden inside the pages, not gated here.

use crate::api::encode_segment;
use crate::auth::SessionState;
use crate::models::Id;

pub const LOGIN: &str = "/login";
pub const REGISTRO: &str = "/registro";
pub const DASHBOARD: &str = "/dashboard";
pub const CHAMADOS: &str = "/chamados";
pub const NOVO_CHAMADO: &str = "/chamados/novo";
pub const USUARIOS: &str = "/usuarios";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGate {
    /// Session not settled yet
    Placeholder,
    /// Signed in: app routes, auth pages bounce to the dashboard
    Protected,
    /// Signed out: auth pages only, everything else bounces to login
    Public,
}

pub fn decide(state: &SessionState) -> RouteGate {
    match state {
        SessionState::Loading => RouteGate::Placeholder,
        SessionState::Authenticated(_) => RouteGate::Protected,
        SessionState::Unauthenticated => RouteGate::Public,
    }
}

pub fn ticket_href(id: &Id) -> String {
    format!("{}/{}", CHAMADOS, encode_segment(id.as_str()))
}

pub fn ticket_edit_href(id: &Id) -> String {
    format!("{}/editar/{}", CHAMADOS, encode_segment(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::storage::StoredSession;

    #[test]
    fn test_gate_follows_session() {
        let user: User = serde_json::from_str(r#"{"id": "u1", "nome": "Ana"}"#).unwrap();
        let signed_in = SessionState::Authenticated(StoredSession { token: "t".to_string(), user });

        assert_eq!(decide(&SessionState::Loading), RouteGate::Placeholder);
        assert_eq!(decide(&signed_in), RouteGate::Protected);
        assert_eq!(decide(&SessionState::Unauthenticated), RouteGate::Public);
    }

    #[test]
    fn test_hrefs_encode_id_segment() {
        let id = Id::new("x/y");
        assert_eq!(ticket_href(&id), "/chamados/x%2Fy");
        assert_eq!(ticket_edit_href(&id), "/chamados/editar/x%2Fy");
        assert_eq!(ticket_href(&Id::new("42")), "/chamados/42");
    }
}
