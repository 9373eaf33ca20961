//! Request Client
//!
//! Every backend call goes through `ApiClient`. The intercepted path ends
//! the session on 401/403 and reports every other failure as a toast; the
//! quiet path only returns the error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, GENERIC_REQUEST_ERROR};
use crate::toast::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the backend base URL, e.g. `/chamados`
    pub path: String,
    pub token: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Moves one request over the wire
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Session access needed by the request path
pub trait SessionHooks {
    fn token(&self) -> Option<String>;
    /// Called when the backend rejects the current credentials
    fn expire(&self);
}

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    base_url: &'static str,
}

impl FetchTransport {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        use gloo_net::http::Request;

        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");
        if let Some(token) = &request.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

/// Pull the backend `message` out of an error body. NestJS-style validation
/// errors send a list of messages.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return String::new();
    };
    match value.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => String::new(),
    }
}

/// `{ "data": T }` envelopes are unwrapped; anything else is the payload itself.
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(map) if map.len() == 1 && map.contains_key("data") => {
            let mut map = map;
            map.remove("data").unwrap_or_default()
        }
        other => other,
    }
}

fn decode<R: DeserializeOwned>(raw: RawResponse) -> Result<R, ApiError> {
    if !(200..300).contains(&raw.status) {
        return Err(ApiError::from_status(raw.status, error_message(&raw.body)));
    }

    let body = if raw.body.trim().is_empty() { "null" } else { raw.body.as_str() };
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_value(unwrap_envelope(value)).map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Debug, Clone, Copy)]
pub struct ApiClient<T, H, N> {
    transport: T,
    session: H,
    notifier: N,
}

impl<T: Transport, H: SessionHooks, N: Notify> ApiClient<T, H, N> {
    pub fn new(transport: T, session: H, notifier: N) -> Self {
        Self { transport, session, notifier }
    }

    pub fn session(&self) -> &H {
        &self.session
    }

    /// Send without any global side effects.
    pub async fn send_quiet<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        log::debug!("[API] {:?} {}", method, path);
        let request = ApiRequest {
            method,
            path: path.to_string(),
            token: self.session.token(),
            body,
        };
        let raw = self.transport.send(request).await?;
        decode(raw)
    }

    /// Send through the interceptor. The error is still returned so the
    /// caller can reset its own loading state.
    pub async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        let result = self.send_quiet(method, path, body).await;
        if let Err(err) = &result {
            self.intercept(err);
        }
        result
    }

    fn intercept(&self, err: &ApiError) {
        if err.is_unauthorized() {
            log::warn!("[API] {}, ending session", err);
            self.session.expire();
            self.notifier.error(
                "Não Autorizado",
                "Sua sessão expirou ou você não tem permissão.",
            );
        } else {
            log::error!("[API] {}", err);
            self.notifier
                .error("Erro de Requisição", &err.user_message(GENERIC_REQUEST_ERROR));
        }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = encode(body)?;
        self.send(Method::Post, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::Delete, path, None).await
    }
}

pub(crate) fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}


#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::de::IgnoredAny;

    use super::testing::{FixedSession, ScriptedTransport};
    use super::*;
    use crate::toast::testing::RecordingNotifier;

    fn client(
        token: Option<&str>,
    ) -> (ApiClient<ScriptedTransport, FixedSession, RecordingNotifier>, ScriptedTransport, FixedSession, RecordingNotifier) {
        let transport = ScriptedTransport::default();
        let session = FixedSession {
            token: token.map(str::to_string),
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let api = ApiClient::new(transport.clone(), session.clone(), notifier.clone());
        (api, transport, session, notifier)
    }

    #[test]
    fn test_bearer_token_is_attached() {
        let (api, transport, _, _) = client(Some("tok"));
        transport.respond(200, "[]");

        let items: Vec<u32> = block_on(api.get("/chamados")).unwrap();
        assert!(items.is_empty());
        assert_eq!(transport.requests.borrow()[0].token.as_deref(), Some("tok"));
        assert_eq!(transport.requests.borrow()[0].method, Method::Get);
    }

    #[test]
    fn test_data_envelope_is_unwrapped() {
        let (api, transport, _, _) = client(None);
        transport.respond(200, r#"{"data": [1, 2]}"#);
        let items: Vec<u32> = block_on(api.get("/x")).unwrap();
        assert_eq!(items, vec![1, 2]);

        // An object that merely contains `data` among other keys is left intact.
        transport.respond(200, r#"{"data": 1, "total": 2}"#);
        let value: Value = block_on(api.get("/x")).unwrap();
        assert_eq!(value["total"], 2);
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let (api, transport, _, _) = client(None);
        transport.respond(204, "");
        let _: IgnoredAny = block_on(api.delete("/chamados/1")).unwrap();
        transport.respond(204, "");
        let nothing: Option<u32> = block_on(api.delete("/chamados/1")).unwrap();
        assert_eq!(nothing, None);
    }

    #[test]
    fn test_unauthorized_expires_session_and_notifies() {
        let (api, transport, session, notifier) = client(Some("old"));
        transport.respond(401, r#"{"message": "jwt expired"}"#);

        let err = block_on(api.get::<Value>("/chamados")).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized { status: 401, message: "jwt expired".to_string() });
        assert!(session.expired.get());
        assert_eq!(notifier.titles(), vec!["Não Autorizado"]);
    }

    #[test]
    fn test_forbidden_is_treated_like_unauthorized() {
        let (api, transport, session, _) = client(Some("tok"));
        transport.respond(403, "");
        assert!(block_on(api.get::<Value>("/usuarios")).unwrap_err().is_unauthorized());
        assert!(session.expired.get());
    }

    #[test]
    fn test_other_failures_notify_with_backend_message() {
        let (api, transport, session, notifier) = client(Some("tok"));
        transport.respond(400, r#"{"message": ["titulo should not be empty", "prioridade must be valid"]}"#);

        let err = block_on(api.post::<_, Value>("/chamados", &serde_json::json!({}))).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(!session.expired.get());
        let seen = notifier.seen.borrow();
        assert_eq!(seen[0].0, "Erro de Requisição");
        assert_eq!(seen[0].1, "titulo should not be empty; prioridade must be valid");
    }

    #[test]
    fn test_network_failure_uses_fallback_message() {
        let (api, _, _, notifier) = client(None);
        let err = block_on(api.get::<Value>("/chamados")).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(notifier.seen.borrow()[0].1, GENERIC_REQUEST_ERROR);
    }

    #[test]
    fn test_quiet_path_has_no_side_effects() {
        let (api, transport, session, notifier) = client(Some("tok"));
        transport.respond(401, r#"{"message": "Senha incorreta"}"#);

        let err = block_on(api.send_quiet::<Value>(Method::Post, "/auth/login", None)).unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!session.expired.get());
        assert!(notifier.seen.borrow().is_empty());
    }
}
