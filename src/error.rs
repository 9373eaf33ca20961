//! Request Errors
//!
//! Single error type returned by every backend call.

use thiserror::Error;

/// Fallback shown when the backend did not say anything useful.
pub const GENERIC_REQUEST_ERROR: &str = "Erro de comunicação com o servidor.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 or 403. Intercepted requests end the session when they see this.
    #[error("not authorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized { status, message },
            _ => ApiError::Http { status, message },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. } | ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Encode(_) => None,
        }
    }

    /// Backend-provided message, if there was one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message, .. } | ApiError::Http { message, .. }
                if !message.is_empty() =>
            {
                Some(message)
            }
            _ => None,
        }
    }

    pub fn user_message(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Whether a failed login should be reported as a wrong password.
    pub fn is_invalid_credentials(&self) -> bool {
        if self.status() == Some(401) {
            return true;
        }
        let message = self.message().unwrap_or_default().to_lowercase();
        ["senha", "password", "incorrect", "inválida"]
            .iter()
            .any(|needle| message.contains(needle))
    }
}
