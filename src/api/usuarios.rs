//! User Endpoints

use super::client::{ApiClient, SessionHooks, Transport};
use crate::error::ApiError;
use crate::models::User;
use crate::toast::Notify;

impl<T: Transport, H: SessionHooks, N: Notify> ApiClient<T, H, N> {
    pub async fn list_usuarios(&self) -> Result<Vec<User>, ApiError> {
        self.get("/usuarios").await
    }
}
