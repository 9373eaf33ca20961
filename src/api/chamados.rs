//! Ticket Endpoints

use serde::de::IgnoredAny;

use super::client::{ApiClient, SessionHooks, Transport};
use super::encode_segment;
use crate::error::ApiError;
use crate::models::{Chamado, ChamadoForm, Id};
use crate::toast::Notify;

fn chamado_path(id: &Id) -> String {
    format!("/chamados/{}", encode_segment(id.as_str()))
}

impl<T: Transport, H: SessionHooks, N: Notify> ApiClient<T, H, N> {
    pub async fn list_chamados(&self) -> Result<Vec<Chamado>, ApiError> {
        self.get("/chamados").await
    }

    pub async fn get_chamado(&self, id: &Id) -> Result<Chamado, ApiError> {
        self.get(&chamado_path(id)).await
    }

    pub async fn create_chamado(&self, form: &ChamadoForm) -> Result<Chamado, ApiError> {
        self.post("/chamados", form).await
    }

    pub async fn delete_chamado(&self, id: &Id) -> Result<(), ApiError> {
        let _: IgnoredAny = self.delete(&chamado_path(id)).await?;
        Ok(())
    }
}
