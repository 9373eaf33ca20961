//! Frontend Models
//!
//! Data structures matching backend entities. Shape inconsistencies in the
//! backend payloads (numeric vs string ids, string vs object tags) are
//! reconciled here, so nothing past deserialization has to care.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier, canonicalized to its string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Id(text),
            RawId::Number(number) => Id(number.to_string()),
        })
    }
}

/// User role ("papel")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Papel {
    Admin,
    #[default]
    User,
}

impl Papel {
    pub fn as_str(self) -> &'static str {
        match self {
            Papel::Admin => "admin",
            Papel::User => "user",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Papel::Admin => "Administrador",
            Papel::User => "Usuário",
        }
    }
}

/// User data structure (matches backend)
///
/// Only `nome` is mandatory on ingestion: the profile persisted by older
/// sessions and the `usuario` embedded in ticket payloads carry a subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub papel: Papel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultimo_login: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.papel == Papel::Admin
    }

    /// Uppercased first letter of the name, for avatars.
    pub fn initial(&self) -> String {
        self.nome
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Ticket status. Values the UI does not know are kept verbatim in `Other`
/// so one odd ticket never fails a whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Aberto,
    EmAndamento,
    Resolvido,
    Fechado,
    Other(String),
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Aberto,
        Status::EmAndamento,
        Status::Resolvido,
        Status::Fechado,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Aberto => "aberto",
            Status::EmAndamento => "em_andamento",
            Status::Resolvido => "resolvido",
            Status::Fechado => "fechado",
            Status::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Status::Aberto => "Aberto",
            Status::EmAndamento => "Em Andamento",
            Status::Resolvido => "Resolvido",
            Status::Fechado => "Fechado",
            Status::Other(raw) => raw,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Status::Aberto => "badge status-open",
            Status::EmAndamento => "badge status-progress",
            Status::Resolvido => "badge status-resolved",
            Status::Fechado => "badge status-closed",
            Status::Other(_) => "badge",
        }
    }

    /// Known statuses only; used by the filter select.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Status::parse(&value).unwrap_or(Status::Other(value))
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

/// Ticket priority ("prioridade"). Unknown values land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Prioridade {
    Baixa,
    Media,
    Alta,
    Urgente,
    Other(String),
}

impl Prioridade {
    pub const ALL: [Prioridade; 4] = [
        Prioridade::Baixa,
        Prioridade::Media,
        Prioridade::Alta,
        Prioridade::Urgente,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Prioridade::Baixa => "baixa",
            Prioridade::Media => "media",
            Prioridade::Alta => "alta",
            Prioridade::Urgente => "urgente",
            Prioridade::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Prioridade::Baixa => "Baixa",
            Prioridade::Media => "Média",
            Prioridade::Alta => "Alta",
            Prioridade::Urgente => "Urgente",
            Prioridade::Other(raw) => raw,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Prioridade::Baixa => "badge priority-low",
            Prioridade::Media => "badge priority-medium",
            Prioridade::Alta => "badge priority-high",
            Prioridade::Urgente => "badge priority-urgent",
            Prioridade::Other(_) => "badge",
        }
    }

    /// Known priorities only; a form never submits `Other`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl From<String> for Prioridade {
    fn from(value: String) -> Self {
        Prioridade::parse(&value).unwrap_or(Prioridade::Other(value))
    }
}

impl From<Prioridade> for String {
    fn from(prioridade: Prioridade) -> Self {
        prioridade.as_str().to_string()
    }
}

/// Canonical tag. The backend sends either `"vpn"` or `{"id": 1, "nome": "vpn"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTag")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub nome: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTag {
    Name(String),
    Named {
        #[serde(default)]
        id: Option<Id>,
        nome: String,
    },
}

impl From<RawTag> for Tag {
    fn from(raw: RawTag) -> Self {
        match raw {
            RawTag::Name(nome) => Tag { id: None, nome },
            RawTag::Named { id, nome } => Tag { id, nome },
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Ticket ("chamado") data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chamado {
    pub id: Id,
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    pub status: Status,
    pub prioridade: Prioridade,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub usuario_id: Option<Id>,
    #[serde(default)]
    pub usuario: Option<User>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChamadoForm {
    pub titulo: String,
    pub descricao: String,
    pub prioridade: Prioridade,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct LoginForm<'a> {
    pub email: &'a str,
    pub senha: &'a str,
}

#[derive(Serialize)]
pub struct RegisterForm<'a> {
    pub nome: &'a str,
    pub email: &'a str,
    pub senha: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chamado_json(tags: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "c1",
            "titulo": "Printer issue",
            "descricao": "Paper jam",
            "status": "em_andamento",
            "prioridade": "alta",
            "tags": tags,
            "usuarioId": 7,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-01T10:00:00.000Z"
        })
    }

    #[test]
    fn test_tags_accept_both_shapes() {
        let chamado: Chamado =
            serde_json::from_value(chamado_json(json!(["vpn", {"id": 3, "nome": "email"}]))).unwrap();

        assert_eq!(
            chamado.tags,
            vec![
                Tag { id: None, nome: "vpn".into() },
                Tag { id: Some(Id::new("3")), nome: "email".into() },
            ]
        );
    }

    #[test]
    fn test_null_or_missing_tags_become_empty() {
        let chamado: Chamado = serde_json::from_value(chamado_json(json!(null))).unwrap();
        assert!(chamado.tags.is_empty());

        let mut value = chamado_json(json!([]));
        value.as_object_mut().unwrap().remove("tags");
        let chamado: Chamado = serde_json::from_value(value).unwrap();
        assert!(chamado.tags.is_empty());
    }

    #[test]
    fn test_numeric_ids_are_canonicalized() {
        let chamado: Chamado = serde_json::from_value(chamado_json(json!([]))).unwrap();
        assert_eq!(chamado.usuario_id, Some(Id::new("7")));
        assert_eq!(chamado.status, Status::EmAndamento);
        assert_eq!(chamado.prioridade, Prioridade::Alta);
    }

    #[test]
    fn test_user_without_papel_defaults_to_user() {
        let user: User =
            serde_json::from_value(json!({"id": "u1", "nome": "ana", "email": "a@b.com"})).unwrap();
        assert_eq!(user.papel, Papel::User);
        assert!(!user.is_admin());
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn test_user_survives_storage_round_trip() {
        let user: User = serde_json::from_value(json!({
            "id": "u1", "nome": "Ana", "email": "a@b.com", "papel": "admin",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        let stored = serde_json::to_string(&user).unwrap();
        assert_eq!(serde_json::from_str::<User>(&stored).unwrap(), user);
    }

    #[test]
    fn test_form_serializes_wire_names() {
        let form = ChamadoForm {
            titulo: "t".into(),
            descricao: "d".into(),
            prioridade: Prioridade::Media,
            tags: vec!["vpn".into()],
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"titulo": "t", "descricao": "d", "prioridade": "media", "tags": ["vpn"]})
        );
    }

    #[test]
    fn test_parse_select_values() {
        assert_eq!(Status::parse("fechado"), Some(Status::Fechado));
        assert_eq!(Prioridade::parse("urgente"), Some(Prioridade::Urgente));
        assert_eq!(Prioridade::parse("todas"), None);
    }

    #[test]
    fn test_unknown_status_and_priority_are_kept_verbatim() {
        let mut value = chamado_json(json!([]));
        value["status"] = json!("pendente");
        value["prioridade"] = json!("critica");
        let chamado: Chamado = serde_json::from_value(value).unwrap();

        assert_eq!(chamado.status, Status::Other("pendente".to_string()));
        assert_eq!(chamado.status.label(), "pendente");
        assert_eq!(chamado.status.badge_class(), "badge");
        assert_eq!(chamado.prioridade.label(), "critica");
        assert_eq!(Status::parse("pendente"), None);
        assert_eq!(serde_json::to_value(&chamado.prioridade).unwrap(), json!("critica"));
    }
}
