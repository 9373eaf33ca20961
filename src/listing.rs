//! Listing Utilities
//!
//! Filtering and aggregation behind the ticket and user views.

use std::cmp::Reverse;

use crate::dates::parse_timestamp;
use crate::models::{Chamado, Id, Papel, Prioridade, Status, User};

/// Ticket list filter inputs.
///
/// Only `search` is applied. `status`, `prioridade` and `tag` are kept as UI
/// state; filtering on them is not implemented.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    pub search: String,
    pub status: Option<Status>,
    pub prioridade: Option<Prioridade>,
    pub tag: String,
}

impl TicketFilter {
    pub fn apply(&self, chamados: &[Chamado]) -> Vec<Chamado> {
        let needle = self.search.trim().to_lowercase();
        chamados
            .iter()
            .filter(|c| matches_search(c, &needle))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring match on title or description.
/// `needle` must already be lowercase.
fn matches_search(chamado: &Chamado, needle: &str) -> bool {
    needle.is_empty()
        || chamado.titulo.to_lowercase().contains(needle)
        || chamado.descricao.to_lowercase().contains(needle)
}

/// Drop a ticket from an already-loaded list.
pub fn remove_chamado(chamados: &mut Vec<Chamado>, id: &Id) {
    chamados.retain(|c| &c.id != id);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub abertos: usize,
    pub em_andamento: usize,
    pub resolvidos: usize,
}

impl DashboardStats {
    pub fn from_chamados(chamados: &[Chamado]) -> Self {
        let count = |status: Status| chamados.iter().filter(|c| c.status == status).count();
        Self {
            total: chamados.len(),
            abertos: count(Status::Aberto),
            em_andamento: count(Status::EmAndamento),
            resolvidos: count(Status::Resolvido),
        }
    }
}

/// Newest `limit` tickets by creation time. Unparsable timestamps sort last.
pub fn most_recent(chamados: &[Chamado], limit: usize) -> Vec<Chamado> {
    let mut sorted = chamados.to_vec();
    sorted.sort_by_key(|c| Reverse(parse_timestamp(&c.created_at)));
    sorted.truncate(limit);
    sorted
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub admins: usize,
    pub comuns: usize,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        let admins = users.iter().filter(|u| u.papel == Papel::Admin).count();
        Self {
            total: users.len(),
            admins,
            comuns: users.len() - admins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chamado(id: &str, titulo: &str, status: Status, created_at: &str) -> Chamado {
        Chamado {
            id: Id::new(id),
            titulo: titulo.to_string(),
            descricao: format!("{} details", id),
            status,
            prioridade: Prioridade::Media,
            tags: Vec::new(),
            usuario_id: None,
            usuario: None,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    fn sample() -> Vec<Chamado> {
        vec![
            make_chamado("1", "Printer issue", Status::Aberto, "2024-05-01T10:00:00Z"),
            make_chamado("2", "Network issue", Status::EmAndamento, "2024-05-03T10:00:00Z"),
        ]
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let filter = TicketFilter { search: "print".to_string(), ..Default::default() };
        let found = filter.apply(&sample());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].titulo, "Printer issue");
    }

    #[test]
    fn test_search_matches_description() {
        let filter = TicketFilter { search: "  2 DETAILS ".to_string(), ..Default::default() };
        let found = filter.apply(&sample());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Id::new("2"));
    }

    #[test]
    fn test_unwired_filters_do_not_narrow() {
        let filter = TicketFilter {
            status: Some(Status::Fechado),
            prioridade: Some(Prioridade::Urgente),
            tag: "vpn".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample()).len(), 2);
    }

    #[test]
    fn test_remove_chamado_keeps_others() {
        let mut list = sample();
        remove_chamado(&mut list, &Id::new("1"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, Id::new("2"));
    }

    #[test]
    fn test_dashboard_stats() {
        let mut list = sample();
        list.push(make_chamado("3", "Old", Status::Resolvido, "2024-01-01T00:00:00Z"));
        list.push(make_chamado("4", "Older", Status::Fechado, "2023-01-01T00:00:00Z"));

        let stats = DashboardStats::from_chamados(&list);
        assert_eq!(stats, DashboardStats { total: 4, abertos: 1, em_andamento: 1, resolvidos: 1 });
    }

    #[test]
    fn test_most_recent_orders_and_limits() {
        let mut list = sample();
        list.push(make_chamado("3", "Broken date", Status::Aberto, "??"));
        list.push(make_chamado("4", "Oldest", Status::Aberto, "2023-01-01T00:00:00Z"));

        let ids: Vec<_> = most_recent(&list, 3).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Id::new("2"), Id::new("1"), Id::new("4")]);
    }

    #[test]
    fn test_user_stats() {
        let user = |papel| User {
            id: Id::default(),
            nome: "x".to_string(),
            email: String::new(),
            papel,
            created_at: None,
            updated_at: None,
            ultimo_login: None,
        };
        let stats = UserStats::from_users(&[user(Papel::Admin), user(Papel::User), user(Papel::User)]);
        assert_eq!(stats, UserStats { total: 3, admins: 1, comuns: 2 });
    }
}
