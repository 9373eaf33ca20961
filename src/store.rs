//! Ticket List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the
//! Chamados page: rows, loading flag and filter inputs update independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::listing::{self, TicketFilter};
use crate::models::{Chamado, Id};

#[derive(Clone, Debug, Default, Store)]
pub struct ChamadosState {
    /// Everything loaded from the backend
    pub chamados: Vec<Chamado>,
    pub loading: bool,
    pub filter: TicketFilter,
}

impl ChamadosState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

pub type ChamadosStore = Store<ChamadosState>;

/// Get the ticket list store from context
pub fn use_chamados_store() -> ChamadosStore {
    expect_context::<ChamadosStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Rows currently visible under the filter
pub fn store_visible_chamados(store: &ChamadosStore) -> Vec<Chamado> {
    let filter = store.filter().get();
    filter.apply(&store.chamados().read())
}

/// Remove a ticket by ID without re-fetching
pub fn store_remove_chamado(store: &ChamadosStore, id: &Id) {
    listing::remove_chamado(&mut store.chamados().write(), id);
}

pub fn store_set_search(store: &ChamadosStore, search: String) {
    store.filter().update(|f| f.search = search);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chamado(id: &str, titulo: &str) -> Chamado {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "titulo": titulo,
            "descricao": "",
            "status": "aberto",
            "prioridade": "media"
        }))
        .unwrap()
    }

    #[test]
    fn test_search_and_local_delete() {
        let store = Store::new(ChamadosState {
            chamados: vec![chamado("1", "Printer issue"), chamado("2", "Network issue")],
            ..ChamadosState::new()
        });

        store_set_search(&store, "print".to_string());
        let visible = store_visible_chamados(&store);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].titulo, "Printer issue");

        store_set_search(&store, String::new());
        store_remove_chamado(&store, &Id::new("1"));
        let ids: Vec<String> = store_visible_chamados(&store)
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }
}
