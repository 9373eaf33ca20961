use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::models::Id;
use crate::routes::{ticket_href, CHAMADOS};

/// Placeholder edit screen; saving just returns to the list
#[component]
pub fn TicketEdicaoPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || Id::new(params.read().get("id").unwrap_or_default());

    view! {
        <div class="page ticket-edit-page">
            <div class="page-header">
                <div>
                    <a class="back-link" href=move || ticket_href(&id())>"← Voltar"</a>
                    <h1>{move || format!("Editar Chamado #{}", id())}</h1>
                </div>
            </div>
            <section class="card">
                <p>
                    {move || {
                        format!("Funcionalidade de edição para o Chamado {} será implementada aqui.", id())
                    }}
                </p>
                <a class="btn btn-primary" href=CHAMADOS>"Salvar Edição"</a>
            </section>
        </div>
    }
}
