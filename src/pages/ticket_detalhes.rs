//! Ticket Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::components::{DeleteConfirmButton, LoadingSkeleton, PriorityBadge, StatusBadge};
use crate::context::use_app;
use crate::dates::format_date_time;
use crate::models::{Chamado, Id};
use crate::routes::{ticket_edit_href, CHAMADOS};
use crate::toast::Notify;

/// Creator name, or a placeholder when the backend did not embed one
pub(crate) fn creator_name(chamado: &Chamado) -> &str {
    chamado
        .usuario
        .as_ref()
        .map(|user| user.nome.as_str())
        .filter(|nome| !nome.is_empty())
        .unwrap_or("Usuário Indisponível")
}

#[component]
pub fn TicketDetalhesPage() -> impl IntoView {
    let ctx = use_app();
    let params = use_params_map();
    let ticket_id = Memo::new(move |_| params.read().get("id").map(Id::new));
    let (ticket, set_ticket) = signal(None::<Chamado>);
    // Set once the ticket failed to load or was deleted
    let (gone, set_gone) = signal(false);

    // Reloads when navigating from one ticket to another
    Effect::new(move |_| {
        let Some(id) = ticket_id.get() else {
            set_gone.set(true);
            return;
        };
        set_ticket.set(None);
        spawn_local(async move {
            match ctx.api.get_chamado(&id).await {
                Ok(chamado) => set_ticket.set(Some(chamado)),
                Err(err) => {
                    log::warn!("[CHAMADO] Could not load {}: {}", id, err);
                    set_gone.set(true);
                }
            }
        });
    });

    let on_delete = Callback::new(move |_: ()| {
        let Some(id) = ticket_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if ctx.api.delete_chamado(&id).await.is_ok() {
                log::info!("[CHAMADO] Deleted ticket {}", id);
                ctx.toaster.success("Sucesso", "Chamado excluído com sucesso!");
                set_gone.set(true);
            }
        });
    });

    view! {
        <div class="page ticket-page">
            {move || {
                if gone.get() {
                    return view! { <Redirect path=CHAMADOS /> }.into_any();
                }
                match ticket.get() {
                    None => view! { <LoadingSkeleton rows=3 /> }.into_any(),
                    Some(chamado) => view! { <TicketView chamado on_delete /> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn TicketView(chamado: Chamado, on_delete: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let creator = creator_name(&chamado).to_string();
    let created = format_date_time(&chamado.created_at);
    let edit_href = ticket_edit_href(&chamado.id);

    view! {
        <div class="page-header">
            <div>
                <a class="back-link" href=CHAMADOS>"← Voltar"</a>
                <h1>{chamado.titulo}</h1>
                <div class="ticket-badges">
                    <PriorityBadge prioridade=chamado.prioridade />
                    <StatusBadge status=chamado.status />
                </div>
            </div>
            <div class="page-actions">
                <a class="btn btn-outline" href=edit_href>"Editar Chamado"</a>
                <Show when=move || ctx.can_delete()>
                    <DeleteConfirmButton
                        button_class="btn btn-destructive"
                        label="Excluir Chamado"
                        prompt="Tem certeza que deseja excluir este chamado?"
                        on_confirm=on_delete
                    />
                </Show>
            </div>
        </div>

        <div class="ticket-grid">
            <section class="card ticket-main">
                <h2>"Descrição"</h2>
                <p class="ticket-description">{chamado.descricao}</p>
                {(!chamado.tags.is_empty())
                    .then(|| {
                        view! {
                            <h3>"Plataformas"</h3>
                            <div class="tag-list">
                                {chamado
                                    .tags
                                    .into_iter()
                                    .map(|tag| view! { <span class="badge tag-badge">{tag.nome}</span> })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </section>
            <aside class="card ticket-info">
                <h2>"Informações"</h2>
                <p class="info-label">"Criado por"</p>
                <p class="info-value">{creator}</p>
                <p class="info-label">"Criado em"</p>
                <p class="info-value">{created}</p>
            </aside>
        </div>
    }
}
