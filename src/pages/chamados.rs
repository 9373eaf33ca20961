//! Chamados Page
//!
//! Ticket table with search. Status, priority and tag selects keep their
//! value but do not narrow the rows yet.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    DeleteConfirmButton, LoadingSkeleton, PriorityBadge, StatusBadge, TagList,
};
use crate::context::use_app;
use crate::dates::format_date;
use crate::models::{Chamado, Prioridade, Status};
use crate::routes::{ticket_href, NOVO_CHAMADO};
use crate::store::{
    store_remove_chamado, store_set_search, store_visible_chamados, use_chamados_store,
    ChamadosState, ChamadosStateStoreFields,
};
use crate::toast::Notify;

#[component]
pub fn ChamadosPage() -> impl IntoView {
    let ctx = use_app();
    let store = Store::new(ChamadosState::new());
    provide_context(store);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = ctx.api.list_chamados().await {
                log::debug!("[CHAMADOS] Loaded {} tickets", list.len());
                store.chamados().set(list);
            }
            store.loading().set(false);
        });
    });

    let visible = Memo::new(move |_| store_visible_chamados(&store));

    view! {
        <div class="page chamados-page">
            <div class="page-header">
                <div>
                    <h1>"Chamados"</h1>
                    <p class="page-description">"Gerencie todos os chamados do sistema"</p>
                </div>
                <a class="btn btn-primary" href=NOVO_CHAMADO>"+ Novo Chamado"</a>
            </div>

            <FilterBar />

            <section class="card">
                <div class="card-header">
                    <h2>"Lista de Chamados"</h2>
                    <p class="card-description">
                        {move || format!("{} chamado(s) encontrado(s)", visible.with(Vec::len))}
                    </p>
                </div>
                {move || {
                    if store.loading().get() {
                        return view! { <LoadingSkeleton /> }.into_any();
                    }
                    if visible.with(Vec::is_empty) {
                        return view! {
                            <div class="empty-state">
                                <p>"Nenhum chamado encontrado com os filtros selecionados."</p>
                            </div>
                        }
                            .into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Título"</th>
                                    <th>"Status"</th>
                                    <th>"Prioridade"</th>
                                    <th>"Tags"</th>
                                    <th>"Criado em"</th>
                                    <th class="actions-col">"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|chamado| chamado.id.clone()
                                    children=move |chamado| view! { <ChamadoRow chamado /> }
                                />
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}

/// Search box plus the not-yet-applied selects
#[component]
fn FilterBar() -> impl IntoView {
    let store = use_chamados_store();
    let filter = store.filter();

    view! {
        <div class="card filter-bar">
            <input
                type="search"
                class="filter-search"
                placeholder="Buscar por título ou descrição..."
                prop:value=move || filter.read().search.clone()
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />
            <select on:change=move |ev| {
                let status = Status::parse(&event_target_value(&ev));
                filter.update(|f| f.status = status);
            }>
                <option value="todos">"Todos os Status"</option>
                {Status::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str().to_string()>{s.label().to_string()}</option> })
                    .collect_view()}
            </select>
            <select on:change=move |ev| {
                let prioridade = Prioridade::parse(&event_target_value(&ev));
                filter.update(|f| f.prioridade = prioridade);
            }>
                <option value="todas">"Todas as Prioridades"</option>
                {Prioridade::ALL
                    .iter()
                    .map(|p| view! { <option value=p.as_str().to_string()>{p.label().to_string()}</option> })
                    .collect_view()}
            </select>
            <input
                type="text"
                class="filter-tag"
                placeholder="Filtrar por tag..."
                prop:value=move || filter.read().tag.clone()
                on:input=move |ev| filter.update(|f| f.tag = event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn ChamadoRow(chamado: Chamado) -> impl IntoView {
    let ctx = use_app();
    let store = use_chamados_store();
    let id = chamado.id.clone();

    let on_delete = Callback::new(move |_: ()| {
        let id = id.clone();
        spawn_local(async move {
            if ctx.api.delete_chamado(&id).await.is_ok() {
                log::info!("[CHAMADOS] Deleted ticket {}", id);
                store_remove_chamado(&store, &id);
                ctx.toaster.success("Sucesso", "Chamado excluído com sucesso!");
            }
        });
    });

    view! {
        <tr>
            <td>
                <p class="row-title">{chamado.titulo.clone()}</p>
                <p class="row-subtitle">{chamado.descricao.clone()}</p>
            </td>
            <td><StatusBadge status=chamado.status.clone() /></td>
            <td><PriorityBadge prioridade=chamado.prioridade.clone() /></td>
            <td><TagList tags=chamado.tags.clone() /></td>
            <td>{format_date(&chamado.created_at)}</td>
            <td class="actions-col">
                <a class="icon-btn" href=ticket_href(&chamado.id) title="Visualizar">"Ver"</a>
                <button
                    type="button"
                    class="icon-btn"
                    title="Editar"
                    on:click=move |_| ctx.toaster.success("Edição", "Funcionalidade será implementada.")
                >
                    "Editar"
                </button>
                <Show when=move || ctx.can_delete()>
                    <DeleteConfirmButton
                        button_class="icon-btn danger"
                        label="Excluir"
                        prompt="Tem certeza que deseja excluir este chamado?"
                        on_confirm=on_delete
                    />
                </Show>
            </td>
        </tr>
    }
}
