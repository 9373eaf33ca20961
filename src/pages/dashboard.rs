//! Dashboard Page
//!
//! Ticket counters plus the five most recently created tickets.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadingSkeleton, PriorityBadge, StatCard, StatusBadge};
use crate::context::use_app;
use crate::dates::format_date;
use crate::listing::{most_recent, DashboardStats};
use crate::models::Chamado;
use crate::routes::{ticket_href, NOVO_CHAMADO};

const RECENT_LIMIT: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let (chamados, set_chamados) = signal(Vec::<Chamado>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = ctx.api.list_chamados().await {
                set_chamados.set(list);
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page-description">"Visão geral dos chamados do sistema"</p>
                </div>
                <a class="btn btn-primary" href=NOVO_CHAMADO>"+ Novo Chamado"</a>
            </div>

            {move || {
                if loading.get() {
                    return view! { <LoadingSkeleton rows=4 row_class="skeleton-card" /> }.into_any();
                }
                let stats = chamados.with(|list| DashboardStats::from_chamados(list));
                let recentes = chamados.with(|list| most_recent(list, RECENT_LIMIT));
                view! {
                    <div class="dashboard-body">
                        <div class="stats-grid">
                            <StatCard title="Total de Chamados" value=stats.total />
                            <StatCard title="Abertos" value=stats.abertos value_class="stat-value text-open" />
                            <StatCard title="Em Andamento" value=stats.em_andamento value_class="stat-value text-progress" />
                            <StatCard title="Resolvidos" value=stats.resolvidos value_class="stat-value text-resolved" />
                        </div>
                        <section class="card">
                            <h2>"Chamados Recentes"</h2>
                            <p class="card-description">"Últimos chamados criados no sistema"</p>
                            <RecentList recentes />
                        </section>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn RecentList(recentes: Vec<Chamado>) -> impl IntoView {
    if recentes.is_empty() {
        return view! {
            <div class="empty-state">
                <p>"Nenhum chamado encontrado"</p>
                <a class="btn btn-primary" href=NOVO_CHAMADO>"Criar primeiro chamado"</a>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="recent-list">
            {recentes
                .into_iter()
                .map(|chamado| {
                    view! {
                        <a class="recent-row" href=ticket_href(&chamado.id)>
                            <div class="recent-main">
                                <p class="recent-title">{chamado.titulo}</p>
                                <p class="recent-date">{format_date(&chamado.created_at)}</p>
                            </div>
                            <div class="recent-badges">
                                <PriorityBadge prioridade=chamado.prioridade />
                                <StatusBadge status=chamado.status />
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
