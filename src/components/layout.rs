//! Layout Component
//!
//! Sidebar shell wrapped around every signed-in page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app;
use crate::routes::{CHAMADOS, DASHBOARD, NOVO_CHAMADO, USUARIOS};

/// (title, url, exact match). The active link gets `aria-current="page"`.
const NAV_ITEMS: &[(&str, &str, bool)] = &[
    ("Dashboard", DASHBOARD, true),
    ("Chamados", CHAMADOS, true),
    ("Novo Chamado", NOVO_CHAMADO, false),
    ("Usuários", USUARIOS, false),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <AppSidebar />
            <main class="main-content">{children()}</main>
        </div>
    }
}

#[component]
fn AppSidebar() -> impl IntoView {
    let ctx = use_app();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <span class="brand-mark sidebar-logo">"Á"</span>
                <h2>"Álamo Tickets"</h2>
            </div>

            <nav class="sidebar-nav">
                <p class="sidebar-group-label">"Navegação"</p>
                {NAV_ITEMS
                    .iter()
                    .map(|&(title, url, exact)| {
                        view! {
                            <A href=url exact=exact attr:class="nav-link">
                                {title}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                {move || {
                    ctx.current_user()
                        .map(|user| {
                            view! {
                                <div class="sidebar-user">
                                    <p class="sidebar-user-name">{user.nome}</p>
                                    <p class="sidebar-user-email">{user.email}</p>
                                    <p class="sidebar-user-role">{user.papel.as_str()}</p>
                                </div>
                            }
                        })
                }}
                <button class="btn btn-outline logout-btn" on:click=move |_| ctx.api.logout()>
                    "Sair"
                </button>
            </div>
        </aside>
    }
}
