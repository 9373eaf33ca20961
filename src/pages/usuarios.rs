//! Users Page
//!
//! Counters by role plus the full user table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadingSkeleton, PapelBadge, StatCard};
use crate::context::use_app;
use crate::dates::format_date;
use crate::listing::UserStats;
use crate::models::User;
use crate::toast::Notify;

/// Last login column; users who never signed in show "Nunca"
pub(crate) fn last_login_label(user: &User) -> String {
    user.ultimo_login
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "Nunca".to_string())
}

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let ctx = use_app();
    let (usuarios, set_usuarios) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = ctx.api.list_usuarios().await {
                set_usuarios.set(list);
            }
            set_loading.set(false);
        });
    });

    let not_implemented = move |_| ctx.toaster.success("Edição", "Funcionalidade será implementada.");

    view! {
        <div class="page usuarios-page">
            <div class="page-header">
                <div>
                    <h1>"Usuários"</h1>
                    <p class="page-description">"Gerencie os usuários do sistema"</p>
                </div>
                <button type="button" class="btn btn-primary" on:click=not_implemented>
                    "+ Convidar Usuário"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <LoadingSkeleton rows=4 /> }.into_any();
                }
                let stats = usuarios.with(|list| UserStats::from_users(list));
                view! {
                    <div class="usuarios-body">
                        <div class="stats-grid">
                            <StatCard title="Total de Usuários" value=stats.total />
                            <StatCard title="Administradores" value=stats.admins />
                            <StatCard title="Usuários Comuns" value=stats.comuns />
                        </div>
                        <section class="card">
                            <h2>"Lista de Usuários"</h2>
                            <UserTable usuarios=usuarios.get() />
                        </section>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn UserTable(usuarios: Vec<User>) -> impl IntoView {
    let ctx = use_app();

    if usuarios.is_empty() {
        return view! {
            <div class="empty-state">
                <p>"Nenhum usuário encontrado"</p>
            </div>
        }
        .into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Usuário"</th>
                    <th>"Email"</th>
                    <th>"Papel"</th>
                    <th>"Cadastro"</th>
                    <th>"Último Acesso"</th>
                    <th class="actions-col">"Ações"</th>
                </tr>
            </thead>
            <tbody>
                {usuarios
                    .into_iter()
                    .map(|user| {
                        let initial = user.initial();
                        let last_login = last_login_label(&user);
                        let created = user.created_at.as_deref().map(format_date).unwrap_or_default();
                        view! {
                            <tr>
                                <td>
                                    <div class="user-cell">
                                        <span class="avatar">{initial}</span>
                                        <span>{user.nome}</span>
                                    </div>
                                </td>
                                <td>{user.email}</td>
                                <td><PapelBadge papel=user.papel /></td>
                                <td>{created}</td>
                                <td>{last_login}</td>
                                <td class="actions-col">
                                    <button
                                        type="button"
                                        class="icon-btn"
                                        title="Editar"
                                        on:click=move |_| {
                                            ctx.toaster.success("Edição", "Funcionalidade será implementada.")
                                        }
                                    >
                                        "Editar"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
