//! Álamo Tickets App
//!
//! Root component: provides the shared context, settles the session and
//! mounts the route tree that matches it.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::{Layout, ToastStack};
use crate::config::AppConfig;
use crate::context::{use_app, AppContext};
use crate::pages::{
    ChamadosPage, DashboardPage, LoginPage, NotFoundPage, NovoChamadoPage, RegistroPage,
    TicketDetalhesPage, TicketEdicaoPage, UsuariosPage,
};
use crate::routes::{decide, RouteGate, DASHBOARD, LOGIN};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    // Runs after the first render, so the loading placeholder shows first
    Effect::new(move |_| ctx.api.session().initialize());

    view! {
        <Router>
            <GuardedOutlet />
        </Router>
        <ToastStack />
    }
}

#[component]
fn GuardedOutlet() -> impl IntoView {
    let ctx = use_app();
    let gate = Memo::new(move |_| ctx.session.with(decide));

    move || match gate.get() {
        RouteGate::Placeholder => view! {
            <div class="app-loading">
                <div class="spinner"></div>
                <p>"Carregando Sistema..."</p>
            </div>
        }
        .into_any(),
        RouteGate::Protected => view! { <ProtectedRoutes /> }.into_any(),
        RouteGate::Public => view! { <PublicRoutes /> }.into_any(),
    }
}

/// Signed-in routes, rendered inside the sidebar layout
#[component]
fn ProtectedRoutes() -> impl IntoView {
    view! {
        <Layout>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD /> } />
                <Route path=StaticSegment("login") view=|| view! { <Redirect path=DASHBOARD /> } />
                <Route path=StaticSegment("registro") view=|| view! { <Redirect path=DASHBOARD /> } />
                <Route path=StaticSegment("dashboard") view=DashboardPage />
                <Route path=StaticSegment("chamados") view=ChamadosPage />
                <Route path=(StaticSegment("chamados"), StaticSegment("novo")) view=NovoChamadoPage />
                // "editar" without an id is not a ticket
                <Route path=(StaticSegment("chamados"), StaticSegment("editar")) view=NotFoundPage />
                <Route
                    path=(StaticSegment("chamados"), StaticSegment("editar"), ParamSegment("id"))
                    view=TicketEdicaoPage
                />
                <Route path=(StaticSegment("chamados"), ParamSegment("id")) view=TicketDetalhesPage />
                <Route path=StaticSegment("usuarios") view=UsuariosPage />
            </Routes>
        </Layout>
    }
}

/// Signed-out routes; anything else goes to login
#[component]
fn PublicRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path=LOGIN /> }>
            <Route path=StaticSegment("login") view=LoginPage />
            <Route path=StaticSegment("registro") view=RegistroPage />
        </Routes>
    }
}
