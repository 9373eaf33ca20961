//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::use_app;
use crate::routes::{DASHBOARD, REGISTRO};
use crate::toast::Notify;

pub(crate) const MISSING_FIELDS: &str = "Por favor, preencha todos os campos.";

/// Both fields are required; whitespace-only counts as empty.
pub(crate) fn validate_login(email: &str, senha: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || senha.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_string();
        let senha_value = senha.get_untracked();
        if let Err(message) = validate_login(&email_value, &senha_value) {
            ctx.toaster.error("Erro", message);
            return;
        }

        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match ctx.api.login(&email_value, &senha_value).await {
                Ok(_) => {
                    ctx.toaster.success("Sucesso", "Login realizado com sucesso!");
                    navigate(DASHBOARD, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("[LOGIN] {}", err);
                    if err.is_invalid_credentials() {
                        ctx.toaster.error(
                            "Senha Inválida",
                            "A senha digitada está incorreta. Por favor, digite novamente.",
                        );
                        senha.set(String::new());
                    } else {
                        ctx.toaster.error("Erro", &err.user_message("Erro ao fazer login"));
                    }
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="auth-header">
                    <span class="brand-mark auth-logo">"Á"</span>
                    <h1>"Álamo Tickets"</h1>
                    <p class="card-description">"Entre com suas credenciais para acessar o sistema"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="seu@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="senha">"Senha"</label>
                    <div class="password-row">
                        <input
                            id="senha"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Digite sua senha"
                            prop:value=move || senha.get()
                            on:input=move |ev| senha.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="icon-btn"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                        </button>
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <p class="auth-footer">
                    "Não tem uma conta? " <a href=REGISTRO>"Criar conta"</a>
                </p>
            </div>
        </div>
    }
}
