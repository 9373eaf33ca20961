//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::use_app;
use crate::pages::login::MISSING_FIELDS;
use crate::routes::{DASHBOARD, LOGIN};
use crate::toast::Notify;

pub(crate) const PASSWORD_MISMATCH: &str = "As senhas não coincidem.";

pub(crate) fn validate_registro(
    nome: &str,
    email: &str,
    senha: &str,
    confirmacao: &str,
) -> Result<(), &'static str> {
    if nome.trim().is_empty() || email.trim().is_empty() || senha.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if senha != confirmacao {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

#[component]
pub fn RegistroPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let confirmacao = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let nome_value = nome.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let senha_value = senha.get_untracked();
        if let Err(message) =
            validate_registro(&nome_value, &email_value, &senha_value, &confirmacao.get_untracked())
        {
            ctx.toaster.error("Erro", message);
            return;
        }

        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match ctx.api.register(&nome_value, &email_value, &senha_value).await {
                Ok(_) => {
                    ctx.toaster.success("Sucesso", "Conta criada com sucesso!");
                    navigate(DASHBOARD, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("[REGISTRO] {}", err);
                    ctx.toaster.error("Erro", &err.user_message("Erro ao criar conta"));
                    busy.set(false);
                }
            }
        });
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="auth-header">
                    <span class="brand-mark auth-logo">"Á"</span>
                    <h1>"Criar Conta"</h1>
                    <p class="card-description">"Preencha os dados para se cadastrar"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label for="nome">"Nome"</label>
                    <input
                        id="nome"
                        type="text"
                        placeholder="Seu nome completo"
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
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
                            type=password_type
                            placeholder="Crie uma senha"
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
                    <label for="confirmacao">"Confirmar Senha"</label>
                    <input
                        id="confirmacao"
                        type=password_type
                        placeholder="Repita a senha"
                        prop:value=move || confirmacao.get()
                        on:input=move |ev| confirmacao.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Criando conta..." } else { "Criar Conta" }}
                    </button>
                </form>
                <p class="auth-footer">
                    "Já tem uma conta? " <a href=LOGIN>"Entrar"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_registro() {
        assert_eq!(validate_registro("", "a@b.com", "x", "x"), Err(MISSING_FIELDS));
        assert_eq!(validate_registro("Ana", "a@b.com", "", ""), Err(MISSING_FIELDS));
        assert_eq!(validate_registro("Ana", "a@b.com", "abc", "abd"), Err(PASSWORD_MISMATCH));
        assert_eq!(validate_registro("Ana", "a@b.com", "abc", "abc"), Ok(()));
    }
}
