//! New Ticket Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::TagInput;
use crate::context::use_app;
use crate::models::{ChamadoForm, Prioridade};
use crate::routes::CHAMADOS;
use crate::toast::Notify;

pub(crate) const MISSING_REQUIRED: &str = "Por favor, preencha todos os campos obrigatórios.";

/// Trim and check the required fields, producing the request payload.
pub(crate) fn build_form(
    titulo: &str,
    descricao: &str,
    prioridade: &str,
    tags: Vec<String>,
) -> Result<ChamadoForm, &'static str> {
    let titulo = titulo.trim();
    let descricao = descricao.trim();
    match Prioridade::parse(prioridade) {
        Some(prioridade) if !titulo.is_empty() && !descricao.is_empty() => Ok(ChamadoForm {
            titulo: titulo.to_string(),
            descricao: descricao.to_string(),
            prioridade,
            tags,
        }),
        _ => Err(MISSING_REQUIRED),
    }
}

#[component]
pub fn NovoChamadoPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let titulo = RwSignal::new(String::new());
    let descricao = RwSignal::new(String::new());
    let prioridade = RwSignal::new(String::new());
    let tags = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = match build_form(
            &titulo.get_untracked(),
            &descricao.get_untracked(),
            &prioridade.get_untracked(),
            tags.get_untracked(),
        ) {
            Ok(form) => form,
            Err(message) => {
                ctx.toaster.error("Erro", message);
                return;
            }
        };

        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match ctx.api.create_chamado(&form).await {
                Ok(chamado) => {
                    log::info!("[CHAMADO] Created ticket {}", chamado.id);
                    ctx.toaster.success("Sucesso", "Chamado criado com sucesso!");
                    navigate(CHAMADOS, NavigateOptions::default());
                }
                Err(_) => busy.set(false),
            }
        });
    };

    view! {
        <div class="page novo-chamado-page">
            <div class="page-header">
                <div>
                    <a class="back-link" href=CHAMADOS>"← Voltar"</a>
                    <h1>"Novo Chamado"</h1>
                    <p class="page-description">"Preencha as informações para abrir um novo chamado"</p>
                </div>
            </div>

            <section class="card">
                <form class="chamado-form" on:submit=on_submit>
                    <label for="titulo">"Título *"</label>
                    <input
                        id="titulo"
                        type="text"
                        placeholder="Descreva brevemente o problema"
                        prop:value=move || titulo.get()
                        on:input=move |ev| titulo.set(event_target_value(&ev))
                    />

                    <label for="descricao">"Descrição *"</label>
                    <textarea
                        id="descricao"
                        rows="5"
                        placeholder="Descreva detalhadamente o problema"
                        prop:value=move || descricao.get()
                        on:input=move |ev| descricao.set(event_target_value(&ev))
                    ></textarea>

                    <label for="prioridade">"Prioridade *"</label>
                    <select
                        id="prioridade"
                        prop:value=move || prioridade.get()
                        on:change=move |ev| prioridade.set(event_target_value(&ev))
                    >
                        <option value="">"Selecione a prioridade"</option>
                        {Prioridade::ALL
                            .iter()
                            .map(|p| view! { <option value=p.as_str().to_string()>{p.label().to_string()}</option> })
                            .collect_view()}
                    </select>

                    <label for="tags">"Tags"</label>
                    <TagInput tags />

                    <div class="form-actions">
                        <a class="btn btn-outline" href=CHAMADOS>"Cancelar"</a>
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Criando..." } else { "Criar Chamado" }}
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
}
