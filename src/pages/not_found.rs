use leptos::prelude::*;

use crate::routes::DASHBOARD;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"404"</h1>
            <p>"Página não encontrada"</p>
            <a class="btn btn-primary" href=DASHBOARD>"Voltar ao Dashboard"</a>
        </div>
    }
}
