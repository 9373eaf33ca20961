use leptos::prelude::*;

/// Dashboard/users counter card
#[component]
pub fn StatCard(
    title: &'static str,
    value: usize,
    #[prop(default = "stat-value")] value_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <p class="stat-title">{title}</p>
            <p class=value_class>{value}</p>
        </div>
    }
}
