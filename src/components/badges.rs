//! Badge Components
//!
//! Small labelled pills for ticket status, priority, user role and tags.

use leptos::prelude::*;

use crate::models::{Papel, Prioridade, Status, Tag};

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    let label = status.label().to_string();
    view! { <span class=status.badge_class()>{label}</span> }
}

#[component]
pub fn PriorityBadge(prioridade: Prioridade) -> impl IntoView {
    let label = prioridade.label().to_string();
    view! { <span class=prioridade.badge_class()>{label}</span> }
}

#[component]
pub fn PapelBadge(papel: Papel) -> impl IntoView {
    let class = match papel {
        Papel::Admin => "badge role-admin",
        Papel::User => "badge role-user",
    };
    view! { <span class=class>{papel.label()}</span> }
}

/// Tag pills; renders nothing for an empty list
#[component]
pub fn TagList(tags: Vec<Tag>) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
            <div class="tag-list">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="badge tag-badge">{tag.nome}</span> })
                    .collect_view()}
            </div>
        }
    })
}
