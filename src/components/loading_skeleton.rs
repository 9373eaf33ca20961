use leptos::prelude::*;

/// Pulsing placeholder rows shown while a view is fetching
#[component]
pub fn LoadingSkeleton(
    #[prop(default = 5)] rows: usize,
    #[prop(default = "skeleton-row")] row_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="skeleton animate-pulse">
            {(0..rows).map(|_| view! { <div class=row_class></div> }).collect_view()}
        </div>
    }
}
