//! Delete Confirm Button Component
//!
//! Delete button guarded by the browser's blocking yes/no prompt.

use leptos::prelude::*;

/// Ask the user through `window.confirm`. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Delete button that only fires after the user accepts the prompt
///
/// # Arguments
/// * `button_class` - CSS class for the button (e.g., "icon-btn danger" or "btn btn-destructive")
/// * `label` - Button text
/// * `prompt` - Question shown in the confirmation dialog
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class
            title="Excluir"
            on:click=move |ev| {
                ev.stop_propagation();
                if confirm(&prompt) {
                    on_confirm.run(());
                }
            }
        >
            {label}
        </button>
    }
}
