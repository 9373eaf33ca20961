//! Toast Stack Component
//!
//! Renders the shared toast queue in a fixed corner of the screen.

use leptos::prelude::*;

use crate::context::use_app;
use crate::toast::{Toast, ToastVariant};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_app().toaster;

    view! {
        <div class="toast-stack">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
