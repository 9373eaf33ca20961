//! Notifications
//!
//! Toast queue shared by every view. Entries dismiss themselves after the
//! configured lifetime.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Anything that can show a user-facing notification
pub trait Notify {
    fn notify(&self, title: &str, description: &str, variant: ToastVariant);

    fn success(&self, title: &str, description: &str) {
        self.notify(title, description, ToastVariant::Default);
    }

    fn error(&self, title: &str, description: &str) {
        self.notify(title, description, ToastVariant::Destructive);
    }
}

/// Reactive toast queue
#[derive(Clone, Copy)]
pub struct Toaster {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    lifetime_ms: u32,
}

impl Toaster {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            lifetime_ms,
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notify for Toaster {
    fn notify(&self, title: &str, description: &str, variant: ToastVariant) {
        self.next_id.update_value(|n| *n += 1);
        let id = self.next_id.get_value();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
                variant,
            })
        });

        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(toaster.lifetime_ms).await;
            toaster.dismiss(id);
        });
    }
}
