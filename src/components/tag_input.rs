//! Tag Input Component
//!
//! Free-text tag entry for the new-ticket form. Enter or "+" adds the typed
//! tag; clicking a tag removes it.

use leptos::prelude::*;

/// Push `input` (trimmed) unless it is blank or already present.
/// Returns whether the list changed.
pub fn push_tag(tags: &mut Vec<String>, input: &str) -> bool {
    let tag = input.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

/// Tag entry bound to `tags`
///
/// Lives inside another form, so it handles Enter itself instead of
/// nesting a `<form>`.
#[component]
pub fn TagInput(tags: RwSignal<Vec<String>>) -> impl IntoView {
    let input_value = RwSignal::new(String::new());

    let add_tag = move || {
        let raw = input_value.get_untracked();
        let mut added = false;
        tags.update(|tags| added = push_tag(tags, &raw));
        if added {
            input_value.set(String::new());
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_tag();
        }
    };

    view! {
        <div class="tag-input-wrapper">
            <div class="tag-input-row">
                <input
                    id="tags"
                    type="text"
                    placeholder="Digite uma tag e pressione Enter"
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| input_value.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button type="button" class="btn btn-outline" on:click=move |_| add_tag()>
                    "+"
                </button>
            </div>
            <Show when=move || !tags.with(Vec::is_empty)>
                <div class="tag-list">
                    <For
                        each=move || tags.get()
                        key=|tag| tag.clone()
                        children=move |tag: String| {
                            let label = format!("{} ×", tag);
                            view! {
                                <span
                                    class="badge tag-badge removable"
                                    title="Remover"
                                    on:click=move |_| tags.update(|tags| tags.retain(|t| t != &tag))
                                >
                                    {label}
                                </span>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tag_trims_and_skips_blank() {
        let mut tags = Vec::new();
        assert!(push_tag(&mut tags, "  windows "));
        assert!(!push_tag(&mut tags, "   "));
        assert_eq!(tags, vec!["windows"]);
    }

    #[test]
    fn test_push_tag_rejects_duplicates() {
        let mut tags = vec!["linux".to_string()];
        assert!(!push_tag(&mut tags, "linux "));
        assert!(push_tag(&mut tags, "Linux"));
        assert_eq!(tags.len(), 2);
    }
}
