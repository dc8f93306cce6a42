//! Compose box with send button.
//!
//! Enter sends; Shift+Enter inserts a newline. The send button is disabled
//! while the draft is blank or the composer itself is disabled.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn Composer(
    chat: RwSignal<ChatState>,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_input: Callback<String>,
    on_send: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_send_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            on_send.run(());
        }
    };

    let can_send = move || chat.with(ChatState::has_draft) && !disabled.get();

    view! {
        <div class="composer">
            <textarea
                class="composer__input"
                rows="2"
                placeholder=move || placeholder.get()
                disabled=move || disabled.get()
                prop:value=move || chat.with(|c| c.draft.clone())
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button
                class="btn btn--primary composer__send"
                on:click=move |_| on_send.run(())
                disabled=move || !can_send()
            >
                "Enviar"
            </button>
        </div>
    }
}

/// Whether a keydown should submit the draft rather than edit it.
pub fn is_send_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
