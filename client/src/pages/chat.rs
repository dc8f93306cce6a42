//! Student chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounts a [`StudentView`] over the browser store once the page hydrates,
//! under a fresh `Anônimo<N>` alias. The view mirrors the log into a
//! `ChatState` signal; this page maps send results to toasts and forwards
//! compose-box edits to the view.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chatlog::{LogError, MessageLog, SendOutcome, StudentView, SystemClock, student_alias};
use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::components::toaster::notify;
use crate::state::chat::{ChatState, Perspective};
use crate::state::toast::{Notice, ToastState};
use crate::util::rng::session_rng;
use crate::util::session::SessionSlot;
use crate::util::storage::BrowserStore;

pub const PLACEHOLDER: &str = "Digite sua mensagem... (Pressione Enter para enviar)";

#[component]
pub fn ChatPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let chat = RwSignal::new(ChatState::default());
    let session = SessionSlot::<StudentView<BrowserStore>>::new();

    // Client-only: effects never run during SSR.
    Effect::new(move || {
        if session.is_filled() {
            return;
        }
        let view = StudentView::mount_with(
            MessageLog::with_default_key(BrowserStore),
            student_alias(&mut session_rng()),
            SystemClock,
            move |messages| chat.update(|c| c.messages = messages.to_vec()),
        );
        chat.update(|c| {
            c.alias = view.alias().to_owned();
            c.messages = view.messages();
        });
        session.fill(view);
    });
    on_cleanup(move || session.clear());

    let on_input = Callback::new(move |text: String| {
        session.with_mut(|view| view.set_draft(text.clone()));
        chat.update(|c| c.draft = text);
    });

    let on_send = Callback::new(move |()| {
        let Some(result) = session.with_mut(StudentView::send_draft) else {
            return;
        };
        if let Some(notice) = send_notice(&result) {
            notify(toasts, notice);
        }
        let draft = session.with(|view| view.draft().to_owned()).unwrap_or_default();
        chat.update(|c| c.draft = draft);
    });

    let perspective = Signal::derive(move || Perspective::Student { alias: chat.with(|c| c.alias.clone()) });

    view! {
        <div class="chat-page">
            <header class="chat-header">
                <a href="/" class="btn btn--ghost">"Voltar"</a>
                <div>
                    <h1>"Chat de Apoio Anônimo"</h1>
                    <p>{move || connected_as(&chat.with(|c| c.alias.clone()))}</p>
                </div>
            </header>

            <div class="chat-notice">
                <p>
                    <strong>"Espaço Seguro:"</strong>
                    " Suas conversas são anônimas e privadas. Não coletamos dados pessoais. Se você está em crise, procure ajuda profissional imediatamente."
                </p>
            </div>

            <main class="chat-main">
                <MessageList chat=chat perspective=perspective/>
                <Composer
                    chat=chat
                    placeholder=PLACEHOLDER.to_owned()
                    disabled=false
                    on_input=on_input
                    on_send=on_send
                />
            </main>

            <footer class="chat-footer">
                <span>"Apoio 24/7"</span>
                <span>"Voluntários Online"</span>
                <span>"100% Anônimo"</span>
            </footer>
        </div>
    }
}

/// Toast for a student send. Blank drafts are silent.
pub fn send_notice(result: &Result<SendOutcome, LogError>) -> Option<Notice> {
    match result {
        Ok(SendOutcome::Sent(_)) => Some(Notice::STUDENT_SENT),
        Ok(SendOutcome::Ignored) => None,
        Err(_) => Some(Notice::SEND_FAILED),
    }
}

/// Header subtitle; blank until the view mounts on the client.
pub fn connected_as(alias: &str) -> String {
    if alias.is_empty() { String::new() } else { format!("Você está conectado como {alias}") }
}
