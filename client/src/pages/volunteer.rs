//! Volunteer chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounts a [`VolunteerView`] under a fresh `Voluntário<N>` alias. The
//! volunteer starts offline: the composer and quick responses stay disabled
//! until the availability toggle is switched on. Availability is local to
//! this page and never written to the shared log.

#[cfg(test)]
#[path = "volunteer_test.rs"]
mod volunteer_test;

use chatlog::{MessageLog, SendError, SendOutcome, SystemClock, VolunteerView, volunteer_alias};
use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::components::quick_responses::QuickResponses;
use crate::components::session_panel::SessionPanel;
use crate::components::toaster::notify;
use crate::state::chat::{ChatState, Perspective};
use crate::state::toast::{Notice, ToastState};
use crate::util::rng::session_rng;
use crate::util::session::SessionSlot;
use crate::util::storage::BrowserStore;

#[component]
pub fn VolunteerPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let chat = RwSignal::new(ChatState::default());
    let session = SessionSlot::<VolunteerView<BrowserStore>>::new();

    Effect::new(move || {
        if session.is_filled() {
            return;
        }
        let view = VolunteerView::mount_with(
            MessageLog::with_default_key(BrowserStore),
            volunteer_alias(&mut session_rng()),
            SystemClock,
            move |messages| chat.update(|c| c.messages = messages.to_vec()),
        );
        chat.update(|c| {
            c.alias = view.alias().to_owned();
            c.messages = view.messages();
            c.online = view.is_online();
        });
        session.fill(view);
    });
    on_cleanup(move || session.clear());

    let on_toggle = move |_| {
        let Some(online) = session.with_mut(VolunteerView::toggle_online) else {
            return;
        };
        chat.update(|c| c.online = online);
        notify(toasts, Notice::for_availability(online));
    };

    let on_input = Callback::new(move |text: String| {
        session.with_mut(|view| view.set_draft(text.clone()));
        chat.update(|c| c.draft = text);
    });

    let on_pick = Callback::new(move |text: &'static str| {
        session.with_mut(|view| view.use_quick_response(text));
        chat.update(|c| c.draft = text.to_owned());
    });

    let on_send = Callback::new(move |()| {
        let Some(result) = session.with_mut(VolunteerView::send_draft) else {
            return;
        };
        if let Some(notice) = send_notice(&result) {
            notify(toasts, notice);
        }
        let draft = session.with(|view| view.draft().to_owned()).unwrap_or_default();
        chat.update(|c| c.draft = draft);
    });

    let online = Signal::derive(move || chat.with(|c| c.online));
    let offline = Signal::derive(move || !online.get());
    let hint = Signal::derive(move || placeholder(online.get()).to_owned());

    view! {
        <div class="chat-page chat-page--volunteer">
            <header class="chat-header">
                <a href="/" class="btn btn--ghost">"Voltar"</a>
                <div>
                    <h1>"Área do Voluntário"</h1>
                    <p>{move || format!("Conectado como {}", chat.with(|c| c.alias.clone()))}</p>
                </div>
                <button class=move || toggle_class(online.get()) on:click=on_toggle>
                    {move || toggle_label(online.get())}
                </button>
            </header>

            <div class="chat-notice">
                <p>
                    <strong>"Área do Voluntário:"</strong>
                    " Você está ajudando estudantes que precisam de apoio emocional. Seja empático, respeitoso e lembre-se de que suas palavras podem fazer a diferença."
                </p>
            </div>

            <main class="chat-main chat-main--with-sidebar">
                <div class="chat-main__conversation">
                    <MessageList chat=chat perspective=Perspective::Volunteer/>
                    <Composer
                        chat=chat
                        placeholder=hint
                        disabled=offline
                        on_input=on_input
                        on_send=on_send
                    />
                </div>
                <aside class="chat-sidebar">
                    <QuickResponses disabled=offline on_pick=on_pick/>
                    <SessionPanel chat=chat/>
                </aside>
            </main>
        </div>
    }
}

/// Toast for a volunteer send. Blank drafts are silent.
pub fn send_notice(result: &Result<SendOutcome, SendError>) -> Option<Notice> {
    match result {
        Ok(SendOutcome::Sent(_)) => Some(Notice::VOLUNTEER_SENT),
        Ok(SendOutcome::Ignored) => None,
        Err(SendError::Offline) => Some(Notice::MUST_BE_ONLINE),
        Err(SendError::Log(_)) => Some(Notice::SEND_FAILED),
    }
}

pub fn placeholder(online: bool) -> &'static str {
    if online { "Digite uma mensagem de apoio..." } else { "Ative seu status online para enviar mensagens" }
}

pub fn toggle_label(online: bool) -> &'static str {
    if online { "Online" } else { "Offline" }
}

pub fn toggle_class(online: bool) -> &'static str {
    if online { "availability availability--online" } else { "availability availability--offline" }
}
