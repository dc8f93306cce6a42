//! Volunteer session status card.

#[cfg(test)]
#[path = "session_panel_test.rs"]
mod session_panel_test;

use chatlog::SessionStatus;
use leptos::prelude::*;
use time::UtcOffset;

use crate::state::chat::ChatState;
use crate::util::clock::local_offset;

#[component]
pub fn SessionPanel(chat: RwSignal<ChatState>) -> impl IntoView {
    let status = move || chat.with(ChatState::session_status);

    view! {
        <div class="session-panel">
            <h4>"Status da Sessão"</h4>
            <p>{move || format!("Mensagens no chat: {}", status().message_count)}</p>
            <p>{move || format!("Status: {}", status().availability_label())}</p>
            <p>{move || format!("Última atividade: {}", last_activity_label(&status(), local_offset()))}</p>
        </div>
    }
}

/// `HH:MM` of the newest message, or `Nenhuma` for an empty log.
pub fn last_activity_label(status: &SessionStatus, offset: UtcOffset) -> String {
    status
        .last_activity
        .map_or_else(|| "Nenhuma".to_owned(), |at| chatlog::message::clock_label(at, offset))
}
