//! Scrolling list of chat bubbles.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use chatlog::Message;
use leptos::prelude::*;

use crate::state::chat::{ChatState, Perspective};
use crate::util::clock::message_time;

/// Message history for either page. Scrolls to the newest bubble on change.
#[component]
pub fn MessageList(chat: RwSignal<ChatState>, #[prop(into)] perspective: Signal<Perspective>) -> impl IntoView {
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="message-list" node_ref=list_ref>
            {move || {
                let side = perspective.get();
                chat.get()
                    .messages
                    .into_iter()
                    .map(|msg| {
                        let row = row_class(&side, &msg);
                        let bubble = bubble_class(&msg);
                        let time = message_time(&msg);
                        let header = (!msg.is_system)
                            .then(|| {
                                let badge = msg.is_volunteer.then(|| view! { <span class="message__badge">"Voluntário"</span> });
                                view! {
                                    <div class="message__header">
                                        <span class="message__sender">{msg.sender.clone()}</span>
                                        {badge}
                                    </div>
                                }
                            });
                        view! {
                            <div class=row>
                                <div class=bubble>
                                    {header}
                                    <p class="message__text">{msg.text}</p>
                                    <p class="message__time">{time}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Row alignment for a message from the given perspective.
pub fn row_class(perspective: &Perspective, message: &Message) -> &'static str {
    if perspective.is_right_aligned(message) {
        "message-row message-row--right"
    } else {
        "message-row message-row--left"
    }
}

/// Bubble tone: system notices, volunteer support, or a student message.
pub fn bubble_class(message: &Message) -> &'static str {
    if message.is_system {
        "message message--system"
    } else if message.is_volunteer {
        "message message--volunteer"
    } else {
        "message message--student"
    }
}
