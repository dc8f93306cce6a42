//! Volunteer sidebar: canned replies and conduct tips.

use chatlog::QUICK_RESPONSES;
use leptos::prelude::*;

/// Conduct reminders shown under the quick responses.
pub const VOLUNTEER_TIPS: [&str; 5] = [
    "Seja empático e acolhedor",
    "Escute sem julgar",
    "Ofereça apoio, não soluções",
    "Mantenha a confidencialidade",
    "Encoraje busca por ajuda profissional quando necessário",
];

/// Canned replies. Picking one fills the draft; it never sends.
#[component]
pub fn QuickResponses(#[prop(into)] disabled: Signal<bool>, on_pick: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="quick-responses">
            <h3 class="quick-responses__title">"Respostas Rápidas"</h3>
            {QUICK_RESPONSES
                .iter()
                .map(|&text| {
                    view! {
                        <button
                            class="quick-responses__item"
                            disabled=move || disabled.get()
                            on:click=move |_| on_pick.run(text)
                        >
                            {text}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="quick-responses__tips">
                <h4>"Dicas para Voluntários"</h4>
                <ul>
                    {VOLUNTEER_TIPS.iter().map(|&tip| view! { <li>{tip}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
