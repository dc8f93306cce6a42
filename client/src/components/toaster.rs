//! Toast stack rendered once at the app root.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;

use crate::state::toast::{DISMISS_AFTER_MS, Notice, ToastKind, ToastState};

/// Show `notice` and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let id = toasts.try_update(|t| t.push(notice));

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || {
                toasts.try_update(|t| t.dismiss(id));
            })
            .forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, DISMISS_AFTER_MS);
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast_class(toast.notice.kind)>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.notice.title}</p>
                                    <p class="toast__description">{toast.notice.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Fechar"
                                    on:click=move |_| {
                                        toasts.update(|t| {
                                            t.dismiss(id);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Default => "toast",
        ToastKind::Destructive => "toast toast--destructive",
    }
}
