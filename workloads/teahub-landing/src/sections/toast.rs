use leptos::prelude::*;
use teahub_core::Toast;

use crate::browser::TimeoutSlot;
use crate::sections::use_site;

/// Handle for showing a toast from anywhere on the page.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<Option<Toast>>);

impl Toasts {
    /// Show `toast`, replacing the one on screen.
    pub fn show(&self, toast: Toast) {
        self.0.try_set(Some(toast));
    }

    pub fn dismiss(&self) {
        self.0.try_set(None);
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts(RwSignal::new(None));
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the current toast and dismisses it after the configured time.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let lifetime = use_site().config.timing.toast_ms;
    let expiry = TimeoutSlot::new();

    Effect::new(move || {
        if toasts.0.with(Option::is_some) {
            expiry.set(lifetime, move || toasts.dismiss());
        } else {
            expiry.cancel();
        }
    });

    view! {
        <div class="toast-region" aria-live="polite">
            {move || {
                toasts
                    .0
                    .get()
                    .map(|toast| {
                        view! {
                            <div class="toast" role="status">
                                <div>
                                    <p class="toast-title">{toast.title}</p>
                                    <p class="toast-description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast-close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.dismiss()
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
