use leptos::prelude::*;

use crate::browser::{document_scroll_progress, on_window_scroll};

/// Thin bar along the top edge showing how far down the page the reader is.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);

    Effect::new(move || progress.set(document_scroll_progress()));
    on_window_scroll(move |_| progress.set(document_scroll_progress()));

    view! {
        <div class="scroll-progress" aria-hidden="true">
            <div
                class="scroll-progress-bar"
                style=move || format!("width: {}%", progress.get())
            ></div>
        </div>
    }
}
