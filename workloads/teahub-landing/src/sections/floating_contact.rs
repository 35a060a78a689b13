use leptos::{ev, prelude::*};
use teahub_commerce::contact::{enquiry_message, WhatsAppLink};
use teahub_core::{ContactPrompt, PromptAction};

use crate::browser::{on_window_scroll, TimeoutSlot};
use crate::sections::use_site;

/// WhatsApp button pinned to the corner once the reader is past the hero.
///
/// The first time it appears it offers a "Need help?" tooltip after a short
/// delay, which hides itself again.
#[component]
pub fn FloatingContact() -> impl IntoView {
    let site = use_site();
    let timing = site.config.timing;
    let prompt = RwSignal::new(ContactPrompt::new(site.config.scroll.contact_threshold));
    let tooltip_timer = TimeoutSlot::new();

    on_window_scroll(move |y| {
        let was_visible = prompt.with_untracked(ContactPrompt::is_button_visible);
        let action = prompt
            .try_update_untracked(|p| p.on_scroll(y))
            .unwrap_or(PromptAction::None);
        if prompt.with_untracked(ContactPrompt::is_button_visible) != was_visible {
            prompt.notify();
        }

        if action == PromptAction::ScheduleTooltip {
            tooltip_timer.set(timing.tooltip_delay_ms, move || {
                prompt.try_update(ContactPrompt::show_tooltip);
                tooltip_timer.set(timing.tooltip_visible_ms, move || {
                    prompt.try_update(ContactPrompt::hide_tooltip);
                });
            });
        }
    });

    let dismiss = move |_: ev::MouseEvent| {
        tooltip_timer.cancel();
        prompt.update(ContactPrompt::dismiss);
    };

    let url = WhatsAppLink::new(site.config.contact.whatsapp_number.clone())
        .with_text(enquiry_message(&site.config.brand.name))
        .url();

    view! {
        <div class=move || {
            if prompt.with(ContactPrompt::is_button_visible) {
                "floating-contact shown"
            } else {
                "floating-contact"
            }
        }>
            <div class=move || {
                if prompt.with(ContactPrompt::is_tooltip_visible) {
                    "contact-tooltip shown"
                } else {
                    "contact-tooltip"
                }
            }>
                <button class="tooltip-close" aria-label="Close tooltip" on:click=dismiss>
                    "\u{2715}"
                </button>
                <p class="tooltip-title">"Need help?"</p>
                <p class="tooltip-text">"Chat with us on WhatsApp for quick assistance!"</p>
            </div>

            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-button"
                aria-label="Chat on WhatsApp"
            >
                <span class="whatsapp-glyph">"\u{1f4ac}"</span>
                <span class="whatsapp-pulse"></span>
            </a>
        </div>
    }
}
