//! Footer: brand, links, contact details, newsletter and WhatsApp CTA.

use leptos::{ev, prelude::*};
use teahub_commerce::contact::{enquiry_message, mailto_link, tel_link, WhatsAppLink};
use teahub_core::nav::{NavLink, LEGAL_LINKS, QUICK_LINKS, TEA_CATEGORY_LINKS};
use teahub_core::{NewsletterForm, SubmitOutcome};

use crate::browser::{current_year, scroll_to_anchor, TimeoutSlot};
use crate::content::FOOTER_BLURB;
use crate::sections::{use_site, use_toasts};

fn social_glyph(network: &str) -> &'static str {
    match network {
        "Instagram" => "\u{25ce}",
        "Facebook" => "f",
        "Twitter" => "\u{1d54f}",
        _ => "\u{2197}",
    }
}

/// A column of in-page links.
#[component]
fn LinkColumn(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    let items = links
        .iter()
        .copied()
        .map(|link| {
            view! {
                <li>
                    <a
                        href=link.href
                        on:click=move |ev: ev::MouseEvent| {
                            if let Some(id) = link.anchor_id() {
                                ev.prevent_default();
                                scroll_to_anchor(id);
                            }
                        }
                    >
                        {link.name}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="footer-column">
            <h3>{title}</h3>
            <ul>{items}</ul>
        </div>
    }
}

/// Email sign-up. There is no backend: a submission waits briefly and then
/// shows the welcome toast. The wait is dropped if the footer unmounts.
#[component]
fn Newsletter() -> impl IntoView {
    let site = use_site();
    let toasts = use_toasts();
    let brand = site.config.brand.name.clone();
    let delay_ms = site.config.timing.subscribe_delay_ms;
    let form = RwSignal::new(NewsletterForm::new());
    let pending = TimeoutSlot::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(SubmitOutcome::Accepted(_)) = form.try_update(NewsletterForm::submit) else {
            return;
        };
        let brand = brand.clone();
        pending.set(delay_ms, move || {
            if let Some(toast) = form.try_update(|f| f.complete(&brand)) {
                toasts.show(toast);
            }
        });
    };

    view! {
        <div class="newsletter">
            <p class="newsletter-title">"Join our tea circle"</p>
            <form class="newsletter-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Your email"
                    required
                    prop:value=move || form.with(|f| f.email().to_string())
                    on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                />
                <button
                    type="submit"
                    class="btn btn-gold btn-icon"
                    aria-label="Subscribe to newsletter"
                    disabled=move || form.with(NewsletterForm::is_subscribing)
                >
                    {move || if form.with(NewsletterForm::is_subscribing) { "\u{2026}" } else { "\u{27a4}" }}
                </button>
            </form>
            <p class="newsletter-note">"Double opt-in. Unsubscribe anytime."</p>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let brand = site.config.brand.name.clone();
    let contact = site.config.contact.clone();

    let chat_url = WhatsAppLink::new(contact.whatsapp_number.clone()).url();
    let cta_url = WhatsAppLink::new(contact.whatsapp_number.clone())
        .with_text(enquiry_message(&brand))
        .url();

    let socials = contact
        .socials
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    aria-label=format!("Follow us on {}", social.name)
                >
                    {social_glyph(&social.name)}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let legal = LEGAL_LINKS
        .iter()
        .enumerate()
        .map(|(i, link)| {
            view! {
                {(i > 0).then(|| view! { <span class="legal-dot"></span> })}
                <a href=link.href>{link.name}</a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer id="contact" class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href="#hero" class="footer-logo">{brand.clone()}</a>
                    <p>{FOOTER_BLURB}</p>
                    <div class="social-links">{socials}</div>
                </div>

                <LinkColumn title="Quick Links" links=&QUICK_LINKS/>
                <LinkColumn title="Our Teas" links=&TEA_CATEGORY_LINKS/>

                <div class="footer-column">
                    <h3>"Stay Connected"</h3>
                    <ul class="contact-list">
                        <li>
                            <a href=chat_url target="_blank" rel="noopener noreferrer">
                                <span class="whatsapp-green">"\u{1f4ac}"</span>
                                " WhatsApp Us"
                            </a>
                        </li>
                        <li>
                            <a href=mailto_link(&contact.email)>"\u{2709} " {contact.email.clone()}</a>
                        </li>
                        <li>
                            <a href=tel_link(&contact.phone)>"\u{260e} " {contact.phone.clone()}</a>
                        </li>
                        <li class="contact-address">"\u{1f4cd} " {contact.address.clone()}</li>
                    </ul>
                    <Newsletter/>
                </div>
            </div>

            <div class="footer-cta">
                <div class="container footer-cta-inner">
                    <div>
                        <p class="footer-cta-title">"Ready to discover your perfect tea?"</p>
                        <p class="footer-cta-text">"We're just a message away"</p>
                    </div>
                    <a href=cta_url target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp btn-lg">
                        "\u{1f4ac} Chat on WhatsApp"
                    </a>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container footer-bottom-inner">
                    <p>{format!("\u{a9} {} {}. All rights reserved.", current_year(), brand)}</p>
                    <div class="legal-links">{legal}</div>
                </div>
            </div>
        </footer>
    }
}
