use leptos::{ev, prelude::*};
use teahub_commerce::contact::{enquiry_message, WhatsAppLink};
use teahub_core::nav::{MobileMenu, NavLink, NAV_LINKS};
use teahub_core::scroll::ScrollThreshold;

use crate::browser::{on_window_scroll, scroll_to_anchor, scroll_y};
use crate::sections::use_site;

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_site();
    let threshold = ScrollThreshold(site.config.scroll.navbar_threshold);
    let scrolled = RwSignal::new(threshold.is_past(scroll_y()));
    let menu = RwSignal::new(MobileMenu::default());

    on_window_scroll(move |y| {
        let past = threshold.is_past(y);
        if scrolled.get_untracked() != past {
            scrolled.set(past);
        }
    });

    let brand = site.config.brand.name.clone();
    let contact_url = WhatsAppLink::new(site.config.contact.whatsapp_number.clone())
        .with_text(enquiry_message(&brand))
        .url();

    let navigate = move |link: NavLink| {
        menu.update(MobileMenu::close);
        if let Some(id) = link.anchor_id() {
            scroll_to_anchor(id);
        }
    };

    let links = move |item_class: &'static str| {
        NAV_LINKS
            .iter()
            .copied()
            .map(|link| {
                view! {
                    <li>
                        <a
                            href=link.href
                            class=item_class
                            on:click=move |ev: ev::MouseEvent| {
                                ev.prevent_default();
                                navigate(link);
                            }
                        >
                            {link.name}
                        </a>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <nav class="container navbar-inner">
                <a
                    href="#hero"
                    class="navbar-brand"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        navigate(NAV_LINKS[0]);
                    }
                >
                    <img src="/assets/logo.png" alt=format!("{} Logo", brand) class="navbar-logo"/>
                    <span class="navbar-name">{brand.clone()}</span>
                </a>

                <ul class="navbar-links">{links("nav-link")}</ul>

                <div class="navbar-actions">
                    <a href=contact_url.clone() target="_blank" rel="noopener noreferrer" class="btn btn-gold btn-sm">
                        "Contact Us"
                    </a>
                </div>

                <button
                    class="navbar-toggle"
                    aria-label=move || if menu.with(MobileMenu::is_open) { "Close menu" } else { "Open menu" }
                    on:click=move |_| menu.update(MobileMenu::toggle)
                >
                    {move || if menu.with(MobileMenu::is_open) { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </nav>

            <div class=move || {
                if menu.with(MobileMenu::is_open) { "mobile-menu open" } else { "mobile-menu" }
            }>
                <ul class="container">
                    {links("mobile-link")}
                    <li class="mobile-cta">
                        <a href=contact_url target="_blank" rel="noopener noreferrer" class="btn btn-gold btn-block">
                            "Contact on WhatsApp"
                        </a>
                    </li>
                </ul>
            </div>
        </header>
    }
}
