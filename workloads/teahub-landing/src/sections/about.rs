use leptos::{html, prelude::*};

use crate::browser::{reveal_class, use_reveal};
use crate::content::{ABOUT_STORY, FEATURES, MISSION_QUOTE};
use crate::sections::{transition_delay, use_site};

#[component]
pub fn About() -> impl IntoView {
    let site = use_site();
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, site.config.visibility.about);

    let cards = FEATURES
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            view! {
                <div
                    class=reveal_class("feature-card", visible)
                    style=move || transition_delay(visible.get(), 300 + i * 100)
                >
                    <span class="feature-glyph">{feature.glyph}</span>
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="about" class="section about" node_ref=section>
            <div class="about-pattern"></div>
            <div class="container">
                <div class="section-header">
                    <span class=reveal_class("eyebrow", visible)>"Our Story"</span>
                    <h2 class=reveal_class("section-title", visible)>
                        "Crafted for the "
                        <span class="text-gradient-gold">"Connoisseur"</span>
                    </h2>
                    <p class=reveal_class("section-lead", visible)>{ABOUT_STORY}</p>
                </div>

                <div class="feature-grid">{cards}</div>

                <div class=reveal_class("mission", visible)>
                    <blockquote>{format!("\u{201c}{}\u{201d}", MISSION_QUOTE)}</blockquote>
                    <cite>{format!("The {} Philosophy", site.config.brand.name)}</cite>
                </div>
            </div>
        </section>
    }
}
