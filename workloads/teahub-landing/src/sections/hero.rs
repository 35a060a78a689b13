use leptos::{ev, html, prelude::*};
use teahub_core::scroll::{hero_in_view, ParallaxOffsets};

use crate::browser::{on_window_scroll, scroll_to_anchor};
use crate::content::{HERO_SUBTITLE, HERO_TITLE, HERO_TITLE_ACCENT, TRUST_BADGES};

const STEAM_PARTICLES: usize = 6;

/// Full-height banner. The background and the floating cup move with the
/// scroll position while the hero is on screen.
#[component]
pub fn Hero() -> impl IntoView {
    let hero_ref = NodeRef::<html::Section>::new();
    let offsets = RwSignal::new(ParallaxOffsets::default());

    on_window_scroll(move |y| {
        let Some(hero) = hero_ref.get_untracked() else {
            return;
        };
        if hero_in_view(hero.get_bounding_client_rect().bottom()) {
            offsets.set(ParallaxOffsets::at(y));
        }
    });

    let explore = move |_: ev::MouseEvent| scroll_to_anchor("flavours");

    let steam = (0..STEAM_PARTICLES)
        .map(|i| {
            let style = format!(
                "left: {}%; bottom: 30%; animation-delay: {:.1}s; animation-duration: {:.1}s",
                20 + i * 12,
                i as f64 * 0.8,
                3.0 + i as f64 * 0.5
            );
            view! { <div class="steam-particle" style=style></div> }
        })
        .collect::<Vec<_>>();

    let badges = TRUST_BADGES
        .iter()
        .enumerate()
        .map(|(i, badge)| {
            view! {
                {(i > 0).then(|| view! { <span class="badge-dot"></span> })}
                <span>{*badge}</span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="hero" class="hero" node_ref=hero_ref>
            <div class="hero-layers">
                <div class="hero-base"></div>
                <div
                    class="hero-background"
                    style=move || format!("transform: {}", offsets.get().background_transform())
                >
                    <img src="/assets/hero-tea-bg.jpg" alt="Premium tea leaves background" loading="eager"/>
                </div>
                <div
                    class="hero-floating"
                    style=move || format!("transform: {}", offsets.get().floating_transform())
                >
                    <img src="/assets/tea-cup-hero.jpg" alt="Elegant tea cup" loading="eager"/>
                </div>
                <div class="hero-overlay"></div>
                <div class="hero-steam">{steam}</div>
            </div>

            <div class="container hero-content">
                <h1 class="hero-title fade-in-up">
                    {HERO_TITLE}
                    <span class="text-gradient-gold">{HERO_TITLE_ACCENT}</span>
                </h1>
                <p class="hero-subtitle fade-in-up">{HERO_SUBTITLE}</p>
                <div class="hero-actions fade-in-up">
                    <button class="btn btn-hero" on:click=explore>
                        "\u{1f6cd} Explore Collection"
                    </button>
                </div>
                <div class="hero-badges fade-in">{badges}</div>
            </div>

            <button class="hero-scroll-hint" aria-label="Scroll to explore" on:click=explore>
                "\u{2304}"
            </button>
        </section>
    }
}
