use leptos::prelude::*;

use crate::content::STRIP_IMAGES;

/// Endless strip of tea photography. The image list is rendered twice so the
/// CSS animation can loop without a gap.
#[component]
pub fn ImageScroll() -> impl IntoView {
    let strip = || {
        STRIP_IMAGES
            .iter()
            .map(|(src, alt)| {
                view! {
                    <div class="strip-item">
                        <img src=*src alt=*alt loading="lazy"/>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="image-scroll" aria-label="Tea gallery">
            <div class="strip-track">
                <div class="strip-content">{strip()}</div>
                <div class="strip-content" aria-hidden="true">{strip()}</div>
            </div>
        </section>
    }
}
