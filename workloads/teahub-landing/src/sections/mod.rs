//! Page sections, top to bottom.

mod about;
mod floating_contact;
mod footer;
mod hero;
mod image_scroll;
mod navbar;
mod product_card;
mod products;
mod reviews;
mod scroll_progress;
mod toast;

pub use about::*;
pub use floating_contact::*;
pub use footer::*;
pub use hero::*;
pub use image_scroll::*;
pub use navbar::*;
pub use products::*;
pub use reviews::*;
pub use scroll_progress::*;
pub use toast::*;

use leptos::prelude::*;

use crate::SharedSite;

pub(crate) fn use_site() -> SharedSite {
    expect_context::<SharedSite>()
}

/// Inline style staggering a card's fade-in.
pub(crate) fn transition_delay(visible: bool, delay_ms: usize) -> String {
    let delay = if visible { delay_ms } else { 0 };
    format!("transition-delay: {}ms", delay)
}

/// A `<script type="application/ld+json">` block. Renders nothing when the
/// document could not be serialized.
#[component]
pub fn JsonLd(body: Option<String>) -> impl IntoView {
    body.map(|body| view! { <script type="application/ld+json" inner_html=body></script> })
}
